// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of Elpris.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use crate::pricing::aggregate::aggregate_hourly;
use chrono::{DateTime, Utc};
use elpris_types::PriceSeries;
use tracing::debug;

/// Drop the leading points that ended before `now`.
///
/// Trimming stops at the first point that has not ended yet; the point
/// covering `now` is kept.
pub fn remaining_from(series: PriceSeries, now: DateTime<Utc>) -> PriceSeries {
    let mut points = series.into_points();
    let first_live = points
        .iter()
        .position(|p| p.time_end.with_timezone(&Utc) >= now)
        .unwrap_or(points.len());

    if first_live > 0 {
        debug!("Dropping {} elapsed price points", first_live);
    }

    PriceSeries::new(points.split_off(first_live))
}

/// Build the upcoming price horizon from one day and the day after it.
///
/// Both days are brought to hourly resolution first. Elapsed hours are removed
/// from the first day only when `trim_past` is set (the day is today).
pub fn assemble_horizon(
    day: &PriceSeries,
    next_day: &PriceSeries,
    now: DateTime<Utc>,
    trim_past: bool,
) -> PriceSeries {
    let hourly_day = aggregate_hourly(day);
    let mut horizon = if trim_past {
        remaining_from(hourly_day, now)
    } else {
        hourly_day
    };

    let hourly_next = aggregate_hourly(next_day);
    let from_next = hourly_next.len();
    horizon.append(hourly_next);

    debug!(
        "Horizon holds {} hourly points ({} from the following day)",
        horizon.len(),
        from_next
    );

    horizon
}
