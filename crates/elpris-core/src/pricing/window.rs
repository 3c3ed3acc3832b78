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

use crate::pricing::stats::mean_price;
use elpris_types::{PriceSeries, WindowResult};
use tracing::debug;

/// Prices are summed in millionths of a krona so equal windows compare equal.
#[expect(clippy::cast_possible_truncation)]
fn micro_units(sek_per_kwh: f64) -> i64 {
    (sek_per_kwh * 1e6).round() as i64
}

/// Find the contiguous run of `duration` points with the lowest mean price.
///
/// Uses a running sum that is slid one point at a time, so the search is
/// linear in the series length. The earliest window wins when sums are equal.
/// An empty series, a zero duration, or a duration that covers the whole
/// series yields the series itself.
pub fn cheapest_window(series: &PriceSeries, duration: usize) -> WindowResult {
    let points = series.points();

    if points.is_empty() || duration == 0 || duration >= points.len() {
        return WindowResult {
            start_index: 0,
            points: points.to_vec(),
            mean: mean_price(points),
        };
    }

    let mut running: i64 = points[..duration]
        .iter()
        .map(|p| micro_units(p.sek_per_kwh))
        .sum();
    let mut best_sum = running;
    let mut best_start = 0;

    // `leaving` is the point at index i, `entering` the one at i + duration
    for (i, (leaving, entering)) in points.iter().zip(&points[duration..]).enumerate() {
        running += micro_units(entering.sek_per_kwh) - micro_units(leaving.sek_per_kwh);
        if running < best_sum {
            best_sum = running;
            best_start = i + 1;
        }
    }

    let window = points[best_start..best_start + duration].to_vec();
    let mean = mean_price(&window);

    debug!(
        "Cheapest {}-point window starts at index {} (mean {:.4} SEK/kWh)",
        duration, best_start, mean
    );

    WindowResult {
        start_index: best_start,
        mean,
        points: window,
    }
}
