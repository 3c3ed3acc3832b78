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

//! Report assembly: fetch, fall back, build the horizon and run the kernel

use crate::error::Result;
use crate::pricing::{assemble_horizon, cheapest_window, summarize};
use crate::query::{DateSpec, PriceQuery, QueryMode, market_today};
use crate::source::PriceSource;
use chrono::{DateTime, NaiveDate, Utc};
use elpris_types::{ChargingWindow, PriceSeries, PriceSummary, WindowResult, Zone};
use serde::Serialize;
use tracing::{info, warn};

/// Something the user should be told about how the request was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    InvalidDate { input: String },
    NoDataFallback { requested: NaiveDate, used: NaiveDate },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportBody {
    NoData,
    FullDay {
        series: PriceSeries,
        summary: PriceSummary,
        sorted: bool,
    },
    Charging {
        window: ChargingWindow,
        result: WindowResult,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    pub zone: Zone,
    /// Date the prices were actually taken from
    pub date: NaiveDate,
    pub notices: Vec<Notice>,
    pub body: ReportBody,
}

/// Answer `query` from `source` as of `now`.
///
/// A requested date without published prices falls back to today. The
/// horizon is the chosen day (elapsed hours removed when it is today)
/// followed by the next day, when the next day is available.
pub fn build_report<S: PriceSource + ?Sized>(
    source: &S,
    query: &PriceQuery,
    now: DateTime<Utc>,
) -> Result<PriceReport> {
    let today = market_today(now);
    let mut notices = Vec::new();

    let mut date = match &query.date {
        DateSpec::Today => today,
        DateSpec::On(date) => *date,
        DateSpec::Invalid(input) => {
            warn!("Invalid date '{}', using {}", input, today);
            notices.push(Notice::InvalidDate {
                input: input.clone(),
            });
            today
        }
    };

    let mut day = source.fetch(query.zone, date)?;
    if day.is_empty() && date != today {
        warn!("No data for {} {}, falling back to {}", query.zone, date, today);
        notices.push(Notice::NoDataFallback {
            requested: date,
            used: today,
        });
        date = today;
        day = source.fetch(query.zone, date)?;
    }

    if day.is_empty() {
        info!("No prices available for {} on {}", query.zone, date);
        return Ok(PriceReport {
            zone: query.zone,
            date,
            notices,
            body: ReportBody::NoData,
        });
    }

    let next_day = match date.succ_opt() {
        Some(next) => source.fetch(query.zone, next).unwrap_or_else(|e| {
            warn!("Could not fetch prices for {}: {}", next, e);
            PriceSeries::empty()
        }),
        None => PriceSeries::empty(),
    };

    let horizon = assemble_horizon(&day, &next_day, now, date == today);

    let body = if horizon.is_empty() {
        ReportBody::NoData
    } else {
        match query.mode {
            QueryMode::FullDay { sorted } => ReportBody::FullDay {
                summary: summarize(&horizon),
                series: horizon,
                sorted,
            },
            QueryMode::Charging(window) => ReportBody::Charging {
                window,
                result: cheapest_window(&horizon, window.hours()),
            },
        }
    };

    Ok(PriceReport {
        zone: query.zone,
        date,
        notices,
        body,
    })
}
