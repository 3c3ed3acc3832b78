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

//! Immutable request built once from the command line

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use elpris_types::{ChargingWindow, Zone};
use serde::Serialize;

/// Prices are published per calendar day in Swedish local time
pub const MARKET_TIMEZONE: Tz = chrono_tz::Europe::Stockholm;

/// Calendar date of `now` in the market timezone
pub fn market_today(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&MARKET_TIMEZONE).date_naive()
}

/// Requested date as given by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DateSpec {
    Today,
    On(NaiveDate),
    /// Text that is not a `YYYY-MM-DD` date; resolved to today
    Invalid(String),
}

impl DateSpec {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Today,
            Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                .map_or_else(|_| Self::Invalid(text.to_owned()), Self::On),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum QueryMode {
    /// Every remaining hour with min/max/mean
    FullDay { sorted: bool },
    /// Cheapest contiguous block of the given length
    Charging(ChargingWindow),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuery {
    pub zone: Zone,
    pub date: DateSpec,
    pub mode: QueryMode,
}

impl PriceQuery {
    pub fn new(zone: Zone, date: DateSpec, mode: QueryMode) -> Self {
        Self { zone, date, mode }
    }
}
