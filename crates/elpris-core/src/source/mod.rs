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

//! Price source boundary
//!
//! A source answers one question: the published prices for a zone on a
//! calendar date. Nothing published yet is an empty series, not an error.

pub mod elpriset;

pub use elpriset::{DEFAULT_BASE_URL, ElprisetJustNuClient};

use crate::error::Result;
use chrono::NaiveDate;
use elpris_types::{PriceSeries, Zone};
use std::collections::HashMap;

pub trait PriceSource {
    fn fetch(&self, zone: Zone, date: NaiveDate) -> Result<PriceSeries>;
}

/// In-memory source keyed by zone and date
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSource {
    days: HashMap<(Zone, NaiveDate), PriceSeries>,
}

impl StaticPriceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, zone: Zone, date: NaiveDate, series: PriceSeries) {
        self.days.insert((zone, date), series);
    }

    pub fn with_day(mut self, zone: Zone, date: NaiveDate, series: PriceSeries) -> Self {
        self.insert(zone, date, series);
        self
    }
}

impl PriceSource for StaticPriceSource {
    fn fetch(&self, zone: Zone, date: NaiveDate) -> Result<PriceSeries> {
        Ok(self.days.get(&(zone, date)).cloned().unwrap_or_default())
    }
}
