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

//! HTTP client for the elprisetjustnu.se day-ahead price feed

use crate::config::ElprisConfig;
use crate::error::{ElprisError, Result};
use crate::source::PriceSource;
use chrono::{Datelike, NaiveDate};
use elpris_types::{PriceSeries, Zone};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://www.elprisetjustnu.se";

#[derive(Debug)]
pub struct ElprisetJustNuClient {
    client: Client,
    base_url: String,
}

impl ElprisetJustNuClient {
    pub fn new(config: &ElprisConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// URL pattern: {base}/api/v1/prices/{year}/{month:02}-{day:02}_{zone}.json
    pub fn price_url(&self, zone: Zone, date: NaiveDate) -> String {
        format!(
            "{}/api/v1/prices/{}/{:02}-{:02}_{}.json",
            self.base_url,
            date.year(),
            date.month(),
            date.day(),
            zone.code()
        )
    }
}

impl PriceSource for ElprisetJustNuClient {
    fn fetch(&self, zone: Zone, date: NaiveDate) -> Result<PriceSeries> {
        let url = self.price_url(zone, date);
        info!("Fetching {} prices for {} from {}", zone, date, url);

        let response = self.client.get(&url).send()?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            info!("No prices published for {} on {}", zone, date);
            return Ok(PriceSeries::empty());
        }

        if !status.is_success() {
            return Err(ElprisError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text()?;
        let series: PriceSeries = serde_json::from_str(&body)?;

        debug!("Received {} price points for {} {}", series.len(), zone, date);
        Ok(series)
    }
}
