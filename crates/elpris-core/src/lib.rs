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

//! Elpris core: hourly aggregation, cheapest-window search and price
//! statistics over day-ahead spot prices, plus the price source boundary and
//! the report assembled for presenters.

pub mod config;
pub mod error;
pub mod pricing;
pub mod query;
pub mod report;
pub mod source;

pub use config::{ElprisConfig, OutputFormat, load_config, load_config_or_default};
pub use error::{ElprisError, Result};
pub use query::{DateSpec, PriceQuery, QueryMode, market_today};
pub use report::{Notice, PriceReport, ReportBody, build_report};
pub use source::{ElprisetJustNuClient, PriceSource, StaticPriceSource};
