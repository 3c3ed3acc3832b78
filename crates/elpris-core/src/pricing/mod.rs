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

//! Price series kernel: hourly aggregation, cheapest-window search,
//! descriptive statistics and the today/tomorrow horizon.
//!
//! Everything here is pure and synchronous; the only notion of time is the
//! `now` instant the caller passes in.

pub mod aggregate;
pub mod horizon;
pub mod stats;
pub mod window;

pub use aggregate::{HOURS_PER_DAY, aggregate_hourly};
pub use horizon::{assemble_horizon, remaining_from};
pub use stats::{max_price, mean_price, min_price, sorted_by_price_desc, summarize};
pub use window::cheapest_window;
