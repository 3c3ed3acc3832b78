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

//! Shared data model for Elpris: price zones, price points and series,
//! and the derived window/summary values handed to presenters.

pub mod charging;
pub mod pricing;
pub mod zone;

pub use charging::{ChargingWindow, ParseChargingWindowError};
pub use pricing::{PricePoint, PriceSeries, PriceSummary, WindowResult};
pub use zone::{ParseZoneError, Zone};
