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

use elpris_types::{PricePoint, PriceSeries, PriceSummary};

/// Arithmetic mean of the SEK price, 0.0 for no points
pub fn mean_price(points: &[PricePoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.sek_per_kwh).sum::<f64>() / points.len() as f64
}

/// Cheapest point; the first one wins on ties
pub fn min_price(points: &[PricePoint]) -> Option<&PricePoint> {
    points
        .iter()
        .reduce(|best, p| if p.sek_per_kwh < best.sek_per_kwh { p } else { best })
}

/// Most expensive point; the first one wins on ties
pub fn max_price(points: &[PricePoint]) -> Option<&PricePoint> {
    points
        .iter()
        .reduce(|best, p| if p.sek_per_kwh > best.sek_per_kwh { p } else { best })
}

pub fn summarize(series: &PriceSeries) -> PriceSummary {
    let points = series.points();
    PriceSummary {
        mean: mean_price(points),
        min: min_price(points).cloned(),
        max: max_price(points).cloned(),
    }
}

/// Copy of `points` ordered by price, most expensive first.
///
/// The sort is stable, so equal prices stay in time order.
pub fn sorted_by_price_desc(points: &[PricePoint]) -> Vec<PricePoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| b.sek_per_kwh.total_cmp(&a.sek_per_kwh));
    sorted
}
