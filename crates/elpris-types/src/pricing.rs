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

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ============= Price Data =============

/// One priced interval as published for a zone
///
/// Field names on the wire follow the upstream JSON feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Price in SEK/kWh, the value all comparisons use
    #[serde(rename = "SEK_per_kWh")]
    pub sek_per_kwh: f64,

    /// Same price in EUR/kWh, informational only
    #[serde(rename = "EUR_per_kWh")]
    pub eur_per_kwh: f64,

    /// EUR→SEK rate the price was converted with
    #[serde(rename = "EXR")]
    pub exchange_rate: f64,

    /// Inclusive start, in the zone's own offset
    pub time_start: DateTime<FixedOffset>,

    /// Exclusive end
    pub time_end: DateTime<FixedOffset>,
}

impl PricePoint {
    pub fn duration_minutes(&self) -> i64 {
        (self.time_end - self.time_start).num_minutes()
    }
}

/// Time-ordered sequence of price points
///
/// Points are kept sorted by `time_start`; a series can hold sub-hourly
/// (15-minute) or hourly entries and may span more than one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<PricePoint>", into = "Vec<PricePoint>")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.time_start);
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }

    /// Concatenate `other` onto the end of this series.
    ///
    /// Ordering is restored if `other` does not start after the current tail.
    pub fn append(&mut self, other: PriceSeries) {
        let needs_sort = matches!(
            (self.points.last(), other.points.first()),
            (Some(tail), Some(head)) if head.time_start < tail.time_start
        );
        self.points.extend(other.points);
        if needs_sort {
            self.points.sort_by_key(|p| p.time_start);
        }
    }
}

impl From<Vec<PricePoint>> for PriceSeries {
    fn from(points: Vec<PricePoint>) -> Self {
        Self::new(points)
    }
}

impl From<PriceSeries> for Vec<PricePoint> {
    fn from(series: PriceSeries) -> Self {
        series.points
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

// ============= Derived Views =============

/// Cheapest contiguous run of a fixed length
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowResult {
    /// Index in the searched series where the window begins
    pub start_index: usize,

    pub points: Vec<PricePoint>,

    /// Mean SEK/kWh over `points`, 0.0 when empty
    pub mean: f64,
}

impl WindowResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn starts_at(&self) -> Option<DateTime<FixedOffset>> {
        self.points.first().map(|p| p.time_start)
    }
}

/// Descriptive statistics for a series
///
/// `min`/`max` are `None` only for an empty series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSummary {
    pub mean: f64,
    pub min: Option<PricePoint>,
    pub max: Option<PricePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(hour: u32, price: f64) -> PricePoint {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let start = tz.with_ymd_and_hms(2025, 10, 1, hour, 0, 0).unwrap();
        PricePoint {
            sek_per_kwh: price,
            eur_per_kwh: price / 11.0,
            exchange_rate: 11.0,
            time_start: start,
            time_end: start + chrono::Duration::hours(1),
        }
    }

    #[test]
    fn test_new_sorts_by_start() {
        let series = PriceSeries::new(vec![point(3, 0.3), point(1, 0.1), point(2, 0.2)]);
        let prices: Vec<f64> = series.iter().map(|p| p.sek_per_kwh).collect();
        assert_eq!(prices, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_append_keeps_order() {
        let mut today = PriceSeries::new(vec![point(0, 1.0), point(1, 2.0)]);
        today.append(PriceSeries::new(vec![point(2, 3.0)]));
        assert_eq!(today.len(), 3);
        assert_eq!(today.last().unwrap().sek_per_kwh, 3.0);

        let mut late = PriceSeries::new(vec![point(5, 5.0)]);
        late.append(PriceSeries::new(vec![point(4, 4.0)]));
        assert_eq!(late.first().unwrap().sek_per_kwh, 4.0);
    }

    #[test]
    fn test_deserialize_upstream_shape() {
        let json = r#"[
            {"SEK_per_kWh": 0.41, "EUR_per_kWh": 0.0372, "EXR": 11.02,
             "time_start": "2025-10-01T01:00:00+02:00", "time_end": "2025-10-01T02:00:00+02:00"},
            {"SEK_per_kWh": 0.35, "EUR_per_kWh": 0.0318, "EXR": 11.02,
             "time_start": "2025-10-01T00:00:00+02:00", "time_end": "2025-10-01T01:00:00+02:00"}
        ]"#;

        let series: PriceSeries = serde_json::from_str(json).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.first().unwrap().sek_per_kwh, 0.35);
        assert_eq!(series.first().unwrap().duration_minutes(), 60);
        assert_eq!(series.first().unwrap().time_start.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let series = PriceSeries::new(vec![point(0, 1.0)]);
        let value = serde_json::to_value(&series).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["SEK_per_kWh"], 1.0);
    }
}
