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

use chrono::{DateTime, FixedOffset, Timelike};
use elpris_types::{PricePoint, PriceSeries};
use tracing::debug;

/// Largest series that is already at hourly resolution
pub const HOURS_PER_DAY: usize = 24;

/// Running totals for the points that share one wall-clock hour
struct HourBucket {
    time_start: DateTime<FixedOffset>,
    time_end: DateTime<FixedOffset>,
    exchange_rate: f64,
    sek_sum: f64,
    eur_sum: f64,
    count: usize,
}

impl HourBucket {
    fn open(point: &PricePoint) -> Self {
        Self {
            time_start: point.time_start,
            time_end: point.time_end,
            exchange_rate: point.exchange_rate,
            sek_sum: point.sek_per_kwh,
            eur_sum: point.eur_per_kwh,
            count: 1,
        }
    }

    fn add(&mut self, point: &PricePoint) {
        self.sek_sum += point.sek_per_kwh;
        self.eur_sum += point.eur_per_kwh;
        self.time_end = point.time_end;
        self.count += 1;
    }

    fn close(self) -> PricePoint {
        let n = self.count as f64;
        PricePoint {
            sek_per_kwh: self.sek_sum / n,
            eur_per_kwh: self.eur_sum / n,
            exchange_rate: self.exchange_rate,
            time_start: self.time_start,
            time_end: self.time_end,
        }
    }
}

/// Collapse a sub-hourly series into one averaged point per hour.
///
/// Points are grouped by the hour of `time_start` in the point's own offset.
/// Prices are averaged, the exchange rate and start come from the first point
/// of the hour and the end from the last. Series with 24 or fewer points are
/// returned unchanged.
pub fn aggregate_hourly(series: &PriceSeries) -> PriceSeries {
    if series.len() <= HOURS_PER_DAY {
        return series.clone();
    }

    let mut bucket_of_hour: [Option<usize>; HOURS_PER_DAY] = [None; HOURS_PER_DAY];
    let mut buckets: Vec<HourBucket> = Vec::with_capacity(HOURS_PER_DAY);

    for point in series {
        let hour = point.time_start.hour() as usize;
        match bucket_of_hour[hour] {
            Some(idx) => buckets[idx].add(point),
            None => {
                bucket_of_hour[hour] = Some(buckets.len());
                buckets.push(HourBucket::open(point));
            }
        }
    }

    debug!(
        "Aggregated {} price points into {} hourly points",
        series.len(),
        buckets.len()
    );

    buckets.into_iter().map(HourBucket::close).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::test_support::{hourly, point_at, start_of_day};
    use crate::query::MARKET_TIMEZONE;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn quarter_hours(prices: &[f64]) -> PriceSeries {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| point_at(start_of_day() + Duration::minutes(i as i64 * 15), 15, p))
            .collect()
    }

    /// Quarter hours from local midnight, stamped with the Stockholm offset in force
    fn market_quarter_hours(date: NaiveDate, count: i64) -> PriceSeries {
        let midnight = MARKET_TIMEZONE
            .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
            .unwrap()
            .with_timezone(&Utc);

        (0..count)
            .map(|i| {
                let start = midnight + Duration::minutes(i * 15);
                let end = start + Duration::minutes(15);
                PricePoint {
                    sek_per_kwh: i as f64 * 0.01,
                    eur_per_kwh: i as f64 * 0.001,
                    exchange_rate: 11.0,
                    time_start: start.with_timezone(&MARKET_TIMEZONE).fixed_offset(),
                    time_end: end.with_timezone(&MARKET_TIMEZONE).fixed_offset(),
                }
            })
            .collect()
    }

    fn offset_hours(time: DateTime<FixedOffset>) -> i32 {
        time.offset().local_minus_utc() / 3600
    }

    #[test]
    fn test_empty_series() {
        assert!(aggregate_hourly(&PriceSeries::empty()).is_empty());
    }

    #[test]
    fn test_hourly_series_is_unchanged() {
        let series = PriceSeries::new(hourly(&[0.5; 24]));
        assert_eq!(aggregate_hourly(&series), series);

        let short = PriceSeries::new(hourly(&[0.1, 0.2, 0.3]));
        assert_eq!(aggregate_hourly(&short), short);
    }

    #[test]
    fn test_full_quarter_hour_day() {
        let prices: Vec<f64> = (0..96_i32).map(|i| f64::from(i) * 0.01).collect();
        let series = quarter_hours(&prices);

        let hourly = aggregate_hourly(&series);
        assert_eq!(hourly.len(), 24);

        for (hour, point) in hourly.iter().enumerate() {
            let constituents = &series.points()[hour * 4..hour * 4 + 4];
            let expected = constituents.iter().map(|p| p.sek_per_kwh).sum::<f64>() / 4.0;

            assert!((point.sek_per_kwh - expected).abs() < 1e-12);
            assert_eq!(point.time_start, constituents[0].time_start);
            assert_eq!(point.time_end, constituents[3].time_end);
            assert_eq!(point.duration_minutes(), 60);
        }
    }

    #[test]
    fn test_exchange_rate_taken_from_first_point() {
        let mut points = quarter_hours(&[1.0; 28]).into_points();
        points[1].exchange_rate = 12.0;
        points[2].exchange_rate = 13.0;

        let hourly = aggregate_hourly(&PriceSeries::new(points));
        assert_eq!(hourly.first().unwrap().exchange_rate, 11.0);
    }

    #[test]
    fn test_eur_is_averaged_too() {
        let mut points = quarter_hours(&[0.0; 28]).into_points();
        for (i, p) in points.iter_mut().take(4).enumerate() {
            p.eur_per_kwh = i as f64;
        }

        let hourly = aggregate_hourly(&PriceSeries::new(points));
        assert!((hourly.first().unwrap().eur_per_kwh - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_partial_day_keeps_first_appearance_order() {
        // 15:00 .. 23:45, 36 quarter hours
        let start = start_of_day() + Duration::hours(15);
        let series: PriceSeries = (0..36)
            .map(|i| point_at(start + Duration::minutes(i * 15), 15, 1.0))
            .collect();

        let hourly = aggregate_hourly(&series);
        let hours: Vec<u32> = hourly.iter().map(|p| p.time_start.hour()).collect();
        assert_eq!(hours, (15..24).collect::<Vec<_>>());
    }

    #[test]
    fn test_autumn_dst_day_merges_repeated_hour() {
        let series = market_quarter_hours(NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(), 100);
        assert_eq!(series.len(), 100);

        let hourly = aggregate_hourly(&series);
        assert_eq!(hourly.len(), 24);

        let hours: Vec<u32> = hourly.iter().map(|p| p.time_start.hour()).collect();
        assert_eq!(hours, (0..24).collect::<Vec<_>>());

        let repeated = &hourly.points()[2];
        assert_eq!(repeated.time_start.hour(), 2);
        assert_eq!(offset_hours(repeated.time_start), 2);
        assert_eq!(repeated.time_end.hour(), 3);
        assert_eq!(offset_hours(repeated.time_end), 1);

        // 02:00..02:45 at +02:00 are points 8..12, at +01:00 points 12..16
        let constituents = &series.points()[8..16];
        assert!(constituents.iter().all(|p| p.time_start.hour() == 2));
        let expected = constituents.iter().map(|p| p.sek_per_kwh).sum::<f64>() / 8.0;
        assert!((repeated.sek_per_kwh - expected).abs() < 1e-12);

        let next = &hourly.points()[3];
        assert_eq!(offset_hours(next.time_start), 1);
        assert_eq!(next.duration_minutes(), 60);
    }

    #[test]
    fn test_spring_dst_day_has_no_missing_hour() {
        let series = market_quarter_hours(NaiveDate::from_ymd_opt(2025, 3, 30).unwrap(), 92);

        let hourly = aggregate_hourly(&series);
        assert_eq!(hourly.len(), 23);

        let hours: Vec<u32> = hourly.iter().map(|p| p.time_start.hour()).collect();
        assert!(!hours.contains(&2));
        assert_eq!(offset_hours(hourly.points()[1].time_start), 1);
        assert_eq!(offset_hours(hourly.points()[2].time_start), 2);
        assert_eq!(hourly.points()[2].time_start.hour(), 3);
    }
}
