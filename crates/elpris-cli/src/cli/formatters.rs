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

//! Output formatters for price reports.
//!
//! Prices are shown in öre/kWh with two decimals and a decimal comma, times
//! as two-digit hours in the zone's own offset.

use chrono::{DateTime, FixedOffset};
use comfy_table::{Attribute, Cell, Color, Table, presets::UTF8_FULL};
use elpris_core::pricing::sorted_by_price_desc;
use elpris_core::{Notice, PriceReport, ReportBody};
use elpris_types::{PricePoint, PriceSeries, PriceSummary, WindowResult};
use std::fmt::Write;

/// Swedish plain-text output
#[derive(Debug)]
pub struct TextFormatter;

/// Pretty table output
#[derive(Debug)]
pub struct TableFormatter;

/// Machine-readable output
#[derive(Debug)]
pub struct JsonFormatter;

/// SEK/kWh as öre with a decimal comma, e.g. 0.1234 → "12,34"
pub fn format_ore(sek_per_kwh: f64) -> String {
    format!("{:.2}", sek_per_kwh * 100.0).replace('.', ",")
}

fn format_hour(time: DateTime<FixedOffset>) -> String {
    time.format("%H").to_string()
}

fn format_interval(point: &PricePoint) -> String {
    format!(
        "{}-{}",
        format_hour(point.time_start),
        format_hour(point.time_end)
    )
}

fn format_point(point: &PricePoint) -> String {
    format!(
        "{} {} öre",
        format_interval(point),
        format_ore(point.sek_per_kwh)
    )
}

fn notice_lines(notices: &[Notice]) -> String {
    let mut output = String::new();
    for notice in notices {
        match notice {
            Notice::InvalidDate { .. } => output.push_str("Invalid date\n"),
            Notice::NoDataFallback { requested, used } => {
                let _ = writeln!(output, "No data found for {requested} defaulting to {used}");
            }
        }
    }
    output
}

/// Points in display order for a full-day listing
fn listing(series: &PriceSeries, sorted: bool) -> Vec<PricePoint> {
    if sorted {
        sorted_by_price_desc(series.points())
    } else {
        series.points().to_vec()
    }
}

fn summary_lines(summary: &PriceSummary) -> String {
    let mut output = String::new();
    if let Some(min) = &summary.min {
        let _ = writeln!(output, "Lägsta pris: {}", format_point(min));
    }
    if let Some(max) = &summary.max {
        let _ = writeln!(output, "Högsta pris: {}", format_point(max));
    }
    let _ = writeln!(output, "Medelpris: {} öre", format_ore(summary.mean));
    output
}

fn charging_header(result: &WindowResult) -> String {
    let mut output = String::new();
    if let Some(start) = result.starts_at() {
        let _ = writeln!(output, "Påbörja laddning: kl {}:00", format_hour(start));
    }
    let _ = writeln!(
        output,
        "Medelpris för fönster: {} öre",
        format_ore(result.mean)
    );
    output
}

impl TextFormatter {
    pub fn format_report(report: &PriceReport) -> String {
        let mut output = notice_lines(&report.notices);

        match &report.body {
            ReportBody::NoData => output.push_str("No data\n"),
            ReportBody::FullDay {
                series,
                summary,
                sorted,
            } => {
                for point in listing(series, *sorted) {
                    output.push_str(&format_point(&point));
                    output.push('\n');
                }
                output.push('\n');
                output.push_str(&summary_lines(summary));
            }
            ReportBody::Charging { result, .. } => {
                output.push_str(&charging_header(result));
                output.push('\n');
                for point in &result.points {
                    output.push_str(&format_point(point));
                    output.push('\n');
                }
            }
        }

        output
    }
}

impl TableFormatter {
    fn price_table(points: &[PricePoint], highlight: Option<&PricePoint>) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Tid").add_attribute(Attribute::Bold),
            Cell::new("Pris\n(öre/kWh)").add_attribute(Attribute::Bold),
            Cell::new("Pris\n(EUR/kWh)").add_attribute(Attribute::Bold),
        ]);

        for point in points {
            let price_cell = if highlight == Some(point) {
                Cell::new(format_ore(point.sek_per_kwh))
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new(format_ore(point.sek_per_kwh))
            };

            table.add_row(vec![
                Cell::new(format_interval(point)),
                price_cell,
                Cell::new(format!("{:.4}", point.eur_per_kwh)),
            ]);
        }

        table
    }

    /// Format a report as a table, summary lines below it
    pub fn format_report(report: &PriceReport) -> String {
        let mut output = notice_lines(&report.notices);
        let _ = writeln!(output, "{} {}", report.zone, report.date);

        match &report.body {
            ReportBody::NoData => output.push_str("No data\n"),
            ReportBody::FullDay {
                series,
                summary,
                sorted,
            } => {
                let points = listing(series, *sorted);
                let table = Self::price_table(&points, summary.min.as_ref());
                output.push_str(&table.to_string());
                output.push('\n');
                output.push_str(&summary_lines(summary));
            }
            ReportBody::Charging { window, result } => {
                let _ = writeln!(output, "Laddfönster: {window}");
                output.push_str(&charging_header(result));
                output.push_str(&Self::price_table(&result.points, None).to_string());
                output.push('\n');
            }
        }

        output
    }
}

impl JsonFormatter {
    pub fn format_report(report: &PriceReport) -> serde_json::Result<String> {
        let mut output = serde_json::to_string_pretty(report)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, TimeZone};
    use elpris_core::pricing::{cheapest_window, summarize};
    use elpris_types::{ChargingWindow, Zone};

    fn hourly(prices: &[f64]) -> PriceSeries {
        let start = FixedOffset::east_opt(7200)
            .unwrap()
            .with_ymd_and_hms(2025, 10, 1, 20, 0, 0)
            .unwrap();
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let time_start = start + Duration::hours(i as i64);
                PricePoint {
                    sek_per_kwh: p,
                    eur_per_kwh: p / 11.0,
                    exchange_rate: 11.0,
                    time_start,
                    time_end: time_start + Duration::hours(1),
                }
            })
            .collect()
    }

    fn report(body: ReportBody, notices: Vec<Notice>) -> PriceReport {
        PriceReport {
            zone: Zone::Se3,
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            notices,
            body,
        }
    }

    fn full_day(prices: &[f64], sorted: bool) -> PriceReport {
        let series = hourly(prices);
        report(
            ReportBody::FullDay {
                summary: summarize(&series),
                series,
                sorted,
            },
            Vec::new(),
        )
    }

    #[test]
    fn test_format_ore() {
        assert_eq!(format_ore(0.1234), "12,34");
        assert_eq!(format_ore(1.5), "150,00");
        assert_eq!(format_ore(0.0), "0,00");
        assert_eq!(format_ore(-0.0512), "-5,12");
    }

    #[test]
    fn test_full_day_text() {
        let text = TextFormatter::format_report(&full_day(&[0.10, 0.30, 0.20, 0.40], false));
        let expected = "\
20-21 10,00 öre
21-22 30,00 öre
22-23 20,00 öre
23-00 40,00 öre

Lägsta pris: 20-21 10,00 öre
Högsta pris: 23-00 40,00 öre
Medelpris: 25,00 öre
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_sorted_listing_is_descending() {
        let text = TextFormatter::format_report(&full_day(&[0.10, 0.30, 0.20], true));
        let lines: Vec<&str> = text.lines().take(3).collect();
        assert_eq!(
            lines,
            vec!["21-22 30,00 öre", "22-23 20,00 öre", "20-21 10,00 öre"]
        );
    }

    #[test]
    fn test_charging_text() {
        let series = hourly(&[0.10, 0.30, 0.20, 0.40]);
        let result = cheapest_window(&series, 2);
        let text = TextFormatter::format_report(&report(
            ReportBody::Charging {
                window: ChargingWindow::H2,
                result,
            },
            Vec::new(),
        ));

        let expected = "\
Påbörja laddning: kl 20:00
Medelpris för fönster: 20,00 öre

20-21 10,00 öre
21-22 30,00 öre
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_notices_and_no_data() {
        let text = TextFormatter::format_report(&report(
            ReportBody::NoData,
            vec![
                Notice::InvalidDate {
                    input: "x".to_owned(),
                },
                Notice::NoDataFallback {
                    requested: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                    used: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
                },
            ],
        ));

        assert_eq!(
            text,
            "Invalid date\nNo data found for 2030-01-01 defaulting to 2025-10-01\nNo data\n"
        );
    }

    #[test]
    fn test_table_contains_rows_and_summary() {
        let table = TableFormatter::format_report(&full_day(&[0.10, 0.30], false));
        assert!(table.starts_with("SE3 2025-10-01\n"));
        assert!(table.contains("20-21"));
        assert!(table.contains("30,00"));
        assert!(table.contains("Medelpris: 20,00 öre"));
    }

    #[test]
    fn test_json_output() {
        let json = JsonFormatter::format_report(&full_day(&[0.10, 0.30], false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["zone"], "SE3");
        assert_eq!(value["body"]["kind"], "full_day");
        assert_eq!(value["body"]["series"].as_array().unwrap().len(), 2);
    }
}
