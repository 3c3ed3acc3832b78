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

//! CLI argument definitions using clap.

use clap::{ArgAction, Parser};
use elpris_core::{DateSpec, OutputFormat, PriceQuery, QueryMode};
use elpris_types::{ChargingWindow, Zone};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "elpris")]
#[command(author, version, about = "Swedish day-ahead electricity spot prices")]
#[command(arg_required_else_help = true)]
#[command(
    long_about = "Show hourly spot prices for a Swedish price area, with the cheapest,\n\
    most expensive and mean price, or find the cheapest block for charging.\n\
    \nFor today only the hours that have not ended are shown, followed by\n\
    tomorrow's prices once they are published.\n\
    \nExamples:\n  \
    elpris --zone SE3                       # Remaining hours today and tomorrow\n  \
    elpris --zone SE3 --sorted              # Most expensive hour first\n  \
    elpris --zone SE4 --date 2025-10-01     # A specific day\n  \
    elpris --zone SE1 --charging 4h         # Cheapest 4 hour block"
)]
pub struct Cli {
    /// Price area
    #[arg(
        long,
        value_name = "SE1|SE2|SE3|SE4",
        help = "Price area (required)",
        long_help = "Swedish electricity price area:\n  \
          - SE1: Luleå\n  \
          - SE2: Sundsvall\n  \
          - SE3: Stockholm\n  \
          - SE4: Malmö\n\
          \nZ1..Z4 is accepted as a short form."
    )]
    pub zone: Zone,

    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Day to show, defaults to today",
        long_help = "Day to show prices for. An unparseable date, or a day with no\n\
          published prices, falls back to today."
    )]
    pub date: Option<String>,

    /// Find the cheapest contiguous block of this length
    #[arg(long, value_name = "2h|4h|8h", help = "Cheapest charging window length")]
    pub charging: Option<ChargingWindow>,

    /// Sort the hourly list by price, most expensive first
    #[arg(
        long,
        default_value_t = false,
        help = "Sort hourly prices by price, highest first"
    )]
    pub sorted: bool,

    /// Output format: text, table or json
    #[arg(
        long,
        value_name = "text|table|json",
        help = "How to display results (defaults to config, then text)"
    )]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(
        long,
        value_name = "PATH",
        help = "Path to a TOML configuration file",
        long_help = "Optional TOML file with api_base_url, request_timeout_secs,\n\
          user_agent and format. Flags override file values."
    )]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Build the request handed to the core
    pub fn query(&self) -> PriceQuery {
        let mode = match self.charging {
            Some(window) => QueryMode::Charging(window),
            None => QueryMode::FullDay {
                sorted: self.sorted,
            },
        };

        PriceQuery::new(self.zone, DateSpec::parse(self.date.as_deref()), mode)
    }

    /// Default tracing directive when `RUST_LOG` is not set
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "elpris=warn",
            1 => "elpris=info",
            _ => "elpris=debug",
        }
    }
}
