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

//! CLI entry point for Elpris

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use elpris_cli::cli::{Cli, JsonFormatter, TableFormatter, TextFormatter};
use elpris_core::{ElprisetJustNuClient, OutputFormat, build_report, load_config_or_default};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let format = cli.format.unwrap_or(config.format);

    let query = cli.query();
    info!(
        "Query: zone={}, date={:?}, mode={:?}, format={}",
        query.zone, query.date, query.mode, format
    );

    let source = ElprisetJustNuClient::new(&config).context("Failed to create HTTP client")?;
    let report = build_report(&source, &query, Utc::now())
        .with_context(|| format!("Failed to fetch prices for {}", query.zone))?;

    let output = match format {
        OutputFormat::Text => TextFormatter::format_report(&report),
        OutputFormat::Table => TableFormatter::format_report(&report),
        OutputFormat::Json => {
            JsonFormatter::format_report(&report).context("Failed to serialize report")?
        }
    };

    print!("{output}");
    Ok(())
}
