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

//! Configuration file support
//!
//! The file is optional TOML; every field has a default so a partial file is
//! fine. Command-line flags take precedence over anything read here.

use crate::error::{ElprisError, Result};
use crate::source::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_10() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("elpris/", env!("CARGO_PKG_VERSION")).to_owned()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElprisConfig {
    /// Base URL of the price API, without the `/api/v1/...` path
    #[serde(default = "default_base_url")]
    pub api_base_url: String,

    /// Per-request timeout (seconds)
    #[serde(default = "default_10")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ElprisConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_base_url(),
            request_timeout_secs: 10,
            user_agent: default_user_agent(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Swedish plain text, one line per hour
    #[default]
    Text,
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = ElprisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(ElprisError::Config(format!(
                "unknown output format '{other}', expected text, table or json"
            ))),
        }
    }
}

pub fn load_config(path: &Path) -> Result<ElprisConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ElprisConfig = toml::from_str(&content)
        .map_err(|e| ElprisError::Config(format!("failed to parse {}: {e}", path.display())))?;

    if config.request_timeout_secs == 0 {
        return Err(ElprisError::Config(
            "request_timeout_secs must be greater than 0".to_owned(),
        ));
    }

    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Load `path` when given, otherwise fall back to defaults
pub fn load_config_or_default(path: Option<&Path>) -> Result<ElprisConfig> {
    path.map_or_else(|| Ok(ElprisConfig::default()), load_config)
}
