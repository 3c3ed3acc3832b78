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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of the cheapest contiguous block to look for, in hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargingWindow {
    #[serde(rename = "2h")]
    H2,
    #[serde(rename = "4h")]
    H4,
    #[serde(rename = "8h")]
    H8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid charging window '{0}', expected 2h, 4h or 8h")]
pub struct ParseChargingWindowError(pub String);

impl ChargingWindow {
    pub fn hours(self) -> usize {
        match self {
            Self::H2 => 2,
            Self::H4 => 4,
            Self::H8 => 8,
        }
    }
}

impl fmt::Display for ChargingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

impl FromStr for ChargingWindow {
    type Err = ParseChargingWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2h" => Ok(Self::H2),
            "4h" => Ok(Self::H4),
            "8h" => Ok(Self::H8),
            _ => Err(ParseChargingWindowError(s.to_owned())),
        }
    }
}
