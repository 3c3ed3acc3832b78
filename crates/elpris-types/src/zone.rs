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

/// Swedish electricity price area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Zone {
    /// Luleå
    Se1,
    /// Sundsvall
    Se2,
    /// Stockholm
    Se3,
    /// Malmö
    Se4,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid zone '{0}', expected one of SE1, SE2, SE3, SE4")]
pub struct ParseZoneError(pub String);

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Se1, Zone::Se2, Zone::Se3, Zone::Se4];

    /// Area code as used in the upstream API path
    pub fn code(self) -> &'static str {
        match self {
            Self::Se1 => "SE1",
            Self::Se2 => "SE2",
            Self::Se3 => "SE3",
            Self::Se4 => "SE4",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Zone {
    type Err = ParseZoneError;

    /// Accepts `SE1`..`SE4` as well as the short `Z1`..`Z4` form, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let digit = upper
            .strip_prefix("SE")
            .or_else(|| upper.strip_prefix('Z'))
            .ok_or_else(|| ParseZoneError(s.to_owned()))?;

        match digit {
            "1" => Ok(Self::Se1),
            "2" => Ok(Self::Se2),
            "3" => Ok(Self::Se3),
            "4" => Ok(Self::Se4),
            _ => Err(ParseZoneError(s.to_owned())),
        }
    }
}
