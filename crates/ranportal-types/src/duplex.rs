//! Duplex mode definitions.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Scheme for sharing uplink and downlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DuplexMode {
    /// Time division duplex: uplink and downlink alternate on one channel.
    Tdd,
    /// Frequency division duplex: uplink and downlink use separate channels.
    Fdd,
}

impl DuplexMode {
    /// All duplex modes, in label order.
    pub const ALL: [Self; 2] = [Self::Tdd, Self::Fdd];

    /// Returns the duplex mode as its wire spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tdd => "TDD",
            Self::Fdd => "FDD",
        }
    }

    /// Returns true for time division duplex.
    #[must_use]
    pub const fn is_tdd(&self) -> bool {
        matches!(self, Self::Tdd)
    }
}

impl std::fmt::Display for DuplexMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DuplexMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TDD" => Ok(Self::Tdd),
            "FDD" => Ok(Self::Fdd),
            _ => Err(ValidationError::InvalidDuplexMode(s.to_string())),
        }
    }
}
