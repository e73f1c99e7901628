//! Simulation result definitions.

use serde::{Deserialize, Serialize};

/// Throughput and latency derived from a [`crate::RanParameters`] tuple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Throughput in bits per second.
    #[serde(rename = "throughput")]
    pub throughput_bps: f64,
    /// Latency in seconds.
    #[serde(rename = "latency")]
    pub latency_s: f64,
}

impl SimulationResult {
    /// Creates a new simulation result.
    #[must_use]
    pub const fn new(throughput_bps: f64, latency_s: f64) -> Self {
        Self {
            throughput_bps,
            latency_s,
        }
    }

    /// Returns the throughput in megabits per second.
    #[must_use]
    pub fn throughput_mbps(&self) -> f64 {
        self.throughput_bps / 1e6
    }

    /// Returns the latency in milliseconds.
    #[must_use]
    pub fn latency_ms(&self) -> f64 {
        self.latency_s * 1e3
    }

    /// Returns true if both values are finite and strictly positive.
    #[must_use]
    pub fn is_plausible(&self) -> bool {
        self.throughput_bps.is_finite()
            && self.latency_s.is_finite()
            && self.throughput_bps > 0.0
            && self.latency_s > 0.0
    }
}

/// Which provider produced a [`SimulationResult`].
///
/// This is operator-facing only: records and API responses look the same
/// regardless of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultSource {
    /// The external network simulator returned a usable result.
    Simulator,
    /// The built-in closed-form estimator produced the result.
    Estimator,
}

impl ResultSource {
    /// Returns the source as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simulator => "simulator",
            Self::Estimator => "estimator",
        }
    }
}

impl std::fmt::Display for ResultSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
