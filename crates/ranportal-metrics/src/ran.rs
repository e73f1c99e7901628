//! RAN estimate metrics with Prometheus text export.

use std::fmt::Write;

use ranportal_types::{DuplexMode, RanParameters, SimulationResult};

use crate::{Counter, Gauge, MetricsSink};

/// Gauges and counters describing the most recent estimates.
///
/// Throughput and latency are published twice, in raw units and in
/// dashboard-friendly units, so panels need no unit conversion.
#[derive(Debug, Default)]
pub struct RanMetrics {
    /// Last throughput, bits per second.
    pub throughput_bps: Gauge,
    /// Last throughput, megabits per second.
    pub throughput_mbps: Gauge,
    /// Last latency, seconds.
    pub latency_seconds: Gauge,
    /// Last latency, milliseconds.
    pub latency_ms: Gauge,
    /// Completed TDD simulations.
    pub simulations_tdd: Counter,
    /// Completed FDD simulations.
    pub simulations_fdd: Counter,
    /// Simulator runs that fell back to the estimator.
    pub simulator_fallbacks: Counter,
}

impl RanMetrics {
    /// Create a new metrics instance with every value at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the simulation counter for a duplex mode.
    #[must_use]
    pub const fn simulations(&self, mode: DuplexMode) -> &Counter {
        match mode {
            DuplexMode::Tdd => &self.simulations_tdd,
            DuplexMode::Fdd => &self.simulations_fdd,
        }
    }

    /// Get a snapshot of all metrics.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            throughput_bps: self.throughput_bps.get(),
            throughput_mbps: self.throughput_mbps.get(),
            latency_seconds: self.latency_seconds.get(),
            latency_ms: self.latency_ms.get(),
            simulations_tdd: self.simulations_tdd.get(),
            simulations_fdd: self.simulations_fdd.get(),
            simulator_fallbacks: self.simulator_fallbacks.get(),
        }
    }

    /// Export metrics in Prometheus text format.
    #[must_use]
    pub fn to_prometheus(&self) -> String {
        let s = self.snapshot();
        let mut output = String::new();

        write_gauge(
            &mut output,
            "ran_throughput_bps",
            "Throughput of the last simulation in bits per second",
            s.throughput_bps,
        );
        write_gauge(
            &mut output,
            "ran_throughput_mbps",
            "Throughput of the last simulation in megabits per second",
            s.throughput_mbps,
        );
        write_gauge(
            &mut output,
            "ran_latency_seconds",
            "Latency of the last simulation in seconds",
            s.latency_seconds,
        );
        write_gauge(
            &mut output,
            "ran_latency_ms",
            "Latency of the last simulation in milliseconds",
            s.latency_ms,
        );

        let _ = writeln!(
            output,
            "# HELP ran_simulations_total Completed simulations by duplex mode"
        );
        let _ = writeln!(output, "# TYPE ran_simulations_total counter");
        for mode in DuplexMode::ALL {
            let _ = writeln!(
                output,
                "ran_simulations_total{{duplex_mode=\"{mode}\"}} {}",
                self.simulations(mode).get()
            );
        }

        let _ = writeln!(
            output,
            "# HELP ran_simulator_fallbacks_total Simulator runs replaced by the built-in estimator"
        );
        let _ = writeln!(output, "# TYPE ran_simulator_fallbacks_total counter");
        let _ = writeln!(
            output,
            "ran_simulator_fallbacks_total {}",
            s.simulator_fallbacks
        );

        output
    }
}

impl MetricsSink for RanMetrics {
    fn record_estimate(&self, params: &RanParameters, result: &SimulationResult) {
        self.throughput_bps.set(result.throughput_bps);
        self.throughput_mbps.set(result.throughput_mbps());
        self.latency_seconds.set(result.latency_s);
        self.latency_ms.set(result.latency_ms());
        self.simulations(params.duplex_mode()).inc();

        tracing::debug!(
            duplex_mode = %params.duplex_mode(),
            throughput_mbps = result.throughput_mbps(),
            latency_ms = result.latency_ms(),
            "recorded estimate metrics"
        );
    }

    fn record_fallback(&self, _params: &RanParameters) {
        self.simulator_fallbacks.inc();
    }
}

fn write_gauge(output: &mut String, name: &str, help: &str, value: f64) {
    let _ = writeln!(output, "# HELP {name} {help}");
    let _ = writeln!(output, "# TYPE {name} gauge");
    let _ = writeln!(output, "{name} {value}");
}

/// A snapshot of metrics at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsSnapshot {
    /// Last throughput, bits per second.
    pub throughput_bps: f64,
    /// Last throughput, megabits per second.
    pub throughput_mbps: f64,
    /// Last latency, seconds.
    pub latency_seconds: f64,
    /// Last latency, milliseconds.
    pub latency_ms: f64,
    /// Completed TDD simulations.
    pub simulations_tdd: u64,
    /// Completed FDD simulations.
    pub simulations_fdd: u64,
    /// Simulator runs that fell back to the estimator.
    pub simulator_fallbacks: u64,
}

impl MetricsSnapshot {
    /// Total simulations across both duplex modes.
    #[must_use]
    pub const fn total_simulations(&self) -> u64 {
        self.simulations_tdd + self.simulations_fdd
    }
}
