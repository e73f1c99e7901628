//! RAN performance estimation logic.
//!
//! Throughput is a Shannon-capacity bound derated by fixed duplex, MIMO and
//! signaling-overhead factors. Latency is a per-duplex base value scaled
//! inversely with bandwidth relative to a 100 MHz channel.
//!
//! Every function here is total over validated [`RanParameters`] and performs
//! no I/O; identical inputs give bit-identical outputs.

use ranportal_types::{DuplexMode, RanParameters, SimulationResult};
use serde::Serialize;

/// SNR at the reference transmit power, in dB.
const REFERENCE_SNR_DB: f64 = 10.0;

/// Transmit power at which the reference SNR applies, in dBm.
const REFERENCE_TX_POWER_DBM: f64 = 20.0;

/// TDD efficiency after guard-period overhead.
const TDD_DUPLEX_EFFICIENCY: f64 = 0.8;

/// FDD efficiency.
const FDD_DUPLEX_EFFICIENCY: f64 = 0.95;

/// Upper edge of FR1; carriers at or above this use the mmWave MIMO factor.
pub const FR1_UPPER_FREQUENCY_HZ: f64 = 6e9;

/// Spatial multiplexing gain below [`FR1_UPPER_FREQUENCY_HZ`].
const SUB6_MIMO_FACTOR: f64 = 4.0;

/// Spatial multiplexing gain at or above [`FR1_UPPER_FREQUENCY_HZ`].
const MMWAVE_MIMO_FACTOR: f64 = 8.0;

/// Derating for control-plane signaling.
pub const OVERHEAD_FACTOR: f64 = 0.85;

/// Base air-interface latency, in seconds.
const BASE_LATENCY_S: f64 = 0.001;

/// Extra latency from TDD guard periods, in seconds.
const TDD_GUARD_LATENCY_S: f64 = 0.0005;

/// Bandwidth at which the base latency applies unscaled (before the 0.5 factor).
pub const REFERENCE_BANDWIDTH_HZ: f64 = 100e6;

/// Fixed scaling applied to the bandwidth-adjusted latency.
const LATENCY_SCALE: f64 = 0.5;

/// Lowest latency the model will report, in seconds.
pub const LATENCY_FLOOR_S: f64 = 0.0005;

/// Intermediate terms of a single estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateBreakdown {
    /// Derived signal-to-noise ratio, in dB.
    pub snr_db: f64,
    /// Shannon spectral efficiency at that SNR, in bit/s/Hz.
    pub spectral_efficiency: f64,
    /// Duplex derating factor.
    pub duplex_efficiency: f64,
    /// Spatial multiplexing gain.
    pub mimo_factor: f64,
    /// Signaling overhead derating factor.
    pub overhead_factor: f64,
    /// Duplex-dependent latency before bandwidth scaling, in seconds.
    pub base_latency_s: f64,
    /// The final estimate.
    pub simulation_result: SimulationResult,
}

/// Returns the SNR for a transmit power: 10 dB at 20 dBm, +0.5 dB per dB above.
#[must_use]
pub fn snr_db(transmit_power_dbm: f64) -> f64 {
    REFERENCE_SNR_DB + (transmit_power_dbm - REFERENCE_TX_POWER_DBM) / 2.0
}

/// Returns the Shannon spectral efficiency in bit/s/Hz for an SNR in dB.
#[must_use]
pub fn spectral_efficiency(snr_db: f64) -> f64 {
    (1.0 + 10f64.powf(snr_db / 10.0)).log2()
}

/// Returns the duplex derating factor.
#[must_use]
pub const fn duplex_efficiency(mode: DuplexMode) -> f64 {
    match mode {
        DuplexMode::Tdd => TDD_DUPLEX_EFFICIENCY,
        DuplexMode::Fdd => FDD_DUPLEX_EFFICIENCY,
    }
}

/// Returns the MIMO gain assumed for a carrier frequency.
#[must_use]
pub fn mimo_factor(frequency_hz: f64) -> f64 {
    if frequency_hz < FR1_UPPER_FREQUENCY_HZ {
        SUB6_MIMO_FACTOR
    } else {
        MMWAVE_MIMO_FACTOR
    }
}

const fn base_latency(mode: DuplexMode) -> f64 {
    match mode {
        DuplexMode::Tdd => BASE_LATENCY_S + TDD_GUARD_LATENCY_S,
        DuplexMode::Fdd => BASE_LATENCY_S,
    }
}

/// Computes an estimate and keeps every intermediate term.
#[must_use]
pub fn explain(params: &RanParameters) -> EstimateBreakdown {
    let mode = params.duplex_mode();
    let bandwidth = params.bandwidth_hz();

    let snr_db = snr_db(params.transmit_power_dbm());
    let spectral_efficiency = spectral_efficiency(snr_db);
    let duplex_efficiency = duplex_efficiency(mode);
    let mimo_factor = mimo_factor(params.frequency_hz());

    let throughput =
        bandwidth * spectral_efficiency * duplex_efficiency * mimo_factor * OVERHEAD_FACTOR;

    let base_latency_s = base_latency(mode);
    let latency = (base_latency_s * (REFERENCE_BANDWIDTH_HZ / bandwidth) * LATENCY_SCALE)
        .max(LATENCY_FLOOR_S);

    EstimateBreakdown {
        snr_db,
        spectral_efficiency,
        duplex_efficiency,
        mimo_factor,
        overhead_factor: OVERHEAD_FACTOR,
        base_latency_s,
        simulation_result: SimulationResult::new(throughput, latency),
    }
}

/// Estimates throughput and latency for a RAN configuration.
#[must_use]
pub fn estimate(params: &RanParameters) -> SimulationResult {
    explain(params).simulation_result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(frequency: f64, bandwidth: f64, mode: DuplexMode, power: f64) -> RanParameters {
        RanParameters::new(frequency, bandwidth, mode, power).unwrap()
    }

    #[test]
    fn test_tdd_midband_scenario() {
        let breakdown = explain(&params(3.5e9, 20e6, DuplexMode::Tdd, 20.0));

        assert_eq!(breakdown.snr_db, 10.0);
        assert_relative_eq!(breakdown.spectral_efficiency, 11f64.log2());
        assert_eq!(breakdown.duplex_efficiency, 0.8);
        assert_eq!(breakdown.mimo_factor, 4.0);
        assert_relative_eq!(
            breakdown.simulation_result.throughput_bps,
            188_193_080.05,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            breakdown.simulation_result.latency_s,
            0.00375,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_fdd_midband_scenario() {
        let result = estimate(&params(3.5e9, 20e6, DuplexMode::Fdd, 20.0));

        assert_relative_eq!(result.throughput_bps, 223_479_282.56, max_relative = 1e-9);
        assert_relative_eq!(result.latency_s, 0.0025, max_relative = 1e-12);
    }

    #[test]
    fn test_transmit_power_raises_snr() {
        assert_eq!(snr_db(30.0), 15.0);
        assert_eq!(snr_db(0.0), 0.0);
        assert_relative_eq!(spectral_efficiency(0.0), 1.0);
    }

    #[test]
    fn test_deterministic() {
        let p = params(28e9, 400e6, DuplexMode::Tdd, 33.5);
        let first = estimate(&p);
        let second = estimate(&p);
        assert_eq!(
            first.throughput_bps.to_bits(),
            second.throughput_bps.to_bits()
        );
        assert_eq!(first.latency_s.to_bits(), second.latency_s.to_bits());
    }

    #[test]
    fn test_throughput_monotonic_in_bandwidth() {
        for mode in DuplexMode::ALL {
            let mut previous = 0.0;
            for bandwidth in [1e6, 5e6, 10e6, 20e6, 40e6, 100e6, 400e6, 800e6] {
                let result = estimate(&params(3.5e9, bandwidth, mode, 23.0));
                assert!(result.throughput_bps >= previous);
                previous = result.throughput_bps;
            }
        }
    }

    #[test]
    fn test_tdd_latency_not_below_fdd() {
        for bandwidth in [1e3, 1e6, 20e6, 100e6, 150e6, 300e6, 1e9] {
            let tdd = estimate(&params(3.5e9, bandwidth, DuplexMode::Tdd, 20.0));
            let fdd = estimate(&params(3.5e9, bandwidth, DuplexMode::Fdd, 20.0));
            assert!(tdd.latency_s >= fdd.latency_s);
        }
    }

    #[test]
    fn test_latency_floor() {
        for bandwidth in [1.0, 1e6, 100e6, 200e6, 400e6, 1e9, 1e12] {
            for mode in DuplexMode::ALL {
                let result = estimate(&params(3.5e9, bandwidth, mode, 20.0));
                assert!(result.latency_s >= LATENCY_FLOOR_S);
            }
        }
        let wide = estimate(&params(28e9, 400e6, DuplexMode::Fdd, 20.0));
        assert_eq!(wide.latency_s, LATENCY_FLOOR_S);
    }

    #[test]
    fn test_mimo_boundary_doubles_throughput() {
        let below = estimate(&params(5.999_999_999e9, 100e6, DuplexMode::Fdd, 20.0));
        let at = estimate(&params(FR1_UPPER_FREQUENCY_HZ, 100e6, DuplexMode::Fdd, 20.0));

        assert_eq!(mimo_factor(5.999_999_999e9), 4.0);
        assert_eq!(mimo_factor(FR1_UPPER_FREQUENCY_HZ), 8.0);
        assert_relative_eq!(at.throughput_bps, 2.0 * below.throughput_bps);
        assert_eq!(at.latency_s, below.latency_s);
    }

    #[test]
    fn test_estimate_matches_breakdown() {
        let p = params(3.7e9, 60e6, DuplexMode::Tdd, 26.0);
        assert_eq!(estimate(&p), explain(&p).simulation_result);
    }
}
