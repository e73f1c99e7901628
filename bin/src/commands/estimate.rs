//! Estimate command implementation.
//!
//! Runs the built-in estimator only. Nothing is stored.

use anyhow::{Context, Result};
use ranportal_estimate::{explain, format_latency, format_throughput};
use ranportal_types::{DuplexMode, RanParameters};

/// Estimate throughput and latency for one configuration.
pub(crate) fn estimate(
    frequency: f64,
    bandwidth: f64,
    duplex_mode: DuplexMode,
    transmit_power: f64,
    show_breakdown: bool,
    json: bool,
) -> Result<()> {
    let params = RanParameters::new(frequency, bandwidth, duplex_mode, transmit_power)
        .context("Invalid RAN parameters")?;
    let breakdown = explain(&params);
    let result = breakdown.simulation_result;

    if json {
        let output = if show_breakdown {
            serde_json::to_string_pretty(&breakdown)?
        } else {
            serde_json::to_string_pretty(&result)?
        };
        println!("{output}");
        return Ok(());
    }

    println!("Configuration: {params}");
    if show_breakdown {
        println!("\nBreakdown:");
        println!("  SNR:                 {:.2} dB", breakdown.snr_db);
        println!(
            "  Spectral efficiency: {:.4} bit/s/Hz",
            breakdown.spectral_efficiency
        );
        println!("  Duplex efficiency:   {}", breakdown.duplex_efficiency);
        println!("  MIMO factor:         {}", breakdown.mimo_factor);
        println!("  Overhead factor:     {}", breakdown.overhead_factor);
        println!(
            "  Base latency:        {}",
            format_latency(breakdown.base_latency_s)
        );
        println!();
    }
    println!(
        "Throughput:    {} ({:.0} bps)",
        format_throughput(result.throughput_bps),
        result.throughput_bps
    );
    println!(
        "Latency:       {} ({} s)",
        format_latency(result.latency_s),
        result.latency_s
    );

    Ok(())
}
