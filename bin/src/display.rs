//! Display utilities and shared helpers for the ranportal CLI.

use anyhow::{Context, Result};
use ranportal_estimate::{format_latency, format_throughput};
use ranportal_store::FileStore;
use ranportal_types::RanConfiguration;
use std::path::PathBuf;

/// Open the file store at `data_dir`, or at the default location.
pub(crate) fn open_store(data_dir: Option<PathBuf>) -> Result<FileStore> {
    let store = match data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::with_default_path(),
    };
    store.context("Failed to open configuration store")
}

/// Print the table header used by `list`.
pub(crate) fn print_record_header() {
    println!(
        "{:<36} {:<5} {:>10} {:>10} {:>8} {:>14} {:>10} {:<16}",
        "ID", "MODE", "FREQ", "BW", "POWER", "THROUGHPUT", "LATENCY", "CREATED"
    );
    println!("{}", "-".repeat(116));
}

/// Print one record as a table row.
pub(crate) fn print_record_row(record: &RanConfiguration) {
    let params = record.parameters();
    let result = record.simulation_result();
    println!(
        "{:<36} {:<5} {:>10} {:>10} {:>8} {:>14} {:>10} {:<16}",
        record.id(),
        params.duplex_mode(),
        format!("{:.3} GHz", params.frequency_ghz()),
        format!("{:.1} MHz", params.bandwidth_mhz()),
        format!("{} dBm", params.transmit_power_dbm()),
        format_throughput(result.throughput_bps),
        format_latency(result.latency_s),
        record.created_at().format("%Y-%m-%d %H:%M"),
    );
}
