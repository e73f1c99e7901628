//! Show command implementation.

use crate::display::open_store;
use anyhow::{Context, Result};
use ranportal_estimate::{format_latency, format_throughput};
use ranportal_store::ConfigurationStore;
use ranportal_types::ConfigurationId;
use std::path::PathBuf;

/// Show one stored configuration and its result.
pub(crate) fn show_configuration(id: &str, data_dir: Option<PathBuf>) -> Result<()> {
    let id: ConfigurationId = id.parse().context("Invalid configuration ID format")?;
    let store = open_store(data_dir)?;

    let record = store
        .get(id)
        .context("Failed to load configuration")?
        .with_context(|| format!("Configuration not found: {id}"))?;

    let params = record.parameters();
    let result = record.simulation_result();

    println!("Configuration: {}", record.id());
    println!("Created:       {}", record.created_at().format("%Y-%m-%d %H:%M:%S"));
    println!("Frequency:     {:.3} GHz", params.frequency_ghz());
    println!("Bandwidth:     {:.1} MHz", params.bandwidth_mhz());
    println!("Duplex mode:   {}", params.duplex_mode());
    println!("Tx power:      {} dBm", params.transmit_power_dbm());
    println!("Throughput:    {}", format_throughput(result.throughput_bps));
    println!("Latency:       {}", format_latency(result.latency_s));
    println!("Document:      {}", store.document_path(id).display());

    Ok(())
}
