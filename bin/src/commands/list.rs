//! List command implementation.

use crate::display::{open_store, print_record_header, print_record_row};
use anyhow::{Context, Result};
use ranportal_store::ConfigurationStore;
use std::path::PathBuf;

/// List stored configurations, newest first.
pub(crate) fn list_configurations(data_dir: Option<PathBuf>) -> Result<()> {
    let store = open_store(data_dir)?;
    let records = store.list().context("Failed to list configurations")?;

    if records.is_empty() {
        println!("No configurations found in {}.", store.base_path().display());
        return Ok(());
    }

    print_record_header();
    for record in &records {
        print_record_row(record);
    }

    println!("\nTotal: {} configurations", records.len());
    Ok(())
}
