//! Closed-form 5G RAN throughput and latency estimator.
//!
//! This crate provides the deterministic performance model used whenever an
//! external simulator is unavailable or fails:
//!
//! - [`estimate`] - Maps a [`RanParameters`] tuple to a [`SimulationResult`]
//! - [`explain`] - Same computation, keeping every intermediate term
//! - [`EstimateBreakdown`] - The intermediate terms of one estimate
//! - [`format_throughput`] / [`format_latency`] - Human-readable rendering
//!
//! [`RanParameters`]: ranportal_types::RanParameters
//! [`SimulationResult`]: ranportal_types::SimulationResult

#![doc(issue_tracker_base_url = "https://github.com/ranportal/ranportal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod estimator;
mod format;

pub use estimator::{
    EstimateBreakdown, FR1_UPPER_FREQUENCY_HZ, LATENCY_FLOOR_S, OVERHEAD_FACTOR,
    REFERENCE_BANDWIDTH_HZ, duplex_efficiency, estimate, explain, mimo_factor, snr_db,
    spectral_efficiency,
};
pub use format::{format_latency, format_throughput};
