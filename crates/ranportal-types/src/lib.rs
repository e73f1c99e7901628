//! Core types for the ranportal 5G RAN performance service.
//!
//! This crate provides the data structures shared by every other crate in
//! the workspace:
//!
//! - [`DuplexMode`] - TDD or FDD uplink/downlink sharing scheme
//! - [`RanParameters`] - Validated carrier, bandwidth, duplex and power tuple
//! - [`ConfigurationRequest`] - Raw inbound request with every field optional
//! - [`SimulationResult`] - Throughput and latency derived from the parameters
//! - [`ResultSource`] - Which provider produced a result
//! - [`RanConfiguration`] - The immutable persisted record
//! - [`ConfigurationId`] - Opaque record identifier

#![doc(issue_tracker_base_url = "https://github.com/ranportal/ranportal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod configuration;
mod duplex;
mod error;
mod params;
mod result;

pub use configuration::{ConfigurationId, RanConfiguration};
pub use duplex::DuplexMode;
pub use error::{Result, ValidationError};
pub use params::{ConfigurationRequest, RanParameters};
pub use result::{ResultSource, SimulationResult};
