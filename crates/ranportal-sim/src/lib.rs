//! External network simulator invocation with estimator fallback.
//!
//! The external simulator is an opaque process that receives the four RAN
//! parameters and writes a JSON result file. Any failure on that path is
//! absorbed by [`SimulationService`], which substitutes the built-in
//! estimator's result and reports the substitution through `tracing` and the
//! injected metrics sink.
//!
//! - [`SimulatorConfig`] - Executable, arguments and timeout
//! - [`SimulationProvider`] - Seam for anything that can produce a result
//! - [`ExternalSimulator`] - Provider backed by a child process
//! - [`SimulationService`] - Provider plus fallback policy
//! - [`SimulatorError`] - Why a provider run failed

#![doc(issue_tracker_base_url = "https://github.com/ranportal/ranportal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod external;
mod provider;
mod service;

pub use config::SimulatorConfig;
pub use error::{Result, SimulatorError};
pub use external::{ExternalSimulator, OUTPUT_FILE_NAME, SimulatorOutput};
pub use provider::SimulationProvider;
pub use service::{Simulation, SimulationService};
