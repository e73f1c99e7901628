//! Error types for simulator runs.

use std::path::PathBuf;
use std::time::Duration;

use ranportal_types::SimulationResult;
use thiserror::Error;

/// Why a simulation provider failed to produce a result.
#[derive(Error, Debug)]
pub enum SimulatorError {
    /// No simulator executable is configured.
    #[error("No simulator executable configured")]
    NotConfigured,

    /// Failed to create the per-run working directory.
    #[error("Failed to create simulator working directory: {0}")]
    WorkDir(#[source] std::io::Error),

    /// Failed to spawn the simulator process.
    #[error("Failed to spawn simulator '{executable}': {source}")]
    Spawn {
        /// The executable that could not be spawned.
        executable: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed while waiting for the simulator process.
    #[error("Failed waiting for simulator: {0}")]
    Wait(#[source] std::io::Error),

    /// The simulator did not finish in time and was killed.
    #[error("Simulator timed out after {0:?}")]
    Timeout(Duration),

    /// The simulator exited unsuccessfully.
    #[error("Simulator exited with status {code:?}: {stderr}")]
    ExitStatus {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Tail of the simulator's standard error.
        stderr: String,
    },

    /// The simulator exited successfully but wrote no output file.
    #[error("Simulator produced no output at '{0}'")]
    MissingOutput(PathBuf),

    /// Failed to read the output file.
    #[error("Failed to read simulator output '{path}': {source}")]
    ReadOutput {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output file was not a valid result document.
    #[error("Failed to parse simulator output '{path}': {source}")]
    ParseOutput {
        /// The output path.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The output parsed but held non-finite or non-positive values.
    #[error("Simulator returned implausible result: {0:?}")]
    Implausible(SimulationResult),
}

/// Result type for simulator operations.
pub type Result<T> = std::result::Result<T, SimulatorError>;
