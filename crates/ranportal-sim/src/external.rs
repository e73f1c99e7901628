//! Child-process simulator provider.
//!
//! The simulator is invoked as
//! `<executable> [extra args] --frequency=<hz> --bandwidth=<hz>
//! --duplexMode=<TDD|FDD> --transmitPower=<dbm> --outputPath=<file>`
//! inside a fresh temporary directory, and must write a JSON document of
//! the shape described by [`SimulatorOutput`] to the output path.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use ranportal_types::{RanParameters, SimulationResult};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncReadExt;
use tokio::process::{ChildStderr, Command};

use crate::{Result, SimulationProvider, SimulatorConfig, SimulatorError};

/// File name the simulator is asked to write inside its working directory.
pub const OUTPUT_FILE_NAME: &str = "simulation_output.json";

/// Number of trailing stderr characters kept in error messages.
const STDERR_TAIL_CHARS: usize = 512;

/// Bytes of stderr retained while the simulator runs; enough for
/// [`STDERR_TAIL_CHARS`] characters of any UTF-8 text.
const STDERR_TAIL_BYTES: usize = STDERR_TAIL_CHARS * 4;

/// How long to wait for stderr to close after the simulator exits. A
/// backgrounded grandchild can hold the pipe open indefinitely.
const STDERR_DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Result document written by the simulator.
///
/// The simulator echoes its input parameters next to the `results` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorOutput {
    /// Parameters the simulator ran with.
    #[serde(flatten)]
    pub parameters: RanParameters,
    /// Computed throughput and latency.
    pub results: SimulationResult,
}

/// Runs an external simulator executable as a child process.
#[derive(Debug, Clone)]
pub struct ExternalSimulator {
    config: SimulatorConfig,
}

impl ExternalSimulator {
    /// Creates a simulator provider from configuration.
    #[must_use]
    pub const fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Returns the simulator configuration.
    #[must_use]
    pub const fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Runs the simulator once and reads back its result.
    ///
    /// The child is killed if it outlives the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns an error on spawn failure, timeout, non-zero exit, or a
    /// missing, unreadable or implausible output document.
    pub async fn run(&self, params: &RanParameters) -> Result<SimulationResult> {
        let executable = self
            .config
            .executable
            .as_ref()
            .ok_or(SimulatorError::NotConfigured)?;

        let work_dir = tempfile::Builder::new()
            .prefix("ranportal-sim-")
            .tempdir()
            .map_err(SimulatorError::WorkDir)?;
        let output_path = work_dir.path().join(OUTPUT_FILE_NAME);

        tracing::debug!(
            executable = %executable.display(),
            %params,
            timeout = ?self.config.timeout,
            "running external simulator"
        );

        let mut child = Command::new(executable)
            .args(&self.config.extra_args)
            .args(simulator_args(params, &output_path))
            .current_dir(work_dir.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| SimulatorError::Spawn {
                executable: executable.clone(),
                source: e,
            })?;

        let stderr = tokio::spawn(read_stderr_tail(child.stderr.take()));

        let status = match tokio::time::timeout(self.config.timeout, child.wait()).await {
            Ok(status) => status.map_err(SimulatorError::Wait)?,
            Err(_) => {
                if let Err(e) = child.kill().await {
                    tracing::warn!(error = %e, "failed to kill timed out simulator");
                }
                return Err(SimulatorError::Timeout(self.config.timeout));
            }
        };

        if !status.success() {
            let stderr = tokio::time::timeout(STDERR_DRAIN_TIMEOUT, stderr)
                .await
                .ok()
                .and_then(std::result::Result::ok)
                .unwrap_or_default();
            return Err(SimulatorError::ExitStatus {
                code: status.code(),
                stderr: stderr_tail(&stderr),
            });
        }

        read_output(&output_path).await
    }
}

#[async_trait]
impl SimulationProvider for ExternalSimulator {
    fn name(&self) -> &str {
        "external"
    }

    async fn simulate(&self, params: &RanParameters) -> Result<SimulationResult> {
        self.run(params).await
    }
}

/// Builds the parameter arguments passed to the simulator.
fn simulator_args(params: &RanParameters, output_path: &Path) -> Vec<String> {
    vec![
        format!("--frequency={}", params.frequency_hz()),
        format!("--bandwidth={}", params.bandwidth_hz()),
        format!("--duplexMode={}", params.duplex_mode()),
        format!("--transmitPower={}", params.transmit_power_dbm()),
        format!("--outputPath={}", output_path.display()),
    ]
}

async fn read_output(path: &Path) -> Result<SimulationResult> {
    if !path.exists() {
        return Err(SimulatorError::MissingOutput(path.to_path_buf()));
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SimulatorError::ReadOutput {
            path: path.to_path_buf(),
            source: e,
        })?;

    parse_output(&content, path)
}

fn parse_output(content: &str, path: &Path) -> Result<SimulationResult> {
    let output: SimulatorOutput =
        serde_json::from_str(content).map_err(|e| SimulatorError::ParseOutput {
            path: PathBuf::from(path),
            source: e,
        })?;

    if output.results.is_plausible() {
        Ok(output.results)
    } else {
        Err(SimulatorError::Implausible(output.results))
    }
}

/// Drains the child's stderr, keeping only the last [`STDERR_TAIL_BYTES`].
async fn read_stderr_tail(stderr: Option<ChildStderr>) -> Vec<u8> {
    let Some(mut stderr) = stderr else {
        return Vec::new();
    };

    let mut tail = Vec::with_capacity(STDERR_TAIL_BYTES);
    let mut chunk = [0u8; 4096];
    loop {
        match stderr.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => push_tail(&mut tail, &chunk[..n], STDERR_TAIL_BYTES),
        }
    }
    tail
}

fn push_tail(tail: &mut Vec<u8>, chunk: &[u8], limit: usize) {
    let chunk = &chunk[chunk.len().saturating_sub(limit)..];
    let overflow = (tail.len() + chunk.len()).saturating_sub(limit);
    tail.drain(..overflow);
    tail.extend_from_slice(chunk);
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim();
    let start = text
        .char_indices()
        .rev()
        .nth(STDERR_TAIL_CHARS - 1)
        .map_or(0, |(i, _)| i);
    text[start..].to_string()
}
