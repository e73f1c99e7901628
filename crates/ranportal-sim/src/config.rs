//! Simulator configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the external simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Simulator executable. `None` disables the external path entirely.
    pub executable: Option<PathBuf>,
    /// Arguments placed before the generated parameter arguments.
    pub extra_args: Vec<String>,
    /// Wall-clock limit for one run, after which the child is killed.
    pub timeout: Duration,
}

impl SimulatorConfig {
    /// Default wall-clock limit for one simulator run.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a configuration that runs the given executable.
    #[must_use]
    pub fn with_executable(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: Some(executable.into()),
            ..Self::default()
        }
    }

    /// Sets the run timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the leading arguments.
    #[must_use]
    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if an executable is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.executable.is_some()
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            executable: None,
            extra_args: Vec::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let config = SimulatorConfig::default();
        assert!(!config.is_enabled());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder() {
        let config = SimulatorConfig::with_executable("/opt/ns3/nr-simulation")
            .timeout(Duration::from_secs(5))
            .extra_args(["--verbose"]);

        assert!(config.is_enabled());
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.extra_args, vec!["--verbose".to_string()]);
    }
}
