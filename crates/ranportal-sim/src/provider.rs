//! The provider seam.

use async_trait::async_trait;
use ranportal_types::{RanParameters, SimulationResult};

use crate::Result;

/// Anything that can turn RAN parameters into a simulation result.
///
/// Providers may be slow and may fail; [`crate::SimulationService`] owns the
/// policy for both.
#[async_trait]
pub trait SimulationProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Runs one simulation.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot produce a usable result.
    async fn simulate(&self, params: &RanParameters) -> Result<SimulationResult>;
}
