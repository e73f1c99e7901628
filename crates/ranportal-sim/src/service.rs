//! Simulation with estimator fallback.

use std::sync::Arc;

use ranportal_metrics::{MetricsSink, NoopMetrics};
use ranportal_types::{RanParameters, ResultSource, SimulationResult};

use crate::{ExternalSimulator, SimulationProvider, SimulatorConfig};

/// A completed simulation and where its result came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulation {
    /// The throughput/latency result.
    pub result: SimulationResult,
    /// Which provider produced it.
    pub source: ResultSource,
}

/// Produces simulation results, preferring an external provider when one is
/// configured and falling back to the built-in estimator on any failure.
///
/// Callers always receive a result; the fallback is visible only through
/// `tracing` output, [`MetricsSink::record_fallback`], and
/// [`Simulation::source`].
#[derive(Clone)]
pub struct SimulationService {
    provider: Option<Arc<dyn SimulationProvider>>,
    metrics: Arc<dyn MetricsSink>,
}

impl SimulationService {
    /// Creates a service that uses only the built-in estimator.
    #[must_use]
    pub fn new(metrics: Arc<dyn MetricsSink>) -> Self {
        Self {
            provider: None,
            metrics,
        }
    }

    /// Creates a service from simulator configuration.
    ///
    /// An external provider is installed only if an executable is configured.
    #[must_use]
    pub fn from_config(config: SimulatorConfig, metrics: Arc<dyn MetricsSink>) -> Self {
        let service = Self::new(metrics);
        if config.is_enabled() {
            service.with_provider(Arc::new(ExternalSimulator::new(config)))
        } else {
            service
        }
    }

    /// Installs an external provider.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn SimulationProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Returns true if an external provider is installed.
    #[must_use]
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Runs one simulation and records it in the metrics sink.
    pub async fn simulate(&self, params: &RanParameters) -> Simulation {
        let simulation = match &self.provider {
            None => {
                tracing::debug!(
                    %params,
                    "no external simulator configured, using built-in estimator"
                );
                Simulation {
                    result: ranportal_estimate::estimate(params),
                    source: ResultSource::Estimator,
                }
            }
            Some(provider) => match provider.simulate(params).await {
                Ok(result) => Simulation {
                    result,
                    source: ResultSource::Simulator,
                },
                Err(e) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %e,
                        %params,
                        "simulator failed, using built-in estimator"
                    );
                    self.metrics.record_fallback(params);
                    Simulation {
                        result: ranportal_estimate::estimate(params),
                        source: ResultSource::Estimator,
                    }
                }
            },
        };

        self.metrics.record_estimate(params, &simulation.result);

        tracing::debug!(
            source = %simulation.source,
            %params,
            throughput_bps = simulation.result.throughput_bps,
            latency_s = simulation.result.latency_s,
            "simulation completed"
        );

        simulation
    }
}

impl Default for SimulationService {
    fn default() -> Self {
        Self::new(Arc::new(NoopMetrics))
    }
}

impl std::fmt::Debug for SimulationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationService")
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .finish_non_exhaustive()
    }
}
