//! The metrics capability handed to estimate callers.

use ranportal_types::{RanParameters, SimulationResult};

/// Destination for per-estimate metrics.
///
/// Implementations must be cheap and non-blocking; they are called on the
/// request path after every successful estimate.
pub trait MetricsSink: Send + Sync {
    /// Records a completed estimate.
    fn record_estimate(&self, params: &RanParameters, result: &SimulationResult);

    /// Records that the external simulator failed and the estimator was used.
    fn record_fallback(&self, _params: &RanParameters) {}
}

/// A sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn record_estimate(&self, _params: &RanParameters, _result: &SimulationResult) {}
}
