//! Gauge and counter export for ranportal RAN estimates.
//!
//! Metrics are injected rather than global: callers hold a [`MetricsSink`]
//! and the HTTP layer renders whichever [`RanMetrics`] instance it was given.
//!
//! - [`MetricsSink`] - Capability to record an estimate
//! - [`RanMetrics`] - Atomic gauge/counter set with Prometheus text export
//! - [`MetricsSnapshot`] - Point-in-time copy of every value
//! - [`NoopMetrics`] - Sink that discards everything
//! - [`Counter`] / [`Gauge`] - Lock-free primitives

#![doc(issue_tracker_base_url = "https://github.com/ranportal/ranportal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod primitives;
mod ran;
mod sink;

pub use primitives::{Counter, Gauge};
pub use ran::{MetricsSnapshot, RanMetrics};
pub use sink::{MetricsSink, NoopMetrics};
