//! Prometheus scrape endpoint

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

use crate::AppState;

/// Prometheus text exposition content type.
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Export RAN metrics
pub async fn export_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.to_prometheus(),
    )
}
