//! Configuration endpoints
//!
//! Creating a configuration validates the request, simulates it, and stores
//! the record with its result. Store calls touch the filesystem, so they run
//! on the blocking thread pool.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use ranportal_store::ConfigurationStore;
use ranportal_types::{ConfigurationId, ConfigurationRequest, RanConfiguration};

use crate::{AppState, error::ApiError};

/// Create and simulate a configuration
pub async fn create_configuration(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ConfigurationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RanConfiguration>), ApiError> {
    let Json(request) = body?;
    let params = request.validate()?;

    let simulation = state.simulation.simulate(&params).await;
    let record = RanConfiguration::new(params, simulation.result);

    let stored = record.clone();
    if let Err(e) = with_store(&state, move |store| store.insert(&stored)).await {
        tracing::error!(id = %record.id(), error = %e, "failed to persist configuration");
        return Err(ApiError::Storage {
            message: format!("failed to persist configuration: {e}"),
            simulation_result: Some(simulation.result),
        });
    }

    tracing::info!(id = %record.id(), source = %simulation.source, "configuration stored");
    Ok((StatusCode::CREATED, Json(record)))
}

/// List all stored configurations, newest first
pub async fn list_configurations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RanConfiguration>>, ApiError> {
    let records = with_store(&state, |store| store.list()).await.map_err(|e| ApiError::Storage {
        message: format!("failed to list configurations: {e}"),
        simulation_result: None,
    })?;
    Ok(Json(records))
}

/// Fetch one configuration by id
pub async fn get_configuration(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RanConfiguration>, ApiError> {
    let id: ConfigurationId = id.parse()?;

    match with_store(&state, move |store| store.get(id)).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(ApiError::NotFound(format!("configuration {id} not found"))),
        Err(e) => Err(ApiError::Storage {
            message: format!("failed to load configuration {id}: {e}"),
            simulation_result: None,
        }),
    }
}

async fn with_store<T, F>(state: &AppState, f: F) -> Result<T, String>
where
    F: FnOnce(&dyn ConfigurationStore) -> ranportal_store::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(&state.store);
    match tokio::task::spawn_blocking(move || f(store.as_ref())).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(format!("store task failed: {e}")),
    }
}
