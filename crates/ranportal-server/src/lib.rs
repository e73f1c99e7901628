//! HTTP API for ranportal.
//!
//! - [`RanPortalServer`] - Router construction and serving
//! - [`AppState`] - Store, simulation service and metrics shared by handlers
//! - [`ServerConfig`] - Bind address and CORS settings
//!
//! # Routes
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | GET | `/health` | Liveness |
//! | POST | `/api/configurations` | Validate, simulate and store a configuration |
//! | GET | `/api/configurations` | List stored configurations, newest first |
//! | GET | `/api/configurations/:id` | Fetch one configuration |
//! | POST | `/api/estimate` | Estimator preview, nothing stored |
//! | GET | `/metrics` | Prometheus text export |

#![doc(issue_tracker_base_url = "https://github.com/ranportal/ranportal/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use ranportal_metrics::RanMetrics;
use ranportal_sim::{SimulationService, SimulatorConfig};
use ranportal_store::ConfigurationStore;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{DEFAULT_PORT, ServerConfig, ServerConfigBuilder};
pub use error::{ApiError, ErrorBody};

/// Shared application state
pub struct AppState {
    /// Configuration record store
    pub store: Arc<dyn ConfigurationStore>,
    /// Simulator with estimator fallback
    pub simulation: SimulationService,
    /// Metrics updated by every simulation
    pub metrics: Arc<RanMetrics>,
}

impl AppState {
    /// Create state whose simulation service reports into a fresh metrics set
    #[must_use]
    pub fn new(store: Arc<dyn ConfigurationStore>, simulator: SimulatorConfig) -> Self {
        let metrics = Arc::new(RanMetrics::new());
        let simulation = SimulationService::from_config(simulator, metrics.clone());
        Self {
            store,
            simulation,
            metrics,
        }
    }

    /// Create state from parts that were wired up elsewhere
    #[must_use]
    pub const fn from_parts(
        store: Arc<dyn ConfigurationStore>,
        simulation: SimulationService,
        metrics: Arc<RanMetrics>,
    ) -> Self {
        Self {
            store,
            simulation,
            metrics,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("simulation", &self.simulation)
            .finish_non_exhaustive()
    }
}

/// The ranportal HTTP server
#[derive(Debug)]
pub struct RanPortalServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl RanPortalServer {
    /// Create a new server
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Shared state handed to handlers
    #[must_use]
    pub const fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Build the router with tracing and, if enabled, CORS layers
    pub fn router(&self) -> Router {
        let router = api_router(self.state.clone()).layer(TraceLayer::new_for_http());
        if self.config.cors_enabled {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Bind and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or serving fails.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.config.addr();
        let router = self.router();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            %addr,
            simulator = self.state.simulation.has_provider(),
            "ranportal server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Build the API routes without middleware
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/configurations",
            post(routes::configurations::create_configuration)
                .get(routes::configurations::list_configurations),
        )
        .route(
            "/api/configurations/:id",
            get(routes::configurations::get_configuration),
        )
        .route("/api/estimate", post(routes::estimate::preview_estimate))
        .route("/metrics", get(routes::metrics::export_metrics))
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
