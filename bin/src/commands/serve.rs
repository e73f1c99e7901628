//! Serve command implementation.

use crate::display::open_store;
use anyhow::{Context, Result};
use ranportal_server::{AppState, RanPortalServer, ServerConfig};
use ranportal_sim::SimulatorConfig;
use ranportal_store::{ConfigurationStore, MemoryStore};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Options for the `serve` command.
pub(crate) struct ServeOptions {
    pub(crate) host: IpAddr,
    pub(crate) port: u16,
    pub(crate) data_dir: Option<PathBuf>,
    pub(crate) ephemeral: bool,
    pub(crate) simulator: Option<PathBuf>,
    pub(crate) simulator_timeout: u64,
    pub(crate) cors: bool,
}

/// Run the HTTP API until interrupted.
pub(crate) async fn serve(options: ServeOptions) -> Result<()> {
    let store: Arc<dyn ConfigurationStore> = if options.ephemeral {
        tracing::warn!("ephemeral mode: configurations are kept in memory only");
        Arc::new(MemoryStore::new())
    } else {
        let store = open_store(options.data_dir)?;
        tracing::info!(path = %store.base_path().display(), "using file store");
        Arc::new(store)
    };

    let simulator = match options.simulator {
        Some(path) => {
            tracing::info!(executable = %path.display(), "external simulator enabled");
            SimulatorConfig::with_executable(path)
        }
        None => SimulatorConfig::default(),
    }
    .timeout(Duration::from_secs(options.simulator_timeout));

    let config = ServerConfig::builder()
        .host(options.host)
        .port(options.port)
        .cors(options.cors)
        .build();

    RanPortalServer::new(config, AppState::new(store, simulator))
        .run()
        .await
        .context("Server error")
}
