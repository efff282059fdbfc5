//! Inventory tool server
//!
//! Serves a static mock CCE cluster inventory through named tool calls
//! over HTTP, plus health and metrics endpoints.

use anyhow::Result;
use inventory_lib::{InventoryStore, ToolRegistry};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod metrics;

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!(version = SERVER_VERSION, "Starting inventory-server");

    // Load configuration
    let config = config::ServerConfig::load()?;

    // The store is fully populated before the listener opens; every query
    // after this point is a pure read.
    let store = InventoryStore::with_mock_data();
    info!(
        clusters = store.cluster_count(),
        pods = store.pod_count(),
        "Inventory loaded"
    );

    let registry = ToolRegistry::new(store);
    let metrics = metrics::ServerMetrics::new();

    // Create shared application state
    let app_state = Arc::new(api::AppState::new(registry, metrics));

    // Start the tool-call server
    let api_handle = tokio::spawn(api::serve(config, app_state));

    // Run until the server fails (e.g. the bind is refused) or a shutdown
    // signal arrives
    tokio::select! {
        result = api_handle => {
            result??;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}
