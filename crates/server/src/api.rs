//! HTTP API for tool discovery, tool invocation, health and metrics

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use inventory_lib::{ToolRegistry, ToolSpec};
use prometheus::{Encoder, TextEncoder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::metrics::ServerMetrics;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: ToolRegistry,
    pub metrics: ServerMetrics,
}

impl AppState {
    pub fn new(registry: ToolRegistry, metrics: ServerMetrics) -> Self {
        Self { registry, metrics }
    }
}

/// Body of a tool invocation request
#[derive(Debug, Deserialize)]
pub struct ToolCallRequest {
    pub name: String,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    clusters: usize,
    pods: usize,
    tools: usize,
}

#[derive(Debug, Serialize)]
struct ReadinessResponse {
    ready: bool,
}

/// Tool discovery - the registered tools and their parameter names
async fn list_tools() -> Json<&'static [ToolSpec]> {
    Json(ToolRegistry::specs())
}

/// Tool invocation - routes the named call to the inventory store
///
/// A pod-not-found lookup is a successful call carrying an error value in
/// its body; only unroutable or undecodable requests get a 400.
async fn call_tool(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ToolCallRequest>,
) -> Response {
    let started = Instant::now();

    match state.registry.dispatch(&request.name, request.arguments) {
        Ok(result) => {
            state
                .metrics
                .observe_dispatch_latency(started.elapsed().as_secs_f64());
            state.metrics.inc_tool_call(&request.name);
            info!(tool = %request.name, "Tool invoked");
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            state.metrics.inc_tool_error(err.kind());
            warn!(tool = %request.name, error = %err, "Rejected tool call");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Liveness check - the store is immutable, so serving implies healthy
async fn healthz(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.registry.store();

    Json(HealthResponse {
        status: "healthy",
        clusters: store.cluster_count(),
        pods: store.pod_count(),
        tools: ToolRegistry::specs().len(),
    })
}

/// Readiness check - the store is populated before the listener opens
async fn readyz() -> impl IntoResponse {
    Json(ReadinessResponse { ready: true })
}

/// Prometheus metrics endpoint
async fn metrics() -> Response {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();

    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        warn!(error = %err, "Failed to encode metrics");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        buffer,
    )
        .into_response()
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tools/call", post(call_tool))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .with_state(state)
}

/// Start the API server
pub async fn serve(config: ServerConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = create_router(state);

    let addr = format!("{}:{}", config.bind_addr, config.api_port);
    info!(addr = %addr, "Starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
