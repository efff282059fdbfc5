//! Prometheus metrics for the tool server
//!
//! Tracks tool call volume, routing/argument errors and dispatch latency.

use prometheus::{register_histogram, register_int_counter_vec, Histogram, IntCounterVec};
use std::sync::OnceLock;

/// Histogram buckets for dispatch latency (in seconds); dispatches are
/// in-memory scans, so the buckets sit well below a millisecond.
const LATENCY_BUCKETS: &[f64] = &[
    0.000001, 0.000005, 0.00001, 0.000025, 0.00005, 0.0001, 0.00025, 0.0005, 0.001, 0.005,
];

/// Global metrics instance (registered once)
static GLOBAL_METRICS: OnceLock<ServerMetricsInner> = OnceLock::new();

/// Inner metrics structure that holds the actual Prometheus metrics
struct ServerMetricsInner {
    tool_calls: IntCounterVec,
    tool_errors: IntCounterVec,
    dispatch_latency_seconds: Histogram,
}

impl ServerMetricsInner {
    fn new() -> Self {
        Self {
            tool_calls: register_int_counter_vec!(
                "inventory_tool_calls_total",
                "Total number of tool invocations by tool name",
                &["tool"]
            )
            .expect("Failed to register tool_calls_total"),

            tool_errors: register_int_counter_vec!(
                "inventory_tool_errors_total",
                "Total number of rejected tool calls by failure reason",
                &["reason"]
            )
            .expect("Failed to register tool_errors_total"),

            dispatch_latency_seconds: register_histogram!(
                "inventory_dispatch_latency_seconds",
                "Time spent dispatching a tool call to the store",
                LATENCY_BUCKETS.to_vec()
            )
            .expect("Failed to register dispatch_latency_seconds"),
        }
    }
}

/// Server metrics for Prometheus exposition
///
/// This is a lightweight handle to the global metrics instance.
/// Multiple clones share the same underlying metrics.
#[derive(Clone)]
pub struct ServerMetrics {
    // This is just a marker - we use the global instance
    _private: (),
}

impl Default for ServerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerMetrics {
    /// Create a new metrics handle (initializes global metrics if needed)
    pub fn new() -> Self {
        GLOBAL_METRICS.get_or_init(ServerMetricsInner::new);
        Self { _private: () }
    }

    fn inner(&self) -> &ServerMetricsInner {
        GLOBAL_METRICS.get().expect("Metrics not initialized")
    }

    /// Count a dispatched tool call
    pub fn inc_tool_call(&self, tool: &str) {
        self.inner().tool_calls.with_label_values(&[tool]).inc();
    }

    /// Count a rejected tool call
    ///
    /// `reason` must come from the fixed [`ToolError::kind`] set; labelling
    /// by the client-supplied tool name would mint one series per bogus
    /// name with no eviction path.
    ///
    /// [`ToolError::kind`]: inventory_lib::ToolError::kind
    pub fn inc_tool_error(&self, reason: &str) {
        self.inner().tool_errors.with_label_values(&[reason]).inc();
    }

    /// Record a dispatch latency observation
    pub fn observe_dispatch_latency(&self, duration_secs: f64) {
        self.inner().dispatch_latency_seconds.observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_lib::{InventoryStore, ToolError, ToolRegistry};
    use prometheus::{Encoder, TextEncoder};
    use serde_json::json;

    fn exposition() -> String {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&prometheus::gather(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn error_series_stay_bounded_under_bogus_tool_names() {
        let metrics = ServerMetrics::new();
        let registry = ToolRegistry::new(InventoryStore::with_mock_data());

        // A client can send any number of distinct unroutable names; they
        // must all land in the same series.
        for name in ["get_nodes", "get_volumes", "get_quotas"] {
            let err: ToolError = registry.dispatch(name, json!({})).unwrap_err();
            metrics.inc_tool_error(err.kind());
        }

        let text = exposition();
        assert!(text.contains(r#"inventory_tool_errors_total{reason="unknown_tool"}"#));
        for name in ["get_nodes", "get_volumes", "get_quotas"] {
            assert!(
                !text.contains(name),
                "client-supplied name {} must not appear as a label",
                name
            );
        }
    }

    #[test]
    fn call_counter_is_labelled_by_tool() {
        let metrics = ServerMetrics::new();
        metrics.inc_tool_call("get_namespaces");

        let text = exposition();
        assert!(text.contains(r#"inventory_tool_calls_total{tool="get_namespaces"}"#));
    }
}
