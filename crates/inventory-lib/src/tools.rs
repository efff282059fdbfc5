//! Named tool-call surface over the inventory store
//!
//! Tool names and descriptions are part of the wire contract: existing
//! clients dispatch on these exact strings, so they must not change.

use crate::store::InventoryStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

pub const GET_CLUSTERS: &str = "get_clusters_by_region_and_project_id";
pub const GET_NAMESPACES: &str = "get_namespaces";
pub const GET_PODS: &str = "get_pods_by_namespace";
pub const GET_POD_LOGS: &str = "get_pod_logs_by_pod_name_and_namespace_name";

/// Describes one registered tool for discovery
#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [&'static str],
}

const TOOL_SPECS: &[ToolSpec] = &[
    ToolSpec {
        name: GET_CLUSTERS,
        description: "List all clusters by region and project id.",
        parameters: &["region", "project_id"],
    },
    ToolSpec {
        name: GET_NAMESPACES,
        description: "List all namespaces in a Huawei CCE cluster.",
        parameters: &["region", "cluster_id"],
    },
    ToolSpec {
        name: GET_PODS,
        description: "List all pods in a namespace in a Huawei CCE cluster.",
        parameters: &["region", "cluster_id", "namespace"],
    },
    ToolSpec {
        name: GET_POD_LOGS,
        description: "Get logs for a specific pod by pod name and namespace name.",
        parameters: &["cluster_id", "namespace", "pod_name"],
    },
];

/// Failure to route or decode a tool call
///
/// A pod log lookup that resolves nothing is not a `ToolError`; it
/// dispatches successfully to the value `{"error": "Pod not found"}`.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize result of {tool}")]
    Serialize {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ToolError {
    /// Stable short name of the failure, fit for metric labels
    ///
    /// Client-supplied tool names must never become label values; the set
    /// returned here is fixed.
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::UnknownTool(_) => "unknown_tool",
            ToolError::InvalidArguments { .. } => "invalid_arguments",
            ToolError::Serialize { .. } => "serialize",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ClustersArgs {
    region: String,
    project_id: String,
}

#[derive(Debug, Deserialize)]
struct NamespacesArgs {
    region: String,
    cluster_id: String,
}

#[derive(Debug, Deserialize)]
struct PodsArgs {
    region: String,
    cluster_id: String,
    namespace: String,
}

#[derive(Debug, Deserialize)]
struct PodLogsArgs {
    cluster_id: String,
    namespace: String,
    pod_name: String,
}

/// Dispatches named calls with keyword arguments onto store queries
///
/// The registry owns the immutable store; cloning the registry is cheap
/// enough for this dataset and keeps handlers free of lifetimes.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    store: InventoryStore,
}

impl ToolRegistry {
    pub fn new(store: InventoryStore) -> Self {
        Self { store }
    }

    /// Descriptors of every registered tool
    pub fn specs() -> &'static [ToolSpec] {
        TOOL_SPECS
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    /// Route a named call to its query and serialize the result
    pub fn dispatch(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        debug!(tool = name, "Dispatching tool call");

        match name {
            GET_CLUSTERS => {
                let args: ClustersArgs = parse_args(GET_CLUSTERS, arguments)?;
                to_result(GET_CLUSTERS, self.store.clusters(&args.region, &args.project_id))
            }
            GET_NAMESPACES => {
                let args: NamespacesArgs = parse_args(GET_NAMESPACES, arguments)?;
                to_result(
                    GET_NAMESPACES,
                    self.store.namespaces(&args.region, &args.cluster_id),
                )
            }
            GET_PODS => {
                let args: PodsArgs = parse_args(GET_PODS, arguments)?;
                to_result(
                    GET_PODS,
                    self.store
                        .pods(&args.region, &args.cluster_id, &args.namespace),
                )
            }
            GET_POD_LOGS => {
                let args: PodLogsArgs = parse_args(GET_POD_LOGS, arguments)?;
                match self
                    .store
                    .pod_logs(&args.cluster_id, &args.namespace, &args.pod_name)
                {
                    Some(logs) => to_result(GET_POD_LOGS, logs),
                    // Not-found is a data value the caller branches on, not
                    // a fault raised across the boundary.
                    None => Ok(json!({ "error": "Pod not found" })),
                }
            }
            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}

fn parse_args<T: DeserializeOwned>(tool: &'static str, arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments { tool, source })
}

fn to_result<T: Serialize>(tool: &'static str, value: T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|source| ToolError::Serialize { tool, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(InventoryStore::with_mock_data())
    }

    #[test]
    fn registers_all_four_tools_with_stable_names() {
        let names: Vec<&str> = ToolRegistry::specs().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            [
                "get_clusters_by_region_and_project_id",
                "get_namespaces",
                "get_pods_by_namespace",
                "get_pod_logs_by_pod_name_and_namespace_name",
            ]
        );
    }

    #[test]
    fn dispatch_clusters_echoes_arguments() {
        let result = registry()
            .dispatch(
                GET_CLUSTERS,
                json!({ "region": "eu-west-101", "project_id": "proj-1" }),
            )
            .unwrap();

        let rows = result.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["cluster_id"], "cluster-1");
        assert_eq!(rows[0]["region"], "eu-west-101");
        assert_eq!(rows[0]["project_id"], "proj-1");
        assert_eq!(rows[0]["status"], "RUNNING");
    }

    #[test]
    fn dispatch_namespaces_unknown_cluster_yields_empty_array() {
        let result = registry()
            .dispatch(
                GET_NAMESPACES,
                json!({ "region": "r", "cluster_id": "no-such-cluster" }),
            )
            .unwrap();

        assert_eq!(result, json!([]));
    }

    #[test]
    fn dispatch_pods_injects_context_fields() {
        let result = registry()
            .dispatch(
                GET_PODS,
                json!({ "region": "r", "cluster_id": "cluster-1", "namespace": "ns-b" }),
            )
            .unwrap();

        let rows = result.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["pod_name"], "pod-b");
        assert_eq!(rows[0]["status"], "CRASHED");
        assert_eq!(rows[0]["container_status"], "TERMINATED");
        assert_eq!(rows[0]["namespace"], "ns-b");
        assert_eq!(rows[0]["cluster_id"], "cluster-1");
        assert_eq!(rows[0]["region"], "r");
    }

    #[test]
    fn dispatch_pod_logs_not_found_is_a_value_not_an_error() {
        let result = registry()
            .dispatch(
                GET_POD_LOGS,
                json!({
                    "cluster_id": "cluster-1",
                    "namespace": "ns-a",
                    "pod_name": "nonexistent-pod"
                }),
            )
            .unwrap();

        assert_eq!(result, json!({ "error": "Pod not found" }));
    }

    #[test]
    fn dispatch_pod_logs_found() {
        let result = registry()
            .dispatch(
                GET_POD_LOGS,
                json!({
                    "cluster_id": "cluster-2",
                    "namespace": "ns-x",
                    "pod_name": "pod-x2"
                }),
            )
            .unwrap();

        assert_eq!(result["pod_name"], "pod-x2");
        assert_eq!(result["namespace"], "ns-x");
        assert_eq!(result["cluster_id"], "cluster-2");
        assert!(result["logs"].as_str().unwrap().contains("[FATAL] Pod crashed."));
    }

    #[test]
    fn dispatch_unknown_tool_fails() {
        let err = registry().dispatch("get_nodes", json!({})).unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(name) if name == "get_nodes"));
    }

    #[test]
    fn error_kinds_form_a_fixed_set_regardless_of_client_input() {
        let reg = registry();

        // Arbitrary bogus names all collapse to the same kind
        let a = reg.dispatch("get_nodes", json!({})).unwrap_err();
        let b = reg.dispatch("totally-made-up-tool", json!({})).unwrap_err();
        assert_eq!(a.kind(), "unknown_tool");
        assert_eq!(b.kind(), "unknown_tool");

        let c = reg.dispatch(GET_NAMESPACES, json!({})).unwrap_err();
        assert_eq!(c.kind(), "invalid_arguments");
    }

    #[test]
    fn dispatch_rejects_missing_arguments() {
        let err = registry()
            .dispatch(GET_NAMESPACES, json!({ "region": "r" }))
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidArguments { tool, .. } if tool == GET_NAMESPACES));
    }
}
