//! Core data models for the cluster inventory

use serde::{Deserialize, Serialize};

/// Lifecycle state of a cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClusterStatus {
    Running,
    Stopped,
}

/// Lifecycle state of a namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NamespaceStatus {
    Active,
}

/// Lifecycle state of a pod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PodStatus {
    Running,
    Crashed,
    Pending,
}

/// State of a pod's container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerStatus {
    Ready,
    Terminated,
    Waiting,
}

/// Top-level container-platform unit, analogous to a managed Kubernetes cluster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub cluster_id: String,
    pub name: String,
    pub status: ClusterStatus,
    pub namespaces: Vec<Namespace>,
}

/// Logical subdivision of a cluster grouping pods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    pub namespace: String,
    pub status: NamespaceStatus,
    pub pods: Vec<Pod>,
}

/// Smallest deployable unit, carrying status, container status and log text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pod {
    pub pod_name: String,
    pub status: PodStatus,
    pub container_status: ContainerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
}

/// Per-cluster row returned by the cluster listing query
///
/// `region` and `project_id` are echoed from the call's arguments; they do
/// not identify anything in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: String,
    pub region: String,
    pub project_id: String,
    pub name: String,
    pub status: ClusterStatus,
}

/// Per-namespace row returned by the namespace listing query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceSummary {
    pub namespace: String,
    pub cluster_id: String,
    pub region: String,
    pub status: NamespaceStatus,
}

/// Per-pod row returned by the pod listing query
///
/// Carries every stored pod field plus the namespace, cluster and region the
/// caller asked about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodRecord {
    pub pod_name: String,
    pub status: PodStatus,
    pub container_status: ContainerStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
    pub namespace: String,
    pub cluster_id: String,
    pub region: String,
}

/// Result of a successful pod log lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodLogs {
    pub pod_name: String,
    pub namespace: String,
    pub cluster_id: String,
    pub logs: String,
}
