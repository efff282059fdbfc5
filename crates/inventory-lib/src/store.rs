//! Immutable inventory store and its query operations

use crate::models::{
    Cluster, ClusterStatus, ClusterSummary, ContainerStatus, Namespace, NamespaceStatus,
    NamespaceSummary, Pod, PodLogs, PodRecord, PodStatus,
};
use tracing::debug;

/// Fallback text returned for pods that carry no stored logs
pub const NO_LOGS: &str = "[INFO] No logs found.";

/// Read-only store over the cluster → namespace → pod hierarchy
///
/// Populated once at startup and never mutated afterwards, so it can be
/// shared across any number of concurrent callers without locking. All
/// queries are pure reads over the stored data.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    clusters: Vec<Cluster>,
}

impl InventoryStore {
    pub fn new(clusters: Vec<Cluster>) -> Self {
        Self { clusters }
    }

    /// Store preloaded with the mock CCE dataset
    pub fn with_mock_data() -> Self {
        Self::new(mock_clusters())
    }

    /// Number of clusters in the store
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Number of pods across all clusters and namespaces
    pub fn pod_count(&self) -> usize {
        self.clusters
            .iter()
            .flat_map(|c| &c.namespaces)
            .map(|ns| ns.pods.len())
            .sum()
    }

    fn find_cluster(&self, cluster_id: &str) -> Option<&Cluster> {
        self.clusters.iter().find(|c| c.cluster_id == cluster_id)
    }

    fn find_namespace(&self, cluster_id: &str, namespace: &str) -> Option<&Namespace> {
        self.find_cluster(cluster_id)?
            .namespaces
            .iter()
            .find(|ns| ns.namespace == namespace)
    }

    /// List every cluster as a summary row, in storage order
    ///
    /// `region` and `project_id` are echoed into each row and never used for
    /// filtering: the mock returns the full cluster list regardless of their
    /// values.
    pub fn clusters(&self, region: &str, project_id: &str) -> Vec<ClusterSummary> {
        self.clusters
            .iter()
            .map(|c| ClusterSummary {
                cluster_id: c.cluster_id.clone(),
                region: region.to_string(),
                project_id: project_id.to_string(),
                name: c.name.clone(),
                status: c.status,
            })
            .collect()
    }

    /// List the namespaces of a cluster, in storage order
    ///
    /// Returns an empty vec when no cluster matches `cluster_id`.
    pub fn namespaces(&self, region: &str, cluster_id: &str) -> Vec<NamespaceSummary> {
        let Some(cluster) = self.find_cluster(cluster_id) else {
            debug!(cluster_id, "Namespace listing for unknown cluster");
            return Vec::new();
        };

        cluster
            .namespaces
            .iter()
            .map(|ns| NamespaceSummary {
                namespace: ns.namespace.clone(),
                cluster_id: cluster_id.to_string(),
                region: region.to_string(),
                status: ns.status,
            })
            .collect()
    }

    /// List the pods of a namespace, in storage order
    ///
    /// Each record carries every stored pod field plus the namespace,
    /// cluster and region from the call. Returns an empty vec when the
    /// cluster or namespace is missing; an existing namespace with no pods
    /// yields the same result.
    pub fn pods(&self, region: &str, cluster_id: &str, namespace: &str) -> Vec<PodRecord> {
        let Some(ns) = self.find_namespace(cluster_id, namespace) else {
            debug!(cluster_id, namespace, "Pod listing for unknown namespace");
            return Vec::new();
        };

        ns.pods
            .iter()
            .map(|pod| PodRecord {
                pod_name: pod.pod_name.clone(),
                status: pod.status,
                container_status: pod.container_status,
                logs: pod.logs.clone(),
                namespace: namespace.to_string(),
                cluster_id: cluster_id.to_string(),
                region: region.to_string(),
            })
            .collect()
    }

    /// Look up the logs of a single pod by exact key match at each level
    ///
    /// Returns `None` when any of the three keys fails to resolve. Pods
    /// without stored logs fall back to [`NO_LOGS`].
    pub fn pod_logs(&self, cluster_id: &str, namespace: &str, pod_name: &str) -> Option<PodLogs> {
        let pod = self
            .find_namespace(cluster_id, namespace)?
            .pods
            .iter()
            .find(|p| p.pod_name == pod_name)?;

        Some(PodLogs {
            pod_name: pod.pod_name.clone(),
            namespace: namespace.to_string(),
            cluster_id: cluster_id.to_string(),
            logs: pod.logs.clone().unwrap_or_else(|| NO_LOGS.to_string()),
        })
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::with_mock_data()
    }
}

/// The fixed dataset served by the mock
fn mock_clusters() -> Vec<Cluster> {
    vec![
        Cluster {
            cluster_id: "cluster-1".to_string(),
            name: "mock-cluster-1".to_string(),
            status: ClusterStatus::Running,
            namespaces: vec![
                Namespace {
                    namespace: "ns-a".to_string(),
                    status: NamespaceStatus::Active,
                    pods: vec![Pod {
                        pod_name: "pod-a".to_string(),
                        status: PodStatus::Running,
                        container_status: ContainerStatus::Ready,
                        logs: Some(
                            "[INFO] Pod started successfully.\n[INFO] Service running.\n[INFO] No errors detected."
                                .to_string(),
                        ),
                    }],
                },
                Namespace {
                    namespace: "ns-b".to_string(),
                    status: NamespaceStatus::Active,
                    pods: vec![Pod {
                        pod_name: "pod-b".to_string(),
                        status: PodStatus::Crashed,
                        container_status: ContainerStatus::Terminated,
                        logs: Some(
                            "[INFO] Pod started.\n[ERROR] Unhandled exception.\n[FATAL] Pod crashed unexpectedly!\n[INFO] Attempting restart..."
                                .to_string(),
                        ),
                    }],
                },
                Namespace {
                    namespace: "ns-c".to_string(),
                    status: NamespaceStatus::Active,
                    pods: vec![Pod {
                        pod_name: "pod-c".to_string(),
                        status: PodStatus::Pending,
                        container_status: ContainerStatus::Waiting,
                        logs: Some(
                            "[INFO] Pod created.\n[INFO] Waiting for resources...\n[WARNING] Pod is pending scheduling."
                                .to_string(),
                        ),
                    }],
                },
            ],
        },
        Cluster {
            cluster_id: "cluster-2".to_string(),
            name: "mock-cluster-2".to_string(),
            status: ClusterStatus::Stopped,
            namespaces: vec![
                Namespace {
                    namespace: "ns-x".to_string(),
                    status: NamespaceStatus::Active,
                    pods: vec![
                        Pod {
                            pod_name: "pod-x1".to_string(),
                            status: PodStatus::Running,
                            container_status: ContainerStatus::Ready,
                            logs: Some(
                                "[INFO] Pod started.\n[INFO] Running inference.\n[INFO] Health checks passed."
                                    .to_string(),
                            ),
                        },
                        Pod {
                            pod_name: "pod-x2".to_string(),
                            status: PodStatus::Crashed,
                            container_status: ContainerStatus::Terminated,
                            logs: Some(
                                "[INFO] Pod started.\n[WARNING] Memory usage high.\n[ERROR] Segmentation fault.\n[FATAL] Pod crashed."
                                    .to_string(),
                            ),
                        },
                    ],
                },
                Namespace {
                    namespace: "ns-y".to_string(),
                    status: NamespaceStatus::Active,
                    pods: vec![],
                },
                Namespace {
                    namespace: "ns-z".to_string(),
                    status: NamespaceStatus::Active,
                    pods: vec![],
                },
                Namespace {
                    namespace: "ns-empty".to_string(),
                    status: NamespaceStatus::Active,
                    pods: vec![],
                },
            ],
        },
    ]
}
