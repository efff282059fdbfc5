//! Pod listing and log retrieval commands

use anyhow::Result;
use serde_json::json;
use tabled::Tabled;

use crate::client::{PodLogsResult, PodRecord, ToolClient};
use crate::output::{color_status, print_error, print_warning, OutputFormat};

/// Row for the pod listing table
#[derive(Tabled)]
struct PodRow {
    #[tabled(rename = "Pod")]
    pod_name: String,
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Cluster")]
    cluster_id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Container")]
    container_status: String,
}

/// List the pods of a namespace
pub async fn list_pods(
    client: &ToolClient,
    region: &str,
    cluster_id: &str,
    namespace: &str,
    format: OutputFormat,
) -> Result<()> {
    let pods: Vec<PodRecord> = client
        .call_tool(
            "get_pods_by_namespace",
            json!({ "region": region, "cluster_id": cluster_id, "namespace": namespace }),
        )
        .await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&pods)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            // An empty namespace and an unknown one both land here; the
            // server does not distinguish them.
            if pods.is_empty() {
                print_warning(&format!("No pods found in {}/{}", cluster_id, namespace));
                return Ok(());
            }

            let rows: Vec<PodRow> = pods
                .iter()
                .map(|p| PodRow {
                    pod_name: p.pod_name.clone(),
                    namespace: p.namespace.clone(),
                    cluster_id: p.cluster_id.clone(),
                    status: color_status(&p.status),
                    container_status: color_status(&p.container_status),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} pods", pods.len());
        }
    }

    Ok(())
}

/// Fetch and print the logs of a single pod
pub async fn show_logs(
    client: &ToolClient,
    cluster_id: &str,
    namespace: &str,
    pod_name: &str,
    format: OutputFormat,
) -> Result<()> {
    let result: PodLogsResult = client
        .call_tool(
            "get_pod_logs_by_pod_name_and_namespace_name",
            json!({ "cluster_id": cluster_id, "namespace": namespace, "pod_name": pod_name }),
        )
        .await?;

    match result {
        PodLogsResult::Logs(record) => match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&record)?;
                println!("{}", json);
            }
            OutputFormat::Table => {
                println!(
                    "Logs for {}/{}/{}:",
                    record.cluster_id, record.namespace, record.pod_name
                );
                println!("{}", record.logs);
            }
        },
        PodLogsResult::NotFound { error } => {
            print_error(&format!(
                "{} ({}/{}/{})",
                error, cluster_id, namespace, pod_name
            ));
        }
    }

    Ok(())
}
