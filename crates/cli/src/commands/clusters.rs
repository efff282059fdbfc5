//! Cluster and namespace listing commands

use anyhow::Result;
use serde_json::json;
use tabled::Tabled;

use crate::client::{ClusterSummary, NamespaceSummary, ToolClient};
use crate::output::{color_status, print_warning, OutputFormat};

/// Row for the cluster listing table
#[derive(Tabled)]
struct ClusterRow {
    #[tabled(rename = "Cluster")]
    cluster_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Region")]
    region: String,
    #[tabled(rename = "Project")]
    project_id: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Row for the namespace listing table
#[derive(Tabled)]
struct NamespaceRow {
    #[tabled(rename = "Namespace")]
    namespace: String,
    #[tabled(rename = "Cluster")]
    cluster_id: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// List all clusters visible for a region and project
pub async fn list_clusters(
    client: &ToolClient,
    region: &str,
    project_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let clusters: Vec<ClusterSummary> = client
        .call_tool(
            "get_clusters_by_region_and_project_id",
            json!({ "region": region, "project_id": project_id }),
        )
        .await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&clusters)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if clusters.is_empty() {
                print_warning("No clusters found");
                return Ok(());
            }

            let rows: Vec<ClusterRow> = clusters
                .iter()
                .map(|c| ClusterRow {
                    cluster_id: c.cluster_id.clone(),
                    name: c.name.clone(),
                    region: c.region.clone(),
                    project_id: c.project_id.clone(),
                    status: color_status(&c.status),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} clusters", clusters.len());
        }
    }

    Ok(())
}

/// List the namespaces of a cluster
pub async fn list_namespaces(
    client: &ToolClient,
    region: &str,
    cluster_id: &str,
    format: OutputFormat,
) -> Result<()> {
    let namespaces: Vec<NamespaceSummary> = client
        .call_tool(
            "get_namespaces",
            json!({ "region": region, "cluster_id": cluster_id }),
        )
        .await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&namespaces)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            if namespaces.is_empty() {
                print_warning(&format!("No namespaces found in {}", cluster_id));
                return Ok(());
            }

            let rows: Vec<NamespaceRow> = namespaces
                .iter()
                .map(|ns| NamespaceRow {
                    namespace: ns.namespace.clone(),
                    cluster_id: ns.cluster_id.clone(),
                    status: color_status(&ns.status),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
