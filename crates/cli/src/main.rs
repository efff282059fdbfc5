//! CCE Inventory CLI
//!
//! A command-line client for the mock inventory tool server: discovers the
//! server's registered tools and invokes them.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{clusters, pods, tools};

/// CCE Inventory CLI
#[derive(Parser)]
#[command(name = "ccei")]
#[command(author, version, about = "CLI client for the mock CCE inventory tool server", long_about = None)]
pub struct Cli {
    /// Tool server URL (can also be set via CCEI_SERVER_URL env var)
    #[arg(long, env = "CCEI_SERVER_URL", default_value = "http://localhost:8080")]
    pub server_url: String,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the tools registered on the server
    Tools,

    /// List clusters visible in a region and project
    Clusters {
        /// Region to query (echoed into the results)
        #[arg(long, short, default_value = "eu-west-101")]
        region: String,

        /// Project id to query (echoed into the results)
        #[arg(long, short, default_value = "default-project")]
        project_id: String,
    },

    /// List namespaces in a cluster
    Namespaces {
        /// Cluster id, e.g. cluster-1
        cluster_id: String,

        /// Region to query
        #[arg(long, short, default_value = "eu-west-101")]
        region: String,
    },

    /// List pods in a namespace
    Pods {
        /// Cluster id, e.g. cluster-1
        cluster_id: String,

        /// Namespace name, e.g. ns-a
        namespace: String,

        /// Region to query
        #[arg(long, short, default_value = "eu-west-101")]
        region: String,
    },

    /// Fetch logs for a pod
    Logs {
        /// Cluster id, e.g. cluster-2
        cluster_id: String,

        /// Namespace name, e.g. ns-x
        namespace: String,

        /// Pod name, e.g. pod-x1
        pod_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize client
    let client = client::ToolClient::new(&cli.server_url)?;

    // Execute command
    match cli.command {
        Commands::Tools => {
            tools::list_tools(&client, cli.format).await?;
        }
        Commands::Clusters { region, project_id } => {
            clusters::list_clusters(&client, &region, &project_id, cli.format).await?;
        }
        Commands::Namespaces { cluster_id, region } => {
            clusters::list_namespaces(&client, &region, &cluster_id, cli.format).await?;
        }
        Commands::Pods {
            cluster_id,
            namespace,
            region,
        } => {
            pods::list_pods(&client, &region, &cluster_id, &namespace, cli.format).await?;
        }
        Commands::Logs {
            cluster_id,
            namespace,
            pod_name,
        } => {
            pods::show_logs(&client, &cluster_id, &namespace, &pod_name, cli.format).await?;
        }
    }

    Ok(())
}
