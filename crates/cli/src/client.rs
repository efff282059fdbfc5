//! HTTP client for the inventory tool server

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use url::Url;

/// Client for the tool server's discovery and invocation endpoints
pub struct ToolClient {
    client: Client,
    base_url: Url,
}

impl ToolClient {
    /// Create a new tool client
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid server URL")?;

        Ok(Self { client, base_url })
    }

    /// List the tools registered on the server
    pub async fn list_tools(&self) -> Result<Vec<ToolInfo>> {
        let url = self.base_url.join("tools").context("Invalid path")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Server error ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse tool list")
    }

    /// Invoke a named tool with keyword arguments
    pub async fn call_tool<T: DeserializeOwned>(&self, name: &str, arguments: Value) -> Result<T> {
        let url = self.base_url.join("tools/call").context("Invalid path")?;

        let response = self
            .client
            .post(url)
            .json(&ToolCallRequest { name, arguments })
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Tool call failed ({}): {}", status, body);
        }

        response.json().await.context("Failed to parse tool result")
    }
}

#[derive(Debug, Serialize)]
struct ToolCallRequest<'a> {
    name: &'a str,
    arguments: Value,
}

// Tool server response types

/// One registered tool as reported by the discovery endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub description: String,
    pub parameters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: String,
    pub region: String,
    pub project_id: String,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceSummary {
    pub namespace: String,
    pub cluster_id: String,
    pub region: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodRecord {
    pub pod_name: String,
    pub status: String,
    pub container_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<String>,
    pub namespace: String,
    pub cluster_id: String,
    pub region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodLogsRecord {
    pub pod_name: String,
    pub namespace: String,
    pub cluster_id: String,
    pub logs: String,
}

/// Log lookups answer either a record or a not-found value; the caller
/// branches on which one came back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PodLogsResult {
    Logs(PodLogsRecord),
    NotFound { error: String },
}
