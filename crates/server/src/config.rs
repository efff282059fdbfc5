//! Server configuration

use anyhow::Result;
use serde::Deserialize;

/// Tool server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Port for the tool-call and health endpoints
    #[serde(default = "default_api_port")]
    pub api_port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    8080
}

impl ServerConfig {
    /// Load configuration from INVENTORY_-prefixed environment variables
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("INVENTORY"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| ServerConfig {
            bind_addr: default_bind_addr(),
            api_port: default_api_port(),
        }))
    }
}
