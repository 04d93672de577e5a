//! Gateway configuration with validation.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Base path missing its leading or trailing slash
    #[error("invalid base_path: {0}")]
    InvalidBasePath(String),

    /// Network name was empty
    #[error("network_name cannot be empty")]
    EmptyNetworkName,
}

/// Main gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Socket address the server binds
    pub listen_addr: SocketAddr,
    /// Base URL prefix the API mounts under; must start and end with `/`
    pub base_path: String,
    /// Network name reported by the spec query
    pub network_name: String,
    /// Whether to attach a permissive CORS layer
    pub cors_enabled: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080),
            base_path: "/".to_string(),
            network_name: "goerli".to_string(),
            cors_enabled: true,
        }
    }
}

impl GatewayConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_path.starts_with('/') {
            return Err(ConfigError::InvalidBasePath(
                "must start with '/'".to_string(),
            ));
        }

        if !self.base_path.ends_with('/') {
            return Err(ConfigError::InvalidBasePath(
                "must end with '/'".to_string(),
            ));
        }

        if self.network_name.is_empty() {
            return Err(ConfigError::EmptyNetworkName);
        }

        Ok(())
    }

    /// Mount point of the versioned API: `{base_path}api/v1`.
    pub fn api_prefix(&self) -> String {
        format!("{}api/v1", self.base_path)
    }
}
