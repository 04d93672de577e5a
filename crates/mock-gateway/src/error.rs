//! Gateway errors.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from gateway construction and serving.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Misconfigured chain spec constants
    #[error("chain spec error: {0}")]
    Spec(#[from] chain_clock::SpecError),

    /// Listener bind or serve failure
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
