//! beaconsim - mock backend for a fork-choice monitoring frontend.
//!
//! Serves the metadata API a live consensus-client collector would expose,
//! answering every call with synthetic, time-consistent fixtures. Intended
//! for frontend development and testing without a real backend.
//!
//! ## Configuration (environment)
//!
//! - `SIM_LISTEN_ADDR` - socket address to bind (default `127.0.0.1:8080`)
//! - `SIM_BASE_URL` - base URL prefix the API mounts under (default `/`)
//! - `SIM_NETWORK` - network name reported by the spec query (default `goerli`)
//! - `RUST_LOG` - tracing filter (default `info`)

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mock_gateway::{AppState, GatewayConfig, MockGateway};

fn load_config() -> GatewayConfig {
    let mut config = GatewayConfig::default();

    // Override listen address from environment
    if let Ok(addr) = std::env::var("SIM_LISTEN_ADDR") {
        match addr.parse() {
            Ok(parsed) => config.listen_addr = parsed,
            Err(_) => warn!("SIM_LISTEN_ADDR must be a socket address like 127.0.0.1:8080"),
        }
    }

    // Override base URL prefix from environment
    if let Ok(base) = std::env::var("SIM_BASE_URL") {
        config.base_path = base;
    }

    if let Ok(network) = std::env::var("SIM_NETWORK") {
        config.network_name = network;
    }

    config
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = load_config();

    let mut state = AppState::goerli()?;
    state.network_name = config.network_name.clone();

    let mut gateway = MockGateway::new(config, state)?;
    gateway.start().await?;

    info!("Simulator is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    // Graceful shutdown
    gateway.shutdown().await;

    Ok(())
}
