//! Mock gateway - HTTP surface of the beacon metadata simulator.
//!
//! Serves the five routes a fork-choice monitoring frontend calls on its
//! metadata service, answering each from the chain clock and fixture
//! synthesizer instead of a live backend:
//!
//! | Method | Path | Payload |
//! |--------|------|---------|
//! | GET  | `{base}api/v1/ethereum/now`   | current slot/epoch |
//! | GET  | `{base}api/v1/ethereum/spec`  | network name + chain spec |
//! | POST | `{base}api/v1/metadata/nodes` | fixed node inventory |
//! | POST | `{base}api/v1/metadata`       | one-entry frame listing |
//! | GET  | `{base}api/v1/frames/:id`     | frame with fork-choice payload |
//!
//! Every success body is the `{ "data": ... }` envelope. Handlers share
//! immutable state only, so concurrent requests need no locking.
//!
//! # Usage
//!
//! ```ignore
//! use mock_gateway::{AppState, GatewayConfig, MockGateway};
//!
//! let mut gateway = MockGateway::new(GatewayConfig::default(), AppState::goerli()?)?;
//! gateway.start().await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod service;
pub mod state;

pub use api::{FrameResponse, SpecResponse};
pub use config::{ConfigError, GatewayConfig};
pub use envelope::Envelope;
pub use error::GatewayError;
pub use routes::create_router;
pub use service::MockGateway;
pub use state::AppState;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
