//! Gateway service lifecycle.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::routes::create_router;
use crate::state::AppState;

/// The mock gateway server.
///
/// Binds the configured address, serves the router in a background task, and
/// drains in-flight requests on shutdown.
pub struct MockGateway {
    config: GatewayConfig,
    state: AppState,
    local_addr: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    server: Option<JoinHandle<Result<(), std::io::Error>>>,
}

impl MockGateway {
    /// Create a gateway over validated configuration.
    pub fn new(config: GatewayConfig, state: AppState) -> Result<Self, GatewayError> {
        config.validate()?;

        Ok(Self {
            config,
            state,
            local_addr: None,
            shutdown_tx: None,
            server: None,
        })
    }

    /// The router this gateway serves. Useful for driving requests in tests
    /// without binding a socket.
    pub fn router(&self) -> axum::Router {
        create_router(&self.config, self.state.clone())
    }

    /// Address the listener actually bound, once started.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Bind the listener and start serving in a background task.
    pub async fn start(&mut self) -> Result<(), GatewayError> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let listener = TcpListener::bind(self.config.listen_addr).await?;
        let addr = listener.local_addr()?;
        self.local_addr = Some(addr);

        info!(addr = %addr, prefix = %self.config.api_prefix(), "mock gateway listening");

        let router = self.router();
        self.server = Some(tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        }));

        Ok(())
    }

    /// Signal shutdown and wait for the server task to drain.
    pub async fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        if let Some(server) = self.server.take() {
            match server.await {
                Ok(Ok(())) => info!("mock gateway stopped"),
                Ok(Err(e)) => error!(error = %e, "mock gateway server error"),
                Err(e) => error!(error = %e, "mock gateway task failed"),
            }
        }
    }
}
