//! Route configuration for the mock metadata API.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::handlers;
use crate::state::AppState;

/// Create the full router, mounted under the configured base path.
pub fn create_router(config: &GatewayConfig, state: AppState) -> Router {
    Router::new()
        .nest(&config.api_prefix(), api_v1_routes())
        .layer(create_cors_layer(config.cors_enabled))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The five `/api/v1` routes.
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Chain clock
        .route("/ethereum/now", get(handlers::ethereum_now))
        .route("/ethereum/spec", get(handlers::ethereum_spec))
        // Metadata listings
        .route("/metadata/nodes", post(handlers::metadata_nodes))
        .route("/metadata", post(handlers::metadata_list))
        // Single frame lookup
        .route("/frames/:id", get(handlers::get_frame))
}

/// CORS layer for browser-hosted frontends.
fn create_cors_layer(enabled: bool) -> CorsLayer {
    if enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}
