//! Route handlers.
//!
//! Each handler is stateless beyond the shared immutable [`AppState`] and a
//! wall-clock read; every response is wrapped in [`Envelope`].

use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use chain_clock::ClockReading;
use frame_fixtures::{FrameListing, NodeListing};

use crate::api::{FrameResponse, SpecResponse};
use crate::envelope::Envelope;
use crate::state::AppState;

/// `GET /ethereum/now` - the current slot/epoch reading.
pub async fn ethereum_now(State(state): State<AppState>) -> Json<Envelope<ClockReading>> {
    Json(Envelope::new(state.clock.now()))
}

/// `GET /ethereum/spec` - network name plus chain timing constants.
pub async fn ethereum_spec(State(state): State<AppState>) -> Json<Envelope<SpecResponse>> {
    Json(Envelope::new(SpecResponse {
        network_name: state.network_name.clone(),
        spec: state.clock.spec().clone(),
    }))
}

/// `POST /metadata/nodes` - the fixed node inventory.
pub async fn metadata_nodes(State(state): State<AppState>) -> Json<Envelope<NodeListing>> {
    Json(Envelope::new(state.synthesizer.registry().list()))
}

/// `POST /metadata` - the one-entry frame listing.
///
/// The request body is accepted but never read: filter criteria are not
/// applied, the listing always holds the single fixture frame.
pub async fn metadata_list(State(state): State<AppState>) -> Json<Envelope<FrameListing>> {
    Json(Envelope::new(state.synthesizer.frame_list()))
}

/// `GET /frames/:id` - a single frame with its fork-choice payload.
pub async fn get_frame(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Envelope<FrameResponse>> {
    debug!(id = %id, "frame lookup");

    Json(Envelope::new(FrameResponse {
        frame: state.synthesizer.frame(id),
    }))
}
