//! API payload types.
//!
//! Shapes that exist only on the wire; listing payloads come straight from
//! `frame-fixtures`.

use serde::{Deserialize, Serialize};

use chain_clock::ChainSpec;
use frame_fixtures::Frame;

/// Payload of the spec query: the network name beside its timing constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecResponse {
    /// Static network name, never derived from time
    pub network_name: String,
    /// The chain's timing constants
    pub spec: ChainSpec,
}

/// Payload of a single-frame lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameResponse {
    /// The synthesized frame
    pub frame: Frame,
}
