//! Frame synthesis.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use chain_clock::ChainClock;

use crate::error::FixtureError;
use crate::forkchoice::ForkChoiceSource;
use crate::nodes::{NodeRegistry, NodeSelector};
use crate::types::Pagination;

/// Fixed identifier of the single frame the list endpoint serves.
///
/// Not regenerated per call, so downstream fixtures stay deterministic.
pub const FIXTURE_FRAME_ID: &str = "bfe734bb-c986-4859-8b3e-44314ceca0b5";

/// Metadata of one fetched frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameMetadata {
    /// Frame identifier
    pub id: String,
    /// Node that provided the frame
    pub node: String,
    /// Instant the frame was fetched
    pub fetched_at: DateTime<Utc>,
    /// Wall-clock slot at fetch time
    pub wall_clock_slot: i64,
    /// Wall-clock epoch at fetch time
    pub wall_clock_epoch: i64,
    /// Labels attached to the frame (always empty in the simulator)
    pub labels: Vec<String>,
}

impl FrameMetadata {
    /// Reject metadata with missing identity fields.
    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.id.is_empty() {
            return Err(FixtureError::EmptyFrameId);
        }
        if self.node.is_empty() {
            return Err(FixtureError::EmptyNode);
        }

        Ok(())
    }
}

/// A fork-choice snapshot: opaque payload plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Fork-choice dump, inserted verbatim from the payload source
    pub data: Value,
    /// Frame metadata
    pub metadata: FrameMetadata,
}

/// Listing payload for frame metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameListing {
    /// Synthesized frame records
    pub frames: Vec<FrameMetadata>,
    /// Always `total == frames.len()`
    pub pagination: Pagination,
}

/// Frame identifier taken from a route parameter.
///
/// Routers that capture a repeated parameter hand over a sequence; only the
/// first element identifies the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameId {
    /// A single path token
    Single(String),
    /// A captured sequence of tokens
    Sequence(Vec<String>),
}

impl FrameId {
    /// Collapse to the identifying string.
    pub fn resolve(self) -> String {
        match self {
            FrameId::Single(id) => id,
            FrameId::Sequence(ids) => ids.into_iter().next().unwrap_or_default(),
        }
    }
}

impl From<String> for FrameId {
    fn from(id: String) -> Self {
        FrameId::Single(id)
    }
}

impl From<&str> for FrameId {
    fn from(id: &str) -> Self {
        FrameId::Single(id.to_string())
    }
}

impl From<Vec<String>> for FrameId {
    fn from(ids: Vec<String>) -> Self {
        FrameId::Sequence(ids)
    }
}

/// Builds frame records consistent with the chain clock.
///
/// Each synthesis call performs exactly one clock read; every derived field
/// (`fetched_at`, `wall_clock_slot`, `wall_clock_epoch`) is a snapshot of
/// that read. `fetched_at` is anchored to the start of the current slot, not
/// the literal instant, so fixtures reproduce across a slot.
#[derive(Clone)]
pub struct FrameSynthesizer {
    clock: ChainClock,
    registry: Arc<NodeRegistry>,
    selector: Arc<dyn NodeSelector>,
    forkchoice: Arc<dyn ForkChoiceSource>,
}

impl FrameSynthesizer {
    /// Create a synthesizer over the given clock, registry, and seams.
    pub fn new(
        clock: ChainClock,
        registry: Arc<NodeRegistry>,
        selector: Arc<dyn NodeSelector>,
        forkchoice: Arc<dyn ForkChoiceSource>,
    ) -> Self {
        Self {
            clock,
            registry,
            selector,
            forkchoice,
        }
    }

    /// The registry backing this synthesizer.
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    fn metadata_at_now(&self, id: String, node: String) -> FrameMetadata {
        let reading = self.clock.now();

        FrameMetadata {
            id,
            node,
            fetched_at: self.clock.slot_start(reading.slot),
            wall_clock_slot: reading.slot,
            wall_clock_epoch: reading.epoch,
            labels: Vec::new(),
        }
    }

    /// Synthesize the one-entry frame listing.
    ///
    /// The id is the fixed [`FIXTURE_FRAME_ID`]; the node is chosen through
    /// the selection strategy.
    pub fn frame_list(&self) -> FrameListing {
        let node = self.registry.pick(self.selector.as_ref()).to_string();
        let metadata = self.metadata_at_now(FIXTURE_FRAME_ID.to_string(), node);

        debug!(
            slot = metadata.wall_clock_slot,
            node = %metadata.node,
            "synthesized frame listing"
        );

        FrameListing {
            frames: vec![metadata],
            pagination: Pagination { total: 1 },
        }
    }

    /// Synthesize a single frame for an externally supplied id.
    ///
    /// The id lands in the metadata verbatim; the node is the registry's
    /// pinned entry; the payload comes from the fork-choice source.
    pub fn frame(&self, id: impl Into<FrameId>) -> Frame {
        let id = id.into().resolve();
        let metadata = self.metadata_at_now(id, self.registry.pinned().to_string());

        debug!(id = %metadata.id, slot = metadata.wall_clock_slot, "synthesized frame");

        Frame {
            data: self.forkchoice.generate(),
            metadata,
        }
    }
}
