//! Fixture errors.

use thiserror::Error;

/// Errors from registry construction and frame validation.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Registry constructed with no nodes
    #[error("node registry must contain at least one node")]
    EmptyRegistry,

    /// Frame metadata carried an empty id
    #[error("invalid frame id")]
    EmptyFrameId,

    /// Frame metadata carried an empty node name
    #[error("invalid node")]
    EmptyNode,
}
