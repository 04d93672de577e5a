//! Chain specification errors.

use thiserror::Error;

/// Errors raised while constructing a [`crate::ChainSpec`].
///
/// These indicate misconfigured constants, so they are fatal at startup
/// rather than handled per request.
#[derive(Debug, Error)]
pub enum SpecError {
    /// `seconds_per_slot` was zero
    #[error("seconds_per_slot must be positive")]
    ZeroSecondsPerSlot,

    /// `slots_per_epoch` was zero
    #[error("slots_per_epoch must be positive")]
    ZeroSlotsPerEpoch,

    /// `genesis_time` string did not parse as an ISO-8601 instant
    #[error("invalid genesis_time: {0}")]
    InvalidGenesisTime(#[from] chrono::ParseError),
}
