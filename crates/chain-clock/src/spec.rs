//! Chain specification constants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Timing parameters of the simulated chain.
///
/// Immutable for the process lifetime; every component reads the same
/// validated value. Construct through [`ChainSpec::new`] or
/// [`ChainSpec::with_genesis_str`] so zero durations are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSpec {
    /// Seconds each slot lasts
    pub seconds_per_slot: u64,
    /// Number of consecutive slots grouped into one epoch
    pub slots_per_epoch: u64,
    /// Absolute instant at which slot 0 begins
    pub genesis_time: DateTime<Utc>,
}

impl ChainSpec {
    /// Create a validated spec.
    pub fn new(
        seconds_per_slot: u64,
        slots_per_epoch: u64,
        genesis_time: DateTime<Utc>,
    ) -> Result<Self, SpecError> {
        if seconds_per_slot == 0 {
            return Err(SpecError::ZeroSecondsPerSlot);
        }
        if slots_per_epoch == 0 {
            return Err(SpecError::ZeroSlotsPerEpoch);
        }

        Ok(Self {
            seconds_per_slot,
            slots_per_epoch,
            genesis_time,
        })
    }

    /// Create a spec from an ISO-8601 genesis string.
    ///
    /// A malformed constant surfaces here as [`SpecError::InvalidGenesisTime`]
    /// instead of failing inside a request handler.
    pub fn with_genesis_str(
        seconds_per_slot: u64,
        slots_per_epoch: u64,
        genesis_time: &str,
    ) -> Result<Self, SpecError> {
        let genesis = DateTime::parse_from_rfc3339(genesis_time)?.with_timezone(&Utc);
        Self::new(seconds_per_slot, slots_per_epoch, genesis)
    }

    /// The goerli fixture the simulator ships with: 12s slots, 32 slots per
    /// epoch, genesis at 2021-03-23T14:00:00Z.
    pub fn goerli() -> Result<Self, SpecError> {
        Self::with_genesis_str(12, 32, "2021-03-23T14:00:00Z")
    }

    /// Duration of one slot in milliseconds.
    pub fn slot_duration_ms(&self) -> i64 {
        self.seconds_per_slot as i64 * 1000
    }
}
