//! Slot and epoch derivation from a wall-clock source.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::spec::ChainSpec;

/// Source of the current instant.
///
/// The derivation never caches a read, so substituting a frozen source makes
/// every downstream fixture deterministic.
pub trait WallClock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant.
///
/// Used by tests and anywhere a reproducible reading is needed.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl WallClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A `(slot, epoch)` pair derived from a single wall-clock read.
///
/// Instants before genesis produce negative values: both divisions are
/// Euclidean (`div_euclid`), flooring toward negative infinity rather than
/// truncating toward zero, so `slot` and `epoch` stay well-defined on either
/// side of genesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    /// Slots elapsed since genesis
    pub slot: i64,
    /// Epoch containing `slot`
    pub epoch: i64,
}

/// Derive the reading for an arbitrary instant against a spec.
///
/// Pure function: `slot = floor(elapsed_ms / slot_ms)`,
/// `epoch = floor(slot / slots_per_epoch)`.
pub fn reading_at(spec: &ChainSpec, at: DateTime<Utc>) -> ClockReading {
    let elapsed_ms = at.timestamp_millis() - spec.genesis_time.timestamp_millis();
    let slot = elapsed_ms.div_euclid(spec.slot_duration_ms());
    let epoch = slot.div_euclid(spec.slots_per_epoch as i64);

    trace!(slot, epoch, elapsed_ms, "derived clock reading");

    ClockReading { slot, epoch }
}

/// Chain clock binding a [`ChainSpec`] to a [`WallClock`] source.
#[derive(Clone)]
pub struct ChainClock {
    spec: ChainSpec,
    source: Arc<dyn WallClock>,
}

impl ChainClock {
    /// Create a clock with an explicit source.
    pub fn new(spec: ChainSpec, source: Arc<dyn WallClock>) -> Self {
        Self { spec, source }
    }

    /// Create a clock reading the system time.
    pub fn system(spec: ChainSpec) -> Self {
        Self::new(spec, Arc::new(SystemClock))
    }

    /// The spec this clock derives against.
    pub fn spec(&self) -> &ChainSpec {
        &self.spec
    }

    /// Reading for the current instant. Re-reads the source on every call.
    pub fn now(&self) -> ClockReading {
        reading_at(&self.spec, self.source.now())
    }

    /// Instant at which `slot` begins: `genesis + slot * seconds_per_slot`.
    pub fn slot_start(&self, slot: i64) -> DateTime<Utc> {
        self.spec.genesis_time + Duration::milliseconds(slot * self.spec.slot_duration_ms())
    }
}
