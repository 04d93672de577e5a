//! Shared handler state.

use std::sync::Arc;

use chain_clock::{ChainClock, ChainSpec, SpecError};
use frame_fixtures::{FrameSynthesizer, NodeRegistry, RandomForkChoice, UniformSelector};

/// Immutable state shared across route handlers.
///
/// Everything here is constructed once at startup and only read afterwards,
/// so handlers can run concurrently without locks.
#[derive(Clone)]
pub struct AppState {
    /// Network name reported by the spec query
    pub network_name: String,
    /// Chain clock the handlers read
    pub clock: ChainClock,
    /// Frame synthesizer backing the metadata routes
    pub synthesizer: FrameSynthesizer,
}

impl AppState {
    /// Assemble state from explicit parts.
    pub fn new(
        network_name: impl Into<String>,
        clock: ChainClock,
        synthesizer: FrameSynthesizer,
    ) -> Self {
        Self {
            network_name: network_name.into(),
            clock,
            synthesizer,
        }
    }

    /// Production wiring: goerli constants, system clock, uniform-random
    /// node selection, randomized fork-choice payloads.
    pub fn goerli() -> Result<Self, SpecError> {
        let spec = ChainSpec::goerli()?;
        let clock = ChainClock::system(spec);
        let synthesizer = FrameSynthesizer::new(
            clock.clone(),
            Arc::new(NodeRegistry::goerli()),
            Arc::new(UniformSelector),
            Arc::new(RandomForkChoice::default()),
        );

        Ok(Self::new("goerli", clock, synthesizer))
    }
}
