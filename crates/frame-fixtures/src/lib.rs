//! Frame fixtures - node registry and frame synthesis.
//!
//! Builds the synthetic records the mock gateway serves: the fixed node
//! inventory, frame metadata whose timestamps agree with a single chain-clock
//! reading, and randomized fork-choice payloads.
//!
//! Non-deterministic inputs are trait seams so tests can pin them:
//! [`NodeSelector`] for the random node pick and [`ForkChoiceSource`] for the
//! payload generator. The wall clock is injected the same way through
//! [`chain_clock::ChainClock`].

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod error;
pub mod forkchoice;
pub mod frames;
pub mod nodes;
pub mod types;

pub use error::FixtureError;
pub use forkchoice::{ForkChoiceDump, ForkChoiceSource, RandomForkChoice, StaticForkChoice};
pub use frames::{Frame, FrameId, FrameListing, FrameMetadata, FrameSynthesizer, FIXTURE_FRAME_ID};
pub use nodes::{NodeListing, NodeRegistry, NodeSelector, PinnedSelector, UniformSelector};
pub use types::Pagination;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
