//! Chain clock - wall-clock to slot/epoch derivation.
//!
//! This crate owns the timing model of the simulated chain: the immutable
//! [`ChainSpec`] constants and the [`ChainClock`] that turns a wall-clock
//! instant into a [`ClockReading`] of `(slot, epoch)`.
//!
//! The clock source is a trait seam ([`WallClock`]) so callers can freeze
//! time in tests while production code reads the system clock.
//!
//! # Usage
//!
//! ```
//! use chain_clock::{ChainClock, ChainSpec};
//!
//! let spec = ChainSpec::goerli().unwrap();
//! let clock = ChainClock::system(spec);
//! let reading = clock.now();
//! assert_eq!(reading.epoch, reading.slot.div_euclid(32));
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod clock;
pub mod error;
pub mod spec;

pub use clock::{reading_at, ChainClock, ClockReading, FixedClock, SystemClock, WallClock};
pub use error::SpecError;
pub use spec::ChainSpec;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
