//! # beaconsim Test Suite
//!
//! Unified test crate for cross-crate flows: boots the real gateway on an
//! ephemeral port and drives it over HTTP the way the frontend would.
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p beaconsim-tests
//!
//! # By category
//! cargo test -p beaconsim-tests integration::
//! ```

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod integration;
