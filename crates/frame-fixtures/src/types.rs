//! Shared listing types.

use serde::{Deserialize, Serialize};

/// Pagination block attached to every listing payload.
///
/// The simulator serves fixed-size sets, so `total` always equals the length
/// of the accompanying collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Total number of entries in the collection
    pub total: usize,
}
