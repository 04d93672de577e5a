//! Uniform response envelope.

use serde::{Deserialize, Serialize};

/// Wrapper every success response is serialized through: `{ "data": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The wrapped payload
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap a payload.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
