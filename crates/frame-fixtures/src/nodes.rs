//! Fixed node registry.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::FixtureError;
use crate::types::Pagination;

/// Strategy for choosing a node from an ordered set.
///
/// Implementations must return an index strictly less than `len`; the
/// registry guarantees `len > 0`.
pub trait NodeSelector: Send + Sync {
    /// Pick an index into a node set of `len` entries.
    fn pick_index(&self, len: usize) -> usize;
}

/// Uniform-random selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSelector;

impl NodeSelector for UniformSelector {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic selection of a fixed index, wrapped into range.
#[derive(Debug, Clone, Copy)]
pub struct PinnedSelector(pub usize);

impl NodeSelector for PinnedSelector {
    fn pick_index(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Listing payload for the node inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeListing {
    /// Node names, in registry order
    pub nodes: Vec<String>,
    /// Always `total == nodes.len()`
    pub pagination: Pagination,
}

/// The fixed set of simulated metadata-collector instances.
///
/// Static for the process lifetime; ordering is stable and significant (the
/// first entry is the pinned node for single-frame lookups).
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: Vec<String>,
}

impl NodeRegistry {
    /// Create a registry from an ordered, non-empty node set.
    pub fn new(nodes: Vec<String>) -> Result<Self, FixtureError> {
        if nodes.is_empty() {
            return Err(FixtureError::EmptyRegistry);
        }

        Ok(Self { nodes })
    }

    /// The three collector instances the simulator ships with.
    pub fn goerli() -> Self {
        Self {
            nodes: vec![
                "ams3-teku-001".to_string(),
                "syd1-lighthouse-001".to_string(),
                "syd1-prysm-001".to_string(),
            ],
        }
    }

    /// Node names in registry order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the registry holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The pinned node used for single-frame lookups: the first entry, so
    /// that endpoint's output stays stable across calls.
    pub fn pinned(&self) -> &str {
        &self.nodes[0]
    }

    /// Choose a node through the given selection strategy.
    pub fn pick(&self, selector: &dyn NodeSelector) -> &str {
        &self.nodes[selector.pick_index(self.nodes.len())]
    }

    /// Full listing with its pagination block.
    pub fn list(&self) -> NodeListing {
        NodeListing {
            nodes: self.nodes.clone(),
            pagination: Pagination {
                total: self.nodes.len(),
            },
        }
    }
}
