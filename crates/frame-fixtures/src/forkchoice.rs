//! Fork-choice payload generation.
//!
//! The gateway treats the payload as opaque: whatever the source returns is
//! inserted verbatim into `Frame.data`. The default source produces a
//! randomized but structurally valid beacon-API-style dump (checkpoints plus
//! a parent-linked node list, integers as decimal strings).

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source of fork-choice graph payloads.
pub trait ForkChoiceSource: Send + Sync {
    /// Produce one payload. Inserted verbatim into `Frame.data`.
    fn generate(&self) -> Value;
}

/// An epoch/root checkpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub epoch: String,
    pub root: String,
}

/// One block in the fork-choice graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkChoiceNode {
    pub slot: String,
    pub block_root: String,
    pub parent_root: String,
    pub justified_epoch: String,
    pub finalized_epoch: String,
    pub weight: String,
    pub validity: String,
    pub execution_block_hash: String,
}

/// A full fork-choice dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkChoiceDump {
    pub justified_checkpoint: Checkpoint,
    pub finalized_checkpoint: Checkpoint,
    pub fork_choice_nodes: Vec<ForkChoiceNode>,
}

/// Randomized generator.
///
/// Builds a linear parent-linked chain of `chain_len` nodes with one forked
/// child off the penultimate block, mimicking the competing-head view a live
/// client reports.
#[derive(Debug, Clone, Copy)]
pub struct RandomForkChoice {
    /// Nodes in the main chain of each generated dump
    pub chain_len: usize,
}

impl Default for RandomForkChoice {
    fn default() -> Self {
        Self { chain_len: 8 }
    }
}

fn random_root<R: Rng>(rng: &mut R) -> String {
    format!("0x{:032x}{:032x}", rng.gen::<u128>(), rng.gen::<u128>())
}

impl ForkChoiceSource for RandomForkChoice {
    fn generate(&self) -> Value {
        let mut rng = rand::thread_rng();

        let head_slot: u64 = rng.gen_range(1_000..100_000);
        let base_slot = head_slot.saturating_sub(self.chain_len as u64);
        let finalized_epoch = base_slot / 32;
        let justified_epoch = finalized_epoch + 1;

        let mut nodes = Vec::with_capacity(self.chain_len + 1);
        let mut parent_root = random_root(&mut rng);

        for i in 0..self.chain_len as u64 {
            let block_root = random_root(&mut rng);
            nodes.push(ForkChoiceNode {
                slot: (base_slot + i).to_string(),
                block_root: block_root.clone(),
                parent_root: parent_root.clone(),
                justified_epoch: justified_epoch.to_string(),
                finalized_epoch: finalized_epoch.to_string(),
                weight: rng.gen_range(1_u64..1_000_000).to_string(),
                validity: "VALID".to_string(),
                execution_block_hash: random_root(&mut rng),
            });
            parent_root = block_root;
        }

        // Competing head: a second child of the penultimate block.
        if self.chain_len >= 2 {
            let fork_parent = nodes[self.chain_len - 2].block_root.clone();
            nodes.push(ForkChoiceNode {
                slot: (base_slot + self.chain_len as u64 - 1).to_string(),
                block_root: random_root(&mut rng),
                parent_root: fork_parent,
                justified_epoch: justified_epoch.to_string(),
                finalized_epoch: finalized_epoch.to_string(),
                weight: rng.gen_range(1_u64..1_000_000).to_string(),
                validity: "VALID".to_string(),
                execution_block_hash: random_root(&mut rng),
            });
        }

        let dump = ForkChoiceDump {
            justified_checkpoint: Checkpoint {
                epoch: justified_epoch.to_string(),
                root: random_root(&mut rng),
            },
            finalized_checkpoint: Checkpoint {
                epoch: finalized_epoch.to_string(),
                root: random_root(&mut rng),
            },
            fork_choice_nodes: nodes,
        };

        serde_json::to_value(dump).unwrap_or_default()
    }
}

/// Canned payload, returned verbatim on every call. For tests.
#[derive(Debug, Clone)]
pub struct StaticForkChoice(pub Value);

impl ForkChoiceSource for StaticForkChoice {
    fn generate(&self) -> Value {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_dump_is_structurally_valid() {
        let value = RandomForkChoice::default().generate();
        let dump: ForkChoiceDump = serde_json::from_value(value).unwrap();

        assert!(!dump.fork_choice_nodes.is_empty());
        assert!(!dump.justified_checkpoint.root.is_empty());
        assert!(!dump.finalized_checkpoint.root.is_empty());
    }

    #[test]
    fn test_random_dump_chain_is_parent_linked() {
        let source = RandomForkChoice { chain_len: 8 };
        let dump: ForkChoiceDump = serde_json::from_value(source.generate()).unwrap();

        for pair in dump.fork_choice_nodes[..source.chain_len].windows(2) {
            assert_eq!(pair[1].parent_root, pair[0].block_root);
        }
    }

    #[test]
    fn test_random_dump_has_competing_head() {
        let source = RandomForkChoice { chain_len: 8 };
        let dump: ForkChoiceDump = serde_json::from_value(source.generate()).unwrap();

        assert_eq!(dump.fork_choice_nodes.len(), source.chain_len + 1);
        let fork = &dump.fork_choice_nodes[source.chain_len];
        let penultimate = &dump.fork_choice_nodes[source.chain_len - 2];
        assert_eq!(fork.parent_root, penultimate.block_root);
    }

    #[test]
    fn test_roots_are_32_byte_hex() {
        let dump: ForkChoiceDump =
            serde_json::from_value(RandomForkChoice::default().generate()).unwrap();
        for node in &dump.fork_choice_nodes {
            assert_eq!(node.block_root.len(), 2 + 64);
            assert!(node.block_root.starts_with("0x"));
        }
    }

    #[test]
    fn test_static_source_returns_payload_verbatim() {
        let payload = serde_json::json!({ "fork_choice_nodes": [] });
        let source = StaticForkChoice(payload.clone());
        assert_eq!(source.generate(), payload);
        assert_eq!(source.generate(), payload);
    }
}
