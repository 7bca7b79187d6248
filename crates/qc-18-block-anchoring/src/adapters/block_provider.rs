//! # In-Memory Block Provider
//!
//! Height-indexed block map for tests and single-process deployments.

use crate::ports::BlockProvider;
use parking_lot::RwLock;
use shared_types::Block;
use std::collections::HashMap;

/// In-memory block storage keyed by height.
#[derive(Default)]
pub struct InMemoryBlockProvider {
    blocks: RwLock<HashMap<u64, Block>>,
}

impl InMemoryBlockProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `block`, replacing any block at the same height.
    pub fn insert(&self, block: Block) {
        self.blocks.write().insert(block.height(), block);
    }

    /// Drop the block at `height`.
    pub fn remove(&self, height: u64) -> Option<Block> {
        self.blocks.write().remove(&height)
    }

    /// Number of stored blocks.
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    /// True if no blocks are stored.
    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }
}

impl BlockProvider for InMemoryBlockProvider {
    fn get_block_by_number(&self, height: u64) -> Option<Block> {
        self.blocks.read().get(&height).cloned()
    }
}
