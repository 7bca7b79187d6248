//! # In-Memory Anchor Store
//!
//! Volatile last-anchored watermark.

use crate::ports::AnchorStore;
use std::sync::atomic::{AtomicU64, Ordering};

/// Watermark held in an atomic; starts at 0.
#[derive(Debug, Default)]
pub struct InMemoryAnchorStore {
    last_anchored: AtomicU64,
}

impl InMemoryAnchorStore {
    /// Create a store with the watermark at 0.
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnchorStore for InMemoryAnchorStore {
    fn read_last_anchored(&self) -> u64 {
        self.last_anchored.load(Ordering::Acquire)
    }

    fn write_last_anchored(&self, height: u64) {
        self.last_anchored.store(height, Ordering::Release);
    }
}
