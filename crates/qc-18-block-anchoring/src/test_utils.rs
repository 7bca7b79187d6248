//! Test utilities for block anchoring.
//!
//! Block fixtures with a chosen height and transaction count.
//! Enable with the `test-utils` feature flag.

use crate::adapters::InMemoryBlockProvider;
use shared_types::{Block, BlockHeader, SignedTransaction, U256};

/// Build a transaction whose contents only depend on `nonce`.
pub fn make_test_tx(nonce: u64) -> SignedTransaction {
    SignedTransaction {
        from: [0xAA; 20],
        to: Some([0xBB; 20]),
        value: U256::from(1_000u64),
        nonce,
        gas_price: U256::from(1u64),
        gas_limit: 21_000,
        data: vec![],
        signature: [0u8; 65],
    }
}

/// Build a block at `height` carrying `tx_count` transactions.
///
/// Header roots are derived from the height so distinct blocks hash
/// differently.
pub fn make_test_block(height: u64, tx_count: usize) -> Block {
    let tag = (height % 251) as u8;
    let header = BlockHeader {
        version: 1,
        height,
        parent_hash: [tag.wrapping_sub(1); 32],
        merkle_root: [tag; 32],
        receipts_root: [tag.wrapping_add(1); 32],
        state_root: [tag.wrapping_add(2); 32],
        timestamp: 1_700_000_000 + height,
        proposer: [0xCC; 20],
    };
    let transactions = (0..tx_count as u64).map(make_test_tx).collect();
    Block::new(header, transactions)
}

/// Build a provider holding heights `0..tx_counts.len()`, where block `h`
/// carries `tx_counts[h]` transactions.
pub fn make_test_chain(tx_counts: &[usize]) -> InMemoryBlockProvider {
    let provider = InMemoryBlockProvider::new();
    for (height, &count) in tx_counts.iter().enumerate() {
        provider.insert(make_test_block(height as u64, count));
    }
    provider
}
