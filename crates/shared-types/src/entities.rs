//! # Core Domain Entities
//!
//! Chain entities shared between the node and its subsystems.
//!
//! ## Clusters
//!
//! - **Chain**: `Block`, `BlockHeader`, `SignedTransaction`
//! - **Identity**: `Address`, `Hash`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use sha2::{Digest, Sha256};

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: THE CHAIN
// =============================================================================

/// A 32-byte hash (SHA-256).
pub type Hash = [u8; 32];

/// A 65-byte ECDSA signature (r, s, v).
pub type Signature = [u8; 65];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// The header of a block containing metadata and root hashes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BlockHeader {
    /// Protocol version for this block.
    pub version: u16,
    /// Block height in the chain.
    pub height: u64,
    /// Hash of the parent block (creates the chain linkage).
    pub parent_hash: Hash,
    /// Merkle root of all transactions in the block.
    pub merkle_root: Hash,
    /// Merkle root of the execution receipts of the block.
    pub receipts_root: Hash,
    /// Root hash of the state trie after applying this block.
    pub state_root: Hash,
    /// Unix timestamp when the block was proposed.
    pub timestamp: u64,
    /// The address that proposed this block.
    pub proposer: Address,
}

impl BlockHeader {
    /// Compute the block hash.
    ///
    /// The hash commits to every header field, so two headers that differ
    /// in any field never share a hash.
    pub fn hash(&self) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(self.version.to_le_bytes());
        hasher.update(self.height.to_le_bytes());
        hasher.update(self.parent_hash);
        hasher.update(self.merkle_root);
        hasher.update(self.receipts_root);
        hasher.update(self.state_root);
        hasher.update(self.timestamp.to_le_bytes());
        hasher.update(self.proposer);
        hasher.finalize().into()
    }
}

/// A finalized block as served by block storage.
///
/// Immutable once retrievable by height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    /// The block header.
    pub header: BlockHeader,
    /// Transactions in execution order.
    pub transactions: Vec<SignedTransaction>,
}

impl Block {
    /// Create a block from its header and body.
    pub fn new(header: BlockHeader, transactions: Vec<SignedTransaction>) -> Self {
        Self {
            header,
            transactions,
        }
    }

    /// Block height.
    pub fn height(&self) -> u64 {
        self.header.height
    }

    /// Hash of this block's header.
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Number of transactions in the block body.
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }
}

/// A signed transaction with all fields needed for execution.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    /// Sender address (20 bytes, derived from public key).
    pub from: Address,
    /// Recipient address (optional for contract creation).
    pub to: Option<Address>,
    /// Transaction value in base units.
    pub value: U256,
    /// Sender's nonce to prevent replay attacks.
    pub nonce: u64,
    /// Gas price in base units.
    pub gas_price: U256,
    /// Gas limit for this transaction.
    pub gas_limit: u64,
    /// Transaction payload (contract call data, etc.).
    pub data: Vec<u8>,
    /// ECDSA signature (r, s, v).
    #[serde_as(as = "Bytes")]
    pub signature: Signature,
}
