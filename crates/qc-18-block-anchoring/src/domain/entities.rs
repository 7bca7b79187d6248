//! # Domain Entities
//!
//! Window summaries, wire payloads and anchoring outcomes.
//!
//! Every value here is created for a single anchoring attempt and dropped
//! afterwards; nothing is shared across attempts.

use super::errors::AnchorError;
use super::hex_bytes;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Block, Hash};

/// Success sentinel of the anchoring service response contract.
pub const CODE_OK: i64 = 0;

/// Summary counters for the trailing window ending at `height`.
///
/// Header fields are copied verbatim from the anchored block. Field names
/// on the wire match the anchoring service schema.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    /// Hash of the anchored block.
    #[serde(with = "hex_bytes")]
    pub block_hash: Hash,
    /// Transactions root of the anchored block.
    #[serde(rename = "txHash", with = "hex_bytes")]
    pub tx_root_hash: Hash,
    /// Parent hash of the anchored block.
    #[serde(with = "hex_bytes")]
    pub parent_hash: Hash,
    /// Receipts root of the anchored block.
    #[serde(rename = "receiptHash", with = "hex_bytes")]
    pub receipt_root_hash: Hash,
    /// State root of the anchored block.
    #[serde(with = "hex_bytes")]
    pub state_root_hash: Hash,
    /// Height of the anchored block.
    #[serde(rename = "blockNumber")]
    pub height: u64,
    /// Number of blocks in the window, anchored block included.
    pub block_count: u64,
    /// Sum of transaction counts over the window.
    pub tx_count: u64,
}

impl WindowSummary {
    /// Copy the header fields of `block` and attach the window counters.
    pub fn from_block(block: &Block, block_count: u64, tx_count: u64) -> Self {
        let header = &block.header;
        Self {
            block_hash: block.hash(),
            tx_root_hash: header.merkle_root,
            parent_hash: header.parent_hash,
            receipt_root_hash: header.receipts_root,
            state_root_hash: header.state_root,
            height: header.height,
            block_count,
            tx_count,
        }
    }
}

/// Wire payload: the window summary plus the service deduplication key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    /// Decimal rendering of the anchored height.
    pub id: String,
    /// Summary fields, flattened next to `id`.
    #[serde(flatten)]
    pub summary: WindowSummary,
}

/// Request envelope sent to the anchoring service.
#[derive(Clone, Debug, Serialize)]
pub struct AnchorRequest<'a> {
    /// Operator account registered with the anchoring service.
    #[serde(with = "hex_bytes")]
    pub operator: Address,
    /// Anchored payload. Capitalised on the wire.
    #[serde(rename = "Payload")]
    pub payload: &'a Payload,
}

/// Decoded anchoring service response.
///
/// Missing fields decode to their zero value. Capitalised field names are
/// accepted as well.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceResponse {
    /// Status code; [`CODE_OK`] is the only success value.
    #[serde(alias = "Code")]
    pub code: i64,
    /// Opaque service result.
    #[serde(alias = "Result")]
    pub result: serde_json::Value,
}

impl ServiceResponse {
    /// Decode the first JSON value in `body`; anything after it is ignored.
    pub fn decode_first(body: &[u8]) -> Result<Self, String> {
        match serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
        {
            Some(decoded) => decoded.map_err(|e| e.to_string()),
            None => Err("empty response body".to_string()),
        }
    }

    /// Whether the service accepted the anchor.
    pub fn is_success(&self) -> bool {
        self.code == CODE_OK
    }
}

/// Why a block was not anchored by the periodic entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Anchoring is disabled in configuration.
    Disabled,
    /// No block was handed in.
    MissingBlock,
    /// Height is not a multiple of the anchoring period.
    OffPeriod,
    /// The configured period is zero.
    InvalidPeriod,
}

/// Result of one call to the periodic entry point.
#[derive(Clone, Debug, PartialEq)]
pub enum AnchorOutcome {
    /// Anchoring was intentionally not attempted.
    Skipped(SkipReason),
    /// The service accepted the anchor.
    Anchored {
        /// Anchored height.
        height: u64,
    },
    /// The attempt failed; the failure was logged and swallowed.
    Failed {
        /// Height that failed to anchor.
        height: u64,
        /// Failure detail.
        error: AnchorError,
    },
}

impl AnchorOutcome {
    /// True only for [`AnchorOutcome::Anchored`].
    pub fn is_anchored(&self) -> bool {
        matches!(self, Self::Anchored { .. })
    }
}
