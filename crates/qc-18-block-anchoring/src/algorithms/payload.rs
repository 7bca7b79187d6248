//! # Payload Builder
//!
//! Wraps a window summary in the wire payload and encodes the request body.

use crate::domain::{AnchorError, AnchorRequest, AnchorResult, Payload, WindowSummary};
use shared_types::Address;

/// Attach the deduplication id (decimal height) to `summary`.
pub fn build_payload(summary: WindowSummary) -> Payload {
    Payload {
        id: summary.height.to_string(),
        summary,
    }
}

/// Encode the `{operator, Payload}` request body as JSON.
pub fn encode_request(operator: &Address, payload: &Payload) -> AnchorResult<Vec<u8>> {
    let request = AnchorRequest {
        operator: *operator,
        payload,
    };
    serde_json::to_vec(&request).map_err(|e| AnchorError::Serialization(e.to_string()))
}
