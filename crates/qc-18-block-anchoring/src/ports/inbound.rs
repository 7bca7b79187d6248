//! # Inbound Ports
//!
//! API trait defining what the Block Anchoring subsystem can do.

use crate::domain::{AnchorOutcome, AnchorResult};
use async_trait::async_trait;
use shared_types::Block;

/// Block anchoring API - inbound port.
#[async_trait]
pub trait AnchoringApi: Send + Sync {
    /// Periodic entry point, called once per committed block.
    ///
    /// Never fails: skips and failures are reported through the outcome
    /// after being logged.
    async fn anchor_periodic_block(&self, block: Option<&Block>) -> AnchorOutcome;

    /// Summarize the window ending at `block` and submit it.
    ///
    /// Bypasses the enabled and period checks.
    async fn anchor_block(&self, block: &Block) -> AnchorResult<()>;

    /// Whether `block` would be anchored by the periodic entry point.
    fn should_anchor(&self, block: Option<&Block>) -> bool;
}
