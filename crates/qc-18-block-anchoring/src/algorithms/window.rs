//! # Window Aggregation
//!
//! Summarizes the trailing window of up to `period` blocks ending at the
//! anchored block.
//!
//! ## Window bounds
//!
//! For anchored height `h`:
//! - `start = h - period + 1` when `h >= period`
//! - `start = 0` otherwise (early-chain truncation)
//!
//! The anchored block is taken from the caller; every other height in
//! `start..h` is fetched from the [`BlockProvider`]. If any of them is
//! missing the whole aggregation is abandoned.

use crate::domain::{AnchorError, AnchorResult, WindowSummary};
use crate::ports::BlockProvider;
use shared_types::Block;

/// First height of the window ending at `height`.
///
/// A zero `period` is treated as 1.
pub fn window_start(height: u64, period: u64) -> u64 {
    height.saturating_sub(period.max(1) - 1)
}

/// Aggregate the window ending at `block`.
///
/// Costs `O(period)` block lookups; the provider is read-only here.
///
/// # Errors
///
/// `AggregationUnavailable` naming the first height the provider could
/// not serve.
pub fn summarize<P>(block: &Block, period: u64, provider: &P) -> AnchorResult<WindowSummary>
where
    P: BlockProvider + ?Sized,
{
    let height = block.height();
    let start = window_start(height, period);

    let mut tx_count = block.tx_count() as u64;
    for h in start..height {
        let past = provider
            .get_block_by_number(h)
            .ok_or(AnchorError::AggregationUnavailable {
                height,
                missing_height: h,
            })?;
        tx_count += past.tx_count() as u64;
    }

    let block_count = height - start + 1;
    Ok(WindowSummary::from_block(block, block_count, tx_count))
}
