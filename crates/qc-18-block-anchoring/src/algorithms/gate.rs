//! # Anchor Gate
//!
//! Decides which blocks are eligible for anchoring. No side effects.

use crate::config::AnchorConfig;
use crate::domain::SkipReason;
use shared_types::Block;

/// Check eligibility, returning the block to anchor or why it is skipped.
///
/// Checks run in order: disabled, missing block, zero period, off-period.
pub fn gate_decision<'a>(
    config: &AnchorConfig,
    block: Option<&'a Block>,
) -> Result<&'a Block, SkipReason> {
    if !config.enabled {
        return Err(SkipReason::Disabled);
    }

    let block = block.ok_or(SkipReason::MissingBlock)?;

    match block.height().checked_rem(config.period) {
        None => Err(SkipReason::InvalidPeriod),
        Some(0) => Ok(block),
        Some(_) => Err(SkipReason::OffPeriod),
    }
}

/// True iff anchoring is enabled, a block is present and its height is a
/// multiple of the period.
pub fn should_anchor(config: &AnchorConfig, block: Option<&Block>) -> bool {
    gate_decision(config, block).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::BlockHeader;

    fn block_at(height: u64) -> Block {
        Block::new(
            BlockHeader {
                height,
                ..Default::default()
            },
            vec![],
        )
    }

    fn enabled(period: u64) -> AnchorConfig {
        AnchorConfig::default().with_enabled(true).with_period(period)
    }

    #[test]
    fn test_disabled_never_anchors() {
        let config = AnchorConfig::default();
        assert_eq!(
            gate_decision(&config, Some(&block_at(0))),
            Err(SkipReason::Disabled)
        );
        assert!(!should_anchor(&config, None));
    }

    #[test]
    fn test_missing_block_is_skipped() {
        assert_eq!(gate_decision(&enabled(1), None), Err(SkipReason::MissingBlock));
    }

    #[test]
    fn test_zero_period_never_anchors() {
        assert_eq!(
            gate_decision(&enabled(0), Some(&block_at(10))),
            Err(SkipReason::InvalidPeriod)
        );
    }

    #[test]
    fn test_off_period_and_on_period() {
        let config = enabled(7);
        assert_eq!(
            gate_decision(&config, Some(&block_at(13))),
            Err(SkipReason::OffPeriod)
        );
        assert!(should_anchor(&config, Some(&block_at(14))));
        assert!(should_anchor(&config, Some(&block_at(0))));
    }

    proptest! {
        #[test]
        fn prop_disabled_rejects_every_block(height in any::<u64>(), period in 1u64..10_000) {
            let config = AnchorConfig::default().with_period(period);
            prop_assert!(!should_anchor(&config, Some(&block_at(height))));
        }

        #[test]
        fn prop_anchors_iff_multiple_of_period(height in any::<u64>(), period in 1u64..10_000) {
            let block = block_at(height);
            prop_assert_eq!(should_anchor(&enabled(period), Some(&block)), height % period == 0);
        }
    }
}
