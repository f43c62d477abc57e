use rust_decimal::Decimal;
use tracing::debug;

use crate::core::utils::percent_of;
use crate::domain::{BadgeProgress, BADGE_TIERS};
use crate::errors::ValidationError;

use super::ServiceResult;

pub struct BadgeService;

impl BadgeService {
    /// Places a receipt count on the tier ladder. Negative counts are rejected.
    pub fn classify(receipts_count: i64) -> ServiceResult<BadgeProgress> {
        let count = u64::try_from(receipts_count)
            .map_err(|_| ValidationError::NegativeCount(receipts_count))?;
        Ok(Self::classify_count(count))
    }

    pub fn classify_count(count: u64) -> BadgeProgress {
        // the first tier starts at zero, so at least one tier always qualifies
        let tier_index = BADGE_TIERS
            .partition_point(|tier| tier.min_count <= count)
            .saturating_sub(1);
        let tier = &BADGE_TIERS[tier_index];
        let next_tier = BADGE_TIERS.get(tier_index + 1);

        let (count_to_next, progress_percent) = match next_tier {
            Some(next) => (
                next.min_count - count,
                percent_of(
                    Decimal::from(count - tier.min_count),
                    Decimal::from(next.min_count - tier.min_count),
                ),
            ),
            None => (0, Decimal::ONE_HUNDRED),
        };
        debug!(count, tier = tier.label, count_to_next, "classified badge tier");

        BadgeProgress {
            receipts_count: count,
            tier,
            tier_index,
            next_tier,
            count_to_next,
            progress_percent,
        }
    }
}
