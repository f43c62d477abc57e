use rust_decimal::Decimal;
use serde::Serialize;

/// A gamification rank earned by uploading receipts.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BadgeTier {
    pub label: &'static str,
    pub min_count: u64,
    /// `None` for the top tier.
    pub max_count: Option<u64>,
    pub icon: &'static str,
    pub description: &'static str,
}

impl BadgeTier {
    pub fn contains(&self, count: u64) -> bool {
        count >= self.min_count && self.max_count.map_or(true, |max| count <= max)
    }
}

/// Tier table, sorted by `min_count` with contiguous inclusive ranges.
pub static BADGE_TIERS: [BadgeTier; 5] = [
    BadgeTier {
        label: "Budget Beginner",
        min_count: 0,
        max_count: Some(10),
        icon: "seedling",
        description: "Getting started with receipt tracking",
    },
    BadgeTier {
        label: "Smart Saver",
        min_count: 11,
        max_count: Some(50),
        icon: "piggy-bank",
        description: "Building a consistent tracking habit",
    },
    BadgeTier {
        label: "Budget Builder",
        min_count: 51,
        max_count: Some(150),
        icon: "bricks",
        description: "Laying solid financial foundations",
    },
    BadgeTier {
        label: "Finance Pro",
        min_count: 151,
        max_count: Some(400),
        icon: "chart",
        description: "Tracking spending like a professional",
    },
    BadgeTier {
        label: "Money Maestro",
        min_count: 401,
        max_count: None,
        icon: "crown",
        description: "Mastered the art of money management",
    },
];

/// Where a receipt count sits on the tier ladder.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BadgeProgress {
    pub receipts_count: u64,
    pub tier: &'static BadgeTier,
    pub tier_index: usize,
    pub next_tier: Option<&'static BadgeTier>,
    /// Receipts still needed to reach `next_tier`; zero at the top tier.
    pub count_to_next: u64,
    /// Progress through the current tier toward the next, 100 at the top.
    pub progress_percent: Decimal,
}

impl BadgeProgress {
    pub fn is_top_tier(&self) -> bool {
        self.next_tier.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_ranges_are_contiguous() {
        for pair in BADGE_TIERS.windows(2) {
            let max = pair[0].max_count.expect("only the last tier is unbounded");
            assert_eq!(pair[1].min_count, max + 1, "{} -> {}", pair[0].label, pair[1].label);
        }
        assert_eq!(BADGE_TIERS[0].min_count, 0);
        assert!(BADGE_TIERS[BADGE_TIERS.len() - 1].max_count.is_none());
    }

    #[test]
    fn contains_is_inclusive() {
        let saver = &BADGE_TIERS[1];
        assert!(saver.contains(11));
        assert!(saver.contains(50));
        assert!(!saver.contains(51));
        assert!(BADGE_TIERS[4].contains(u64::MAX));
    }
}
