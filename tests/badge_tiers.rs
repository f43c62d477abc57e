use ordino_core::core::services::{BadgeService, ServiceError};
use ordino_core::domain::BADGE_TIERS;
use ordino_core::errors::ValidationError;
use rust_decimal_macros::dec;

#[test]
fn tier_boundaries_match_the_ladder() {
    let cases = [
        (0, "Budget Beginner"),
        (10, "Budget Beginner"),
        (11, "Smart Saver"),
        (50, "Smart Saver"),
        (51, "Budget Builder"),
        (150, "Budget Builder"),
        (151, "Finance Pro"),
        (400, "Finance Pro"),
        (401, "Money Maestro"),
        (1_000_000, "Money Maestro"),
    ];
    for (count, expected) in cases {
        let progress = BadgeService::classify(count).expect("classify");
        assert_eq!(progress.tier.label, expected, "count {count}");
    }
}

#[test]
fn every_count_lands_in_exactly_one_tier() {
    for count in 0..=600u64 {
        let matching = BADGE_TIERS.iter().filter(|tier| tier.contains(count)).count();
        assert_eq!(matching, 1, "count {count}");
        let progress = BadgeService::classify_count(count);
        assert!(progress.tier.contains(count));
    }
}

#[test]
fn tiers_never_go_down_as_counts_grow() {
    let mut previous = 0;
    for count in 0..=600u64 {
        let index = BadgeService::classify_count(count).tier_index;
        assert!(index >= previous, "count {count}");
        previous = index;
    }
}

#[test]
fn progress_tracks_distance_to_next_tier() {
    let progress = BadgeService::classify(31).expect("classify");
    assert_eq!(progress.tier.label, "Smart Saver");
    assert_eq!(progress.next_tier.map(|tier| tier.label), Some("Budget Builder"));
    assert_eq!(progress.count_to_next, 20);
    assert_eq!(progress.progress_percent, dec!(50));

    let top = BadgeService::classify(5_000).expect("classify");
    assert!(top.is_top_tier());
    assert_eq!(top.count_to_next, 0);
    assert_eq!(top.progress_percent, dec!(100));
}

#[test]
fn negative_counts_are_rejected() {
    assert!(matches!(
        BadgeService::classify(-1),
        Err(ServiceError::Validation(ValidationError::NegativeCount(-1)))
    ));
}
