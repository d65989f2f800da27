use affinity_core::config::TierThresholds;
use affinity_core::models::QualityTier;
use affinity_core::profile::{PairKey, Profile, Score};
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_is_always_in_unit_range(value in -10.0f64..10.0) {
        let score = Score::new(value);
        prop_assert!((0.0..=1.0).contains(&score.value()));
    }

    #[test]
    fn score_arithmetic_stays_in_unit_range(a in 0.0f64..=1.0, b in 0.0f64..=1.0, k in -3.0f64..3.0) {
        let sum = Score::new(a) + Score::new(b);
        prop_assert!((0.0..=1.0).contains(&sum.value()));
        let scaled = Score::new(a) * k;
        prop_assert!((0.0..=1.0).contains(&scaled.value()));
    }

    #[test]
    fn pair_key_is_order_independent(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        prop_assume!(a != b);
        let ab = PairKey::new(a.as_str().into(), b.as_str().into());
        let ba = PairKey::new(b.as_str().into(), a.as_str().into());
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn completeness_is_a_quarter_fraction(
        age in proptest::option::of(18u32..90),
        location in proptest::option::of("[0-9]{5}"),
        has_interests in any::<bool>(),
    ) {
        let mut profile = Profile::new("p");
        profile.age = age;
        profile.location = location;
        if has_interests {
            profile.interests = vec!["hiking".to_string()];
        }
        let c = profile.completeness();
        prop_assert!((0.0..=1.0).contains(&c));
        prop_assert!((c * 4.0).fract().abs() < 1e-9);
    }

    #[test]
    fn every_score_gets_exactly_one_tier(value in 0.0f64..=1.0) {
        let thresholds = TierThresholds::default();
        let tier = QualityTier::classify(Score::new(value), &thresholds);
        let expected = if value >= thresholds.high {
            QualityTier::High
        } else if value >= thresholds.medium {
            QualityTier::Medium
        } else {
            QualityTier::Low
        };
        prop_assert_eq!(tier, expected);
    }
}
