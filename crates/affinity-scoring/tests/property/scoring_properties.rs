use affinity_core::config::ScoringConfig;
use affinity_core::profile::Profile;
use affinity_core::traits::PrefixAdjacency;
use affinity_scoring::primitives::{age, completeness, interests, location, semantic};
use affinity_scoring::ScoringEngine;
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

fn arb_interest() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("hiking".to_string()),
        Just("reading".to_string()),
        Just("cooking".to_string()),
        Just("yoga".to_string()),
        Just("gaming".to_string()),
        Just("painting".to_string()),
        Just("quilting".to_string()),
        "[a-z]{3,10}",
    ]
}

fn arb_profile(id: &'static str) -> impl Strategy<Value = Profile> {
    (
        option::of(18u32..90),
        option::of("[0-9]{5}"),
        vec(arb_interest(), 0..6),
        option::of(vec(-1.0f32..1.0, 3)),
    )
        .prop_map(move |(age, location, interests, embedding)| {
            let mut p = Profile::new(id);
            p.age = age;
            p.location = location;
            p.interests = interests;
            p.bio_embedding = embedding;
            p
        })
}

proptest! {
    // Range invariant: every primitive stays in [0, 1] for all inputs.
    #[test]
    fn primitives_stay_in_unit_range(a in arb_profile("a"), b in arb_profile("b")) {
        let adj = PrefixAdjacency;
        let checks = [
            interests::similarity(&a.interests, &b.interests, None).value(),
            semantic::similarity(a.bio_embedding.as_deref(), b.bio_embedding.as_deref())
                .unwrap()
                .value(),
            age::similarity(a.age, b.age, 5).value(),
            location::similarity(a.location.as_deref(), b.location.as_deref(), &adj).value(),
            completeness::bonus(&a, &b).value(),
        ];
        for value in checks {
            prop_assert!((0.0..=1.0).contains(&value), "out of range: {value}");
        }
    }

    // Symmetry: with diversity disabled, score(A, B) == score(B, A).
    #[test]
    fn scoring_is_symmetric_without_diversity(a in arb_profile("a"), b in arb_profile("b")) {
        let engine = ScoringEngine::new(ScoringConfig::default()).unwrap();
        let forward = engine.score_pair(&a, &b);
        let backward = engine.score_pair(&b, &a);
        prop_assert_eq!(forward.combined, backward.combined);
        prop_assert_eq!(forward.components, backward.components);
        prop_assert_eq!(forward.pair, backward.pair);
    }

    // Combined score range holds even with maximal diversity perturbation.
    #[test]
    fn combined_score_stays_in_unit_range(
        a in arb_profile("a"),
        b in arb_profile("b"),
        seed in any::<u64>(),
    ) {
        let mut config = ScoringConfig::default();
        config.diversity.enabled = true;
        config.diversity.factor = 1.0;
        config.diversity.seed = Some(seed);
        let engine = ScoringEngine::new(config).unwrap();
        let record = engine.score_pair(&a, &b);
        prop_assert!((0.0..=1.0).contains(&record.combined.value()));
        // Components weighted-sum to the pre-diversity base.
        let reconstructed = record.components.weighted_base(&record.weights);
        prop_assert!((reconstructed.value() - record.base.value()).abs() < 1e-12);
    }

    // Exact-match saturation for any non-empty interest set.
    #[test]
    fn identical_interest_sets_saturate(tags in vec(arb_interest(), 1..6)) {
        let score = interests::similarity(&tags, &tags, None);
        prop_assert_eq!(score.value(), 1.0);
    }

    #[test]
    fn empty_interest_side_scores_zero(tags in vec(arb_interest(), 0..6)) {
        prop_assert_eq!(interests::similarity(&tags, &[], None).value(), 0.0);
        prop_assert_eq!(interests::similarity(&[], &tags, None).value(), 0.0);
    }

    // Age identity.
    #[test]
    fn same_age_saturates(a in 18u32..90, tolerance in 1u32..10) {
        prop_assert_eq!(age::similarity(Some(a), Some(a), tolerance).value(), 1.0);
    }

    // Self-exclusion: n profiles always yield n*(n-1)/2 records at most.
    #[test]
    fn driver_never_scores_self_pairs(n in 2usize..8) {
        let profiles = test_fixtures::dense_population(n);
        let engine = ScoringEngine::new(ScoringConfig::default()).unwrap();
        let batch = engine.score_population(&profiles);
        prop_assert_eq!(batch.len(), n * (n - 1) / 2);
        for record in &batch.records {
            prop_assert_ne!(record.pair.first(), record.pair.second());
        }
    }
}
