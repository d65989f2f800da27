use std::collections::HashSet;

use affinity_community::{CommunityDetector, MatchGraph};
use affinity_core::config::{ComponentWeights, TierThresholds};
use affinity_core::models::{ComponentScores, QualityTier, ScoreRecord};
use affinity_core::profile::{PairKey, Profile, ProfileId, Score};
use proptest::collection::vec;
use proptest::prelude::*;

const POPULATION: usize = 8;

fn record(a: usize, b: usize, combined: f64) -> ScoreRecord {
    let score = Score::new(combined);
    ScoreRecord {
        pair: PairKey::new(
            ProfileId::new(format!("p{a}")),
            ProfileId::new(format!("p{b}")),
        ),
        combined: score,
        base: score,
        components: ComponentScores::default(),
        weights: ComponentWeights::default(),
        tier: QualityTier::classify(score, &TierThresholds::default()),
        insights: vec![],
        note: None,
        computed_at: chrono::Utc::now(),
    }
}

fn population() -> Vec<ProfileId> {
    (0..POPULATION)
        .map(|i| ProfileId::new(format!("p{i}")))
        .collect()
}

/// Random score assignments for every unordered pair of the population.
fn arb_records() -> impl Strategy<Value = Vec<ScoreRecord>> {
    vec(0.0f64..=1.0, POPULATION * (POPULATION - 1) / 2).prop_map(|scores| {
        let mut records = Vec::new();
        let mut k = 0;
        for i in 0..POPULATION {
            for j in (i + 1)..POPULATION {
                records.push(record(i, j, scores[k]));
                k += 1;
            }
        }
        records
    })
}

proptest! {
    // Every node lands in exactly one community or the isolated list.
    #[test]
    fn communities_partition_the_node_set(records in arb_records(), threshold in 0.0f64..=1.0) {
        let population = population();
        let graph = MatchGraph::build(&population, &records, Score::new(threshold));
        let profiles: Vec<Profile> =
            population.iter().map(|id| Profile::new(id.clone())).collect();
        let report = CommunityDetector::new().detect(&graph, &profiles, None);

        let mut seen = HashSet::new();
        for community in &report.communities {
            prop_assert!(community.size() >= 2, "spurious singleton community");
            for member in &community.members {
                prop_assert!(seen.insert(member.clone()), "node in two communities");
            }
        }
        for id in &report.isolated {
            prop_assert!(seen.insert(id.clone()), "isolated node also in a community");
        }
        prop_assert_eq!(seen.len(), population.len());
    }

    // Raising the threshold never adds edges, and communities refine.
    #[test]
    fn higher_thresholds_refine_communities(
        records in arb_records(),
        low in 0.0f64..=1.0,
        delta in 0.0f64..=1.0,
    ) {
        let high = (low + delta).min(1.0);
        let population = population();
        let profiles: Vec<Profile> =
            population.iter().map(|id| Profile::new(id.clone())).collect();

        let loose = MatchGraph::build(&population, &records, Score::new(low));
        let strict = MatchGraph::build(&population, &records, Score::new(high));
        prop_assert!(strict.edge_count() <= loose.edge_count());

        let detector = CommunityDetector::new();
        let loose_report = detector.detect(&loose, &profiles, None);
        let strict_report = detector.detect(&strict, &profiles, None);

        // Each strict community must sit inside one loose community.
        let loose_sets: Vec<HashSet<&ProfileId>> = loose_report
            .communities
            .iter()
            .map(|c| c.members.iter().collect())
            .collect();
        for community in &strict_report.communities {
            let members: HashSet<&ProfileId> = community.members.iter().collect();
            prop_assert!(
                loose_sets.iter().any(|s| members.is_subset(s)),
                "strict community is not a refinement"
            );
        }
    }

    // Rebuilding at the same threshold is idempotent.
    #[test]
    fn graph_building_is_pure(records in arb_records(), threshold in 0.0f64..=1.0) {
        let population = population();
        let first = MatchGraph::build(&population, &records, Score::new(threshold));
        let second = MatchGraph::build(&population, &records, Score::new(threshold));
        prop_assert_eq!(first.node_count(), second.node_count());
        prop_assert_eq!(first.edge_count(), second.edge_count());
    }
}
