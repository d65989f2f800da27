//! Wire-format checks for the serializable surface: configs must accept
//! partial JSON (defaults fill the rest) and records must keep the field
//! names downstream consumers read.

use chrono::Utc;
use serde_json::json;

use affinity_core::config::{ScoringConfig, TierThresholds};
use affinity_core::models::{ComponentScores, QualityTier, ScoreRecord};
use affinity_core::profile::{PairKey, Score};

#[test]
fn partial_config_json_fills_defaults() {
    let config: ScoringConfig = serde_json::from_value(json!({
        "diversity": { "enabled": true, "seed": 7 }
    }))
    .unwrap();

    assert!(config.diversity.enabled);
    assert_eq!(config.diversity.seed, Some(7));
    // Untouched sections keep their documented defaults.
    assert_eq!(config.age_tolerance_years, 5);
    assert!((config.weights.interest - 0.35).abs() < 1e-12);
    assert!(config.interest_weights.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn interest_weights_serialize_as_a_plain_map() {
    let config: ScoringConfig = serde_json::from_value(json!({
        "interest_weights": { "hiking": 5, "reading": 1 }
    }))
    .unwrap();

    let weights = config.interest_weights.unwrap();
    assert_eq!(weights.weight_for("hiking"), 5);
    assert_eq!(weights.weight_for("reading"), 1);
    assert_eq!(weights.weight_for("unknown"), 3);
}

#[test]
fn score_record_round_trips_through_json() {
    let record = ScoreRecord {
        pair: PairKey::new("alice".into(), "bob".into()),
        combined: Score::new(0.82),
        base: Score::new(0.8),
        components: ComponentScores {
            interest: Score::new(1.0),
            semantic: Score::NEUTRAL,
            age: Score::new(1.0),
            location: Score::new(0.7),
            completeness: Score::new(0.75),
        },
        weights: Default::default(),
        tier: QualityTier::classify(Score::new(0.82), &TierThresholds::default()),
        insights: vec!["share 3 common interests".to_string()],
        note: None,
        computed_at: Utc::now(),
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["tier"], "high");
    assert_eq!(value["pair"]["first"], "alice");
    assert_eq!(value["combined"], 0.82);
    assert!(value["note"].is_null());

    let back: ScoreRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back.pair, record.pair);
    assert_eq!(back.tier, QualityTier::High);
    assert_eq!(back.insights, record.insights);
}
