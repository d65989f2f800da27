use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ComponentWeights, TierThresholds};
use crate::profile::{PairKey, Score};

/// Quality classification of a combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Low,
    Medium,
    High,
}

impl QualityTier {
    pub fn classify(score: Score, thresholds: &TierThresholds) -> Self {
        let v = score.value();
        if v >= thresholds.high {
            Self::High
        } else if v >= thresholds.medium {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Raw per-dimension similarity values, before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub interest: Score,
    pub semantic: Score,
    pub age: Score,
    pub location: Score,
    pub completeness: Score,
}

impl ComponentScores {
    /// Weighted sum of the components — the pre-diversity base score.
    pub fn weighted_base(&self, weights: &ComponentWeights) -> Score {
        Score::new(
            self.interest.value() * weights.interest
                + self.semantic.value() * weights.semantic
                + self.age.value() * weights.age
                + self.location.value() * weights.location
                + self.completeness.value() * weights.completeness,
        )
    }
}

/// One evaluated profile pair.
///
/// Immutable once produced: a later scoring run replaces the record for a
/// pair rather than patching it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub pair: PairKey,
    /// Final combined score, after any diversity perturbation.
    pub combined: Score,
    /// Weighted sum of components before the diversity perturbation.
    pub base: Score,
    pub components: ComponentScores,
    /// Snapshot of the weights this record was computed under.
    pub weights: ComponentWeights,
    pub tier: QualityTier,
    /// Short UI-facing explanations derived from component values.
    pub insights: Vec<String>,
    /// Set when a recoverable per-pair failure (e.g. an embedding
    /// dimension mismatch) was downgraded to the neutral default.
    pub note: Option<String>,
    pub computed_at: DateTime<Utc>,
}
