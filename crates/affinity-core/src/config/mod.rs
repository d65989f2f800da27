//! Scoring configuration.
//!
//! Every knob is caller-supplied with documented defaults. Validation runs
//! once, before any scoring begins — a bad weight table would silently bias
//! every result, so it is fatal up front rather than per pair.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{AffinityResult, ScoringError};

/// Per-dimension weights applied when combining component scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentWeights {
    pub interest: f64,
    pub semantic: f64,
    pub age: f64,
    pub location: f64,
    pub completeness: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            interest: constants::DEFAULT_WEIGHT_INTEREST,
            semantic: constants::DEFAULT_WEIGHT_SEMANTIC,
            age: constants::DEFAULT_WEIGHT_AGE,
            location: constants::DEFAULT_WEIGHT_LOCATION,
            completeness: constants::DEFAULT_WEIGHT_COMPLETENESS,
        }
    }
}

impl ComponentWeights {
    /// Check each weight is in [0, 1] and the sum is 1.0.
    pub fn validate(&self) -> AffinityResult<()> {
        let all = [
            self.interest,
            self.semantic,
            self.age,
            self.location,
            self.completeness,
        ];
        if all.iter().any(|w| !(0.0..=1.0).contains(w)) {
            return Err(ScoringError::InvalidConfiguration {
                reason: "component weights must be in [0, 1]".to_string(),
            });
        }
        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > constants::WEIGHT_SUM_EPSILON {
            return Err(ScoringError::InvalidConfiguration {
                reason: format!("component weights must sum to 1.0, got {sum}"),
            });
        }
        Ok(())
    }
}

/// Bounded random perturbation settings (the serendipity factor).
///
/// Disabled by default; when enabled without a seed, each batch draws a
/// fresh base seed so runs still vary in production while tests can pin one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    pub enabled: bool,
    /// Half-width of the uniform perturbation. Typically <= 0.2.
    pub factor: f64,
    /// Base seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            factor: constants::DEFAULT_DIVERSITY_FACTOR,
            seed: None,
        }
    }
}

impl DiversityConfig {
    pub fn validate(&self) -> AffinityResult<()> {
        if !(0.0..=1.0).contains(&self.factor) {
            return Err(ScoringError::InvalidConfiguration {
                reason: format!("diversity factor must be in [0, 1], got {}", self.factor),
            });
        }
        Ok(())
    }
}

/// Quality tier cutoffs. Combined score >= `high` classifies High,
/// >= `medium` classifies Medium, anything below is Low.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub medium: f64,
    pub high: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            medium: constants::DEFAULT_TIER_MEDIUM,
            high: constants::DEFAULT_TIER_HIGH,
        }
    }
}

impl TierThresholds {
    pub fn validate(&self) -> AffinityResult<()> {
        if !(0.0..=1.0).contains(&self.medium)
            || !(0.0..=1.0).contains(&self.high)
            || self.medium > self.high
        {
            return Err(ScoringError::InvalidConfiguration {
                reason: format!(
                    "tier thresholds must satisfy 0 <= medium <= high <= 1, got {}/{}",
                    self.medium, self.high
                ),
            });
        }
        Ok(())
    }
}

/// Per-run interest importance map (tag -> 1..=5). Absent tags score the
/// neutral weight 3.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestWeights(HashMap<String, u8>);

impl InterestWeights {
    pub fn new(weights: HashMap<String, u8>) -> Self {
        Self(weights)
    }

    pub fn weight_for(&self, tag: &str) -> u8 {
        self.0
            .get(tag)
            .copied()
            .unwrap_or(constants::NEUTRAL_INTEREST_WEIGHT)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn validate(&self) -> AffinityResult<()> {
        if let Some((tag, w)) = self.0.iter().find(|(_, w)| !(1..=5).contains(*w)) {
            return Err(ScoringError::InvalidConfiguration {
                reason: format!("interest weight for '{tag}' must be in 1..=5, got {w}"),
            });
        }
        Ok(())
    }
}

impl FromIterator<(String, u8)> for InterestWeights {
    fn from_iter<I: IntoIterator<Item = (String, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Full scoring-run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ComponentWeights,
    pub diversity: DiversityConfig,
    pub tiers: TierThresholds,
    /// Age difference (years) still considered fully compatible.
    pub age_tolerance_years: u32,
    /// Optional per-run interest importance map.
    pub interest_weights: Option<InterestWeights>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            diversity: DiversityConfig::default(),
            tiers: TierThresholds::default(),
            age_tolerance_years: constants::DEFAULT_AGE_TOLERANCE_YEARS,
            interest_weights: None,
        }
    }
}

impl ScoringConfig {
    /// Validate every sub-config. Called by the driver before any scoring.
    pub fn validate(&self) -> AffinityResult<()> {
        self.weights.validate()?;
        self.diversity.validate()?;
        self.tiers.validate()?;
        if self.age_tolerance_years == 0 {
            return Err(ScoringError::InvalidConfiguration {
                reason: "age tolerance must be at least 1 year".to_string(),
            });
        }
        if let Some(iw) = &self.interest_weights {
            iw.validate()?;
        }
        Ok(())
    }
}
