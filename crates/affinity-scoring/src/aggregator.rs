//! Score aggregation: weighted sum, optional diversity perturbation, tier
//! classification.
//!
//! Pure — persistence of the resulting record is the caller's concern, and
//! randomness comes in through an explicit seedable source, never ambient.

use rand::rngs::StdRng;
use rand::Rng;

use affinity_core::config::ScoringConfig;
use affinity_core::models::{ComponentScores, QualityTier};
use affinity_core::profile::Score;

/// Result of combining component scores for one pair.
#[derive(Debug, Clone, Copy)]
pub struct AggregateOutcome {
    /// Weighted sum of components, before perturbation.
    pub base: Score,
    /// Final score, after any diversity perturbation. Equals `base` when
    /// diversity is disabled.
    pub combined: Score,
    pub tier: QualityTier,
}

/// Combine component scores under a validated config.
///
/// When diversity is enabled and an RNG is supplied, a uniform perturbation
/// in `[-factor, +factor]` is added and the result clamped back into
/// [0, 1]. This deliberately trades a little ranking purity against
/// homophily-only match lists.
pub fn aggregate(
    components: &ComponentScores,
    config: &ScoringConfig,
    rng: Option<&mut StdRng>,
) -> AggregateOutcome {
    let base = components.weighted_base(&config.weights);

    let combined = match rng {
        Some(rng) if config.diversity.enabled && config.diversity.factor > 0.0 => {
            let factor = config.diversity.factor;
            let perturbation = rng.gen_range(-factor..=factor);
            Score::new(base.value() + perturbation)
        }
        _ => base,
    };

    AggregateOutcome {
        base,
        combined,
        tier: QualityTier::classify(combined, &config.tiers),
    }
}
