//! Pairwise scoring driver.
//!
//! Walks all unordered profile pairs (or the pairs involving one target),
//! evaluates each independently, and reduces the results into summary
//! statistics. Pair evaluations share no mutable state, so the fan-out is
//! a plain rayon `par_iter`; the summary is the only reduction step.

use std::collections::HashSet;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, info};

use affinity_core::config::ScoringConfig;
use affinity_core::errors::AffinityResult;
use affinity_core::models::{BatchSummary, ComponentScores, QualityTier, ScoreRecord};
use affinity_core::profile::{PairKey, Profile, ProfileId, Score};
use affinity_core::traits::{LocationAdjacency, PrefixAdjacency};

use crate::aggregator;
use crate::insights;
use crate::primitives::{age, completeness, interests, location, semantic};

/// Output of one batch run: records in deterministic pair order.
#[derive(Debug, Clone)]
pub struct ScoreBatch {
    pub records: Vec<ScoreRecord>,
    /// Pairs skipped because no dimension was evaluable on both sides.
    pub skipped_pairs: usize,
}

impl ScoreBatch {
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            skipped_pairs: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Single reduction over the batch: count, mean, tier distribution,
    /// and the top-k matches (score descending, insertion order on ties).
    pub fn summary(&self, top_k: usize) -> BatchSummary {
        if self.records.is_empty() {
            return BatchSummary::empty();
        }

        let mut low = 0;
        let mut medium = 0;
        let mut high = 0;
        let mut sum = 0.0;
        for record in &self.records {
            sum += record.combined.value();
            match record.tier {
                QualityTier::Low => low += 1,
                QualityTier::Medium => medium += 1,
                QualityTier::High => high += 1,
            }
        }

        let mut ranked: Vec<&ScoreRecord> = self.records.iter().collect();
        // Stable sort keeps insertion order for equal scores.
        ranked.sort_by(|a, b| {
            b.combined
                .partial_cmp(&a.combined)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        BatchSummary {
            pair_count: self.records.len(),
            average_score: sum / self.records.len() as f64,
            low_count: low,
            medium_count: medium,
            high_count: high,
            top_matches: ranked
                .into_iter()
                .take(top_k)
                .map(|r| (r.pair.clone(), r.combined))
                .collect(),
        }
    }
}

/// Batch compatibility scorer over immutable profile snapshots.
///
/// Construction validates the configuration; scoring itself cannot fail —
/// recoverable per-pair problems become a note on the record instead.
pub struct ScoringEngine {
    config: ScoringConfig,
    adjacency: Box<dyn LocationAdjacency>,
}

impl ScoringEngine {
    /// Create an engine with the default prefix-based location adjacency.
    pub fn new(config: ScoringConfig) -> AffinityResult<Self> {
        Self::with_adjacency(config, Box::new(PrefixAdjacency))
    }

    /// Create an engine with a product-supplied adjacency provider.
    pub fn with_adjacency(
        config: ScoringConfig,
        adjacency: Box<dyn LocationAdjacency>,
    ) -> AffinityResult<Self> {
        config.validate()?;
        Ok(Self { config, adjacency })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a single pair.
    pub fn score_pair(&self, a: &Profile, b: &Profile) -> ScoreRecord {
        let mut rng = self.base_seed().map(StdRng::seed_from_u64);
        self.evaluate(a, b, rng.as_mut())
    }

    /// Score every unordered pair in the population.
    ///
    /// Populations of zero or one profile produce an empty batch — a no-op,
    /// not an error. Duplicate ids keep their first occurrence only.
    /// Output order is deterministic (pair index order), and
    /// seeded diversity derives a per-pair RNG so parallel execution does
    /// not perturb results.
    pub fn score_population(&self, profiles: &[Profile]) -> ScoreBatch {
        if profiles.len() < 2 {
            return ScoreBatch::empty();
        }

        // Duplicate ids would produce self-pairs; keep each id's first
        // occurrence only.
        let indices = distinct_indices(profiles);

        let mut pairs = Vec::with_capacity(indices.len() * (indices.len() - 1) / 2);
        let mut skipped = 0usize;
        for (k, &i) in indices.iter().enumerate() {
            for &j in &indices[(k + 1)..] {
                if has_shared_dimension(&profiles[i], &profiles[j]) {
                    pairs.push((i, j));
                } else {
                    skipped += 1;
                }
            }
        }
        debug!(
            profiles = profiles.len(),
            candidate_pairs = pairs.len(),
            skipped,
            "built pair list"
        );

        let batch = self.score_pairs(profiles, &pairs, skipped);
        info!(pairs = batch.len(), skipped, "scored population");
        batch
    }

    /// Score only the pairs involving `target`.
    pub fn score_for_target(&self, profiles: &[Profile], target: &ProfileId) -> ScoreBatch {
        let Some(target_idx) = profiles.iter().position(|p| &p.id == target) else {
            return ScoreBatch::empty();
        };

        let mut pairs = Vec::new();
        let mut skipped = 0usize;
        let mut seen: HashSet<&ProfileId> = HashSet::from([target]);
        for (idx, profile) in profiles.iter().enumerate() {
            if !seen.insert(&profile.id) {
                continue;
            }
            if has_shared_dimension(&profiles[target_idx], profile) {
                pairs.push((target_idx.min(idx), target_idx.max(idx)));
            } else {
                skipped += 1;
            }
        }

        let batch = self.score_pairs(profiles, &pairs, skipped);
        info!(profile = %target, pairs = batch.len(), "scored target pairs");
        batch
    }

    fn score_pairs(
        &self,
        profiles: &[Profile],
        pairs: &[(usize, usize)],
        skipped: usize,
    ) -> ScoreBatch {
        let base_seed = self.base_seed();

        let records: Vec<ScoreRecord> = pairs
            .par_iter()
            .enumerate()
            .map(|(idx, &(i, j))| {
                let mut rng = base_seed.map(|seed| pair_rng(seed, idx));
                self.evaluate(&profiles[i], &profiles[j], rng.as_mut())
            })
            .collect();

        ScoreBatch {
            records,
            skipped_pairs: skipped,
        }
    }

    fn evaluate(&self, a: &Profile, b: &Profile, rng: Option<&mut StdRng>) -> ScoreRecord {
        // A recoverable semantic failure (dimension mismatch, zero-length
        // embedding) degrades to the neutral default and annotates the
        // record; it never aborts the batch.
        let (semantic_score, note) =
            match semantic::similarity(a.bio_embedding.as_deref(), b.bio_embedding.as_deref()) {
                Ok(score) => (score, None),
                Err(err) => (Score::NEUTRAL, Some(err.to_string())),
            };

        let components = ComponentScores {
            interest: interests::similarity(
                &a.interests,
                &b.interests,
                self.config.interest_weights.as_ref(),
            ),
            semantic: semantic_score,
            age: age::similarity(a.age, b.age, self.config.age_tolerance_years),
            location: location::similarity(
                a.location.as_deref(),
                b.location.as_deref(),
                self.adjacency.as_ref(),
            ),
            completeness: completeness::bonus(a, b),
        };

        let outcome = aggregator::aggregate(&components, &self.config, rng);

        ScoreRecord {
            pair: PairKey::new(a.id.clone(), b.id.clone()),
            combined: outcome.combined,
            base: outcome.base,
            components,
            weights: self.config.weights,
            tier: outcome.tier,
            insights: insights::derive(a, b, &components),
            note,
            computed_at: Utc::now(),
        }
    }

    fn base_seed(&self) -> Option<u64> {
        if self.config.diversity.enabled {
            Some(self.config.diversity.seed.unwrap_or_else(rand::random))
        } else {
            None
        }
    }
}

/// Indices of the first occurrence of each profile id, in input order.
fn distinct_indices(profiles: &[Profile]) -> Vec<usize> {
    let mut seen: HashSet<&ProfileId> = HashSet::with_capacity(profiles.len());
    profiles
        .iter()
        .enumerate()
        .filter(|(_, p)| seen.insert(&p.id))
        .map(|(i, _)| i)
        .collect()
}

/// Whether at least one dimension is evaluable on both sides. Pairs with
/// nothing to compare would score on neutral defaults alone, which says
/// nothing — they are skipped instead.
fn has_shared_dimension(a: &Profile, b: &Profile) -> bool {
    let embeddings = |p: &Profile| p.bio_embedding.as_deref().is_some_and(|e| !e.is_empty());
    (a.has_interests() && b.has_interests())
        || (embeddings(a) && embeddings(b))
        || (a.age.is_some() && b.age.is_some())
        || (a.location.is_some() && b.location.is_some())
}

/// Derive a per-pair RNG from the batch seed and pair index.
fn pair_rng(base_seed: u64, pair_index: usize) -> StdRng {
    let mixed = base_seed ^ (pair_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    StdRng::seed_from_u64(mixed)
}
