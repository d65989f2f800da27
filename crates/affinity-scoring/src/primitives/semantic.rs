//! Bio embedding similarity.
//!
//! Cosine over the precomputed vectors, remapped from [-1, 1] into [0, 1]
//! via `(c + 1) / 2`. The remap is applied unconditionally — nothing
//! downstream renormalizes, and it keeps the missing-input fallback (0.5)
//! exactly the remapped value of an orthogonal pair.

use affinity_core::errors::{AffinityResult, ScoringError};
use affinity_core::profile::Score;

/// Semantic similarity between two optional bio embeddings.
///
/// Missing input on either side is neutral (0.5). A present but
/// zero-length vector is a malformed profile, not a missing field:
/// [`ScoringError::ZeroLengthEmbedding`], like a
/// [`ScoringError::DimensionMismatch`] between non-empty vectors, is
/// recoverable — the caller decides whether it aborts (library use) or
/// degrades to neutral with a note (the driver). A zero-norm vector has
/// no direction to compare, so it scores 0.
pub fn similarity(a: Option<&[f32]>, b: Option<&[f32]>) -> AffinityResult<Score> {
    if a.is_some_and(|v| v.is_empty()) || b.is_some_and(|v| v.is_empty()) {
        return Err(ScoringError::ZeroLengthEmbedding);
    }
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Ok(Score::NEUTRAL),
    };

    if a.len() != b.len() {
        return Err(ScoringError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (&x, &y) in a.iter().zip(b) {
        dot += f64::from(x) * f64::from(y);
        norm_a += f64::from(x) * f64::from(x);
        norm_b += f64::from(y) * f64::from(y);
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(Score::MIN);
    }

    let cosine = dot / (norm_a.sqrt() * norm_b.sqrt());
    Ok(Score::new((cosine + 1.0) / 2.0))
}
