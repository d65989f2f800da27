//! Interest overlap: exact (or weighted) Jaccard blended with taxonomy
//! category Jaccard, 0.6/0.4.

use std::collections::BTreeSet;

use affinity_core::config::InterestWeights;
use affinity_core::constants::{INTEREST_CATEGORY_BLEND, INTEREST_EXACT_BLEND};
use affinity_core::profile::Score;
use affinity_core::taxonomy;

/// Interest similarity between two tag lists.
///
/// Either side empty scores 0 — no overlap evidence is not neutral, it is
/// the absence of the dimension's strongest signal. When a weight map is
/// supplied, weighted Jaccard substitutes for the exact term.
pub fn similarity(a: &[String], b: &[String], weights: Option<&InterestWeights>) -> Score {
    if a.is_empty() || b.is_empty() {
        return Score::MIN;
    }

    let set_a: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: BTreeSet<&str> = b.iter().map(String::as_str).collect();

    let exact = match weights {
        Some(w) if !w.is_empty() => weighted_jaccard(&set_a, &set_b, w),
        _ => jaccard(&set_a, &set_b),
    };

    let cats_a = taxonomy::category_set(a);
    let cats_b = taxonomy::category_set(b);
    // No categorizable interests on either side means the category term
    // carries no evidence of its own; reuse the exact term so identical
    // uncategorized lists still saturate.
    let category = if cats_a.is_empty() && cats_b.is_empty() {
        exact
    } else {
        jaccard(&cats_a, &cats_b)
    };

    Score::new(INTEREST_EXACT_BLEND * exact + INTEREST_CATEGORY_BLEND * category)
}

/// Count of exactly shared tags, for insight strings.
pub fn common_count(a: &[String], b: &[String]) -> usize {
    let set_a: BTreeSet<&str> = a.iter().map(String::as_str).collect();
    b.iter()
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .intersection(&set_a)
        .count()
}

fn jaccard<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Jaccard where each tag contributes its importance weight instead of 1.
fn weighted_jaccard(a: &BTreeSet<&str>, b: &BTreeSet<&str>, weights: &InterestWeights) -> f64 {
    let union: f64 = a
        .union(b)
        .map(|tag| f64::from(weights.weight_for(tag)))
        .sum();
    if union == 0.0 {
        return 0.0;
    }
    let intersection: f64 = a
        .intersection(b)
        .map(|tag| f64::from(weights.weight_for(tag)))
        .sum();
    intersection / union
}
