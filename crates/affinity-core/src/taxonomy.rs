//! Canonical interest taxonomy.
//!
//! One shared category -> keyword table, consumed by both the interest
//! similarity primitive and community characterization. Membership is by
//! substring match: an interest belongs to a category when it contains any
//! of the category's keywords. An interest may land in several categories,
//! or in none.

use std::collections::BTreeSet;

/// Category -> keyword stems, in fixed precedence order (used for
/// deterministic tie-breaking when tallies are equal).
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "tech", "coding", "programming", "software", "computer", "gaming", "robotic", "data",
        ],
    ),
    (
        "wellness",
        &[
            "yoga",
            "meditation",
            "fitness",
            "gym",
            "wellness",
            "mindfulness",
            "pilates",
            "health",
        ],
    ),
    (
        "creative-arts",
        &[
            "art", "paint", "draw", "writing", "poetry", "photograph", "pottery", "craft", "danc",
            "sculpt", "design",
        ],
    ),
    (
        "food",
        &[
            "cooking", "baking", "food", "wine", "coffee", "brewing", "cuisine", "restaurant",
        ],
    ),
    (
        "entertainment",
        &[
            "movie", "film", "music", "concert", "theater", "theatre", "reading", "books", "tv",
            "podcast",
        ],
    ),
    ("pets", &["dog", "cat", "pet", "bird", "animal"]),
    (
        "sports",
        &[
            "hiking", "running", "cycling", "climbing", "soccer", "basketball", "tennis", "swim",
            "ski", "surf", "sport",
        ],
    ),
    (
        "business",
        &[
            "startup",
            "entrepreneur",
            "investing",
            "finance",
            "marketing",
            "networking",
            "business",
        ],
    ),
];

/// All categories a single interest tag belongs to.
pub fn categories_for(interest: &str) -> Vec<&'static str> {
    CATEGORIES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| interest.contains(k)))
        .map(|(name, _)| *name)
        .collect()
}

/// The set of categories an interest list touches.
///
/// A BTreeSet keeps downstream iteration order deterministic.
pub fn category_set<S: AsRef<str>>(interests: &[S]) -> BTreeSet<&'static str> {
    interests
        .iter()
        .flat_map(|i| categories_for(i.as_ref()))
        .collect()
}

/// Position of a category in the canonical table, for tie-breaking.
pub fn category_rank(category: &str) -> usize {
    CATEGORIES
        .iter()
        .position(|(name, _)| *name == category)
        .unwrap_or(usize::MAX)
}
