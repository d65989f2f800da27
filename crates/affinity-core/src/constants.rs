/// Affinity engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Neutral score substituted when a dimension's input is missing on either
/// side of a pair. "Unknown" is neither helpful nor harmful.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Default component weights. Must sum to 1.0.
pub const DEFAULT_WEIGHT_INTEREST: f64 = 0.35;
pub const DEFAULT_WEIGHT_SEMANTIC: f64 = 0.25;
pub const DEFAULT_WEIGHT_AGE: f64 = 0.15;
pub const DEFAULT_WEIGHT_LOCATION: f64 = 0.15;
pub const DEFAULT_WEIGHT_COMPLETENESS: f64 = 0.10;

/// Tolerance for the weight-sum check during config validation.
pub const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Quality tier cutoffs: combined score >= high is High, >= medium is Medium.
pub const DEFAULT_TIER_MEDIUM: f64 = 0.4;
pub const DEFAULT_TIER_HIGH: f64 = 0.7;

/// Age difference (years) considered fully compatible.
pub const DEFAULT_AGE_TOLERANCE_YEARS: u32 = 5;

/// Default bounded random perturbation applied when diversity is enabled.
pub const DEFAULT_DIVERSITY_FACTOR: f64 = 0.1;

/// Blend between exact interest overlap and category overlap.
pub const INTEREST_EXACT_BLEND: f64 = 0.6;
pub const INTEREST_CATEGORY_BLEND: f64 = 0.4;

/// Neutral importance for interests absent from a supplied weight map.
pub const NEUTRAL_INTEREST_WEIGHT: u8 = 3;

/// Fraction of community members that must hold an interest for it to
/// count as commonly shared.
pub const SHARED_INTEREST_FRACTION: f64 = 0.4;

/// Fraction of community members the largest geographic cluster must cover
/// before the community gets a location description.
pub const GEO_MAJORITY_FRACTION: f64 = 0.5;

/// Default number of top matches reported in a batch summary.
pub const DEFAULT_TOP_K: usize = 10;
