//! # affinity-core
//!
//! Foundation crate for the Affinity compatibility engine.
//! Defines all types, traits, errors, config, constants, and the canonical
//! interest taxonomy. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod profile;
pub mod taxonomy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ScoringConfig;
pub use errors::{AffinityResult, ScoringError};
pub use models::{BatchSummary, Community, CommunityReport, QualityTier, ScoreRecord};
pub use profile::{PairKey, Profile, ProfileId, Score};
pub use traits::{LocationAdjacency, LocationProximity, PrefixAdjacency};
