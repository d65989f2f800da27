//! # affinity-scoring
//!
//! Pairwise compatibility scoring: per-dimension similarity primitives, the
//! weighted aggregator with optional seedable diversity perturbation,
//! insight generation, and the rayon-parallel batch driver.
//!
//! Everything here is pure computation over in-memory snapshots — no I/O,
//! no shared mutable state between pair evaluations.

pub mod aggregator;
pub mod driver;
pub mod insights;
pub mod primitives;

pub use aggregator::{aggregate, AggregateOutcome};
pub use driver::{ScoreBatch, ScoringEngine};
