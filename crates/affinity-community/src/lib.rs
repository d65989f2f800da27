//! # affinity-community
//!
//! Downstream analysis stage: threshold score records into an undirected
//! match graph, find its connected components, and characterize each one
//! for discovery and "why matched" explanations.
//!
//! Cheap relative to scoring — rebuilt from scratch whenever the threshold
//! or population changes, since community ids are never durable.

pub mod characterize;
pub mod detector;
pub mod graph;

pub use detector::CommunityDetector;
pub use graph::MatchGraph;
