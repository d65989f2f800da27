use serde::{Deserialize, Serialize};

use crate::profile::{PairKey, Score};

/// Summary statistics emitted after a batch scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub pair_count: usize,
    /// Mean combined score, 0.0 for an empty batch.
    pub average_score: f64,
    pub low_count: usize,
    pub medium_count: usize,
    pub high_count: usize,
    /// Best matches by combined score, descending. Ties keep pair
    /// insertion order, so summaries are deterministic.
    pub top_matches: Vec<(PairKey, Score)>,
}

impl BatchSummary {
    pub fn empty() -> Self {
        Self {
            pair_count: 0,
            average_score: 0.0,
            low_count: 0,
            medium_count: 0,
            high_count: 0,
            top_matches: Vec::new(),
        }
    }
}
