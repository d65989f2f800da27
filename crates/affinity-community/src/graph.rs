//! Thresholded match graph.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use affinity_core::models::ScoreRecord;
use affinity_core::profile::{ProfileId, Score};

/// Undirected graph of profiles whose combined score clears a threshold.
///
/// Transient by design: never persisted or cached, because the threshold
/// is a frequent axis of variation and rebuilding is cheap.
pub struct MatchGraph {
    pub(crate) graph: UnGraph<ProfileId, Score>,
    pub(crate) index: HashMap<ProfileId, NodeIndex>,
    threshold: Score,
}

impl MatchGraph {
    /// Build from a population and its score records.
    ///
    /// Every population id becomes a node even without a qualifying edge,
    /// so isolation is observable downstream. Ids appearing only in
    /// records are added too — node order stays population-first, which
    /// keeps detection deterministic.
    pub fn build(population: &[ProfileId], records: &[ScoreRecord], threshold: Score) -> Self {
        let mut graph = UnGraph::new_undirected();
        let mut index: HashMap<ProfileId, NodeIndex> = HashMap::new();

        for id in population {
            index
                .entry(id.clone())
                .or_insert_with(|| graph.add_node(id.clone()));
        }

        for record in records {
            if record.combined < threshold {
                continue;
            }
            let a = *index
                .entry(record.pair.first().clone())
                .or_insert_with(|| graph.add_node(record.pair.first().clone()));
            let b = *index
                .entry(record.pair.second().clone())
                .or_insert_with(|| graph.add_node(record.pair.second().clone()));
            if graph.find_edge(a, b).is_none() {
                graph.add_edge(a, b, record.combined);
            }
        }

        Self {
            graph,
            index,
            threshold,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn threshold(&self) -> Score {
        self.threshold
    }

    pub fn contains(&self, id: &ProfileId) -> bool {
        self.index.contains_key(id)
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &ProfileId> {
        self.graph.node_indices().map(|idx| &self.graph[idx])
    }

    /// Whether two profiles are directly connected at this threshold.
    pub fn are_matched(&self, a: &ProfileId, b: &ProfileId) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }
}
