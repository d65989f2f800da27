//! Connected-component detection over the match graph.

use std::collections::{HashMap, VecDeque};

use petgraph::graph::NodeIndex;
use tracing::info;

use affinity_core::models::CommunityReport;
use affinity_core::profile::{Profile, ProfileId};
use affinity_core::traits::{LocationAdjacency, PrefixAdjacency};

use crate::characterize;
use crate::graph::MatchGraph;

/// Finds and characterizes communities in a match graph.
///
/// Stateless across invocations; geographic clustering uses the same
/// adjacency provider as location scoring so "nearby" means one thing.
pub struct CommunityDetector {
    adjacency: Box<dyn LocationAdjacency>,
}

impl CommunityDetector {
    pub fn new() -> Self {
        Self {
            adjacency: Box::new(PrefixAdjacency),
        }
    }

    pub fn with_adjacency(adjacency: Box<dyn LocationAdjacency>) -> Self {
        Self { adjacency }
    }

    /// Detect connected components and characterize each.
    ///
    /// BFS from each unvisited node in insertion order, so community ids
    /// and member order are deterministic for a given input order — and
    /// only for that: ids are renumbered freely between runs. Singleton
    /// components are reported as isolated nodes, not communities.
    /// `viewer` marks the community containing the current viewer, when
    /// one is distinguished.
    pub fn detect(
        &self,
        graph: &MatchGraph,
        profiles: &[Profile],
        viewer: Option<&ProfileId>,
    ) -> CommunityReport {
        let by_id: HashMap<&ProfileId, &Profile> =
            profiles.iter().map(|p| (&p.id, p)).collect();

        // Node indices are contiguous — the graph is built once, nothing
        // is ever removed.
        let mut visited = vec![false; graph.graph.node_count()];
        let mut communities = Vec::new();
        let mut isolated = Vec::new();

        for start in graph.graph.node_indices() {
            if visited[start.index()] {
                continue;
            }
            let members = self.bfs_component(graph, start, &mut visited);

            if members.len() == 1 {
                isolated.push(members.into_iter().next().unwrap());
            } else {
                let id = communities.len();
                communities.push(characterize::community(
                    id,
                    members,
                    &by_id,
                    viewer,
                    self.adjacency.as_ref(),
                ));
            }
        }

        info!(
            communities = communities.len(),
            isolated = isolated.len(),
            threshold = %graph.threshold(),
            "detected communities"
        );

        CommunityReport {
            communities,
            isolated,
        }
    }

    /// Collect one component's member ids in BFS discovery order.
    fn bfs_component(
        &self,
        graph: &MatchGraph,
        start: NodeIndex,
        visited: &mut [bool],
    ) -> Vec<ProfileId> {
        let mut members = Vec::new();
        let mut queue = VecDeque::from([start]);
        visited[start.index()] = true;

        while let Some(node) = queue.pop_front() {
            members.push(graph.graph[node].clone());

            // petgraph yields neighbors in reverse edge-insertion order;
            // sort by node index to keep traversal deterministic.
            let mut neighbors: Vec<NodeIndex> = graph
                .graph
                .neighbors(node)
                .filter(|n| !visited[n.index()])
                .collect();
            neighbors.sort_unstable();
            for neighbor in neighbors {
                visited[neighbor.index()] = true;
                queue.push_back(neighbor);
            }
        }

        members
    }
}

impl Default for CommunityDetector {
    fn default() -> Self {
        Self::new()
    }
}
