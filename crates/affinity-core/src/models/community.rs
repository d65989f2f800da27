use serde::{Deserialize, Serialize};

use crate::profile::ProfileId;

/// Dominant interest category of a community, with the literal interests
/// driving it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominantCategory {
    pub category: String,
    /// 1-3 most frequent member interests behind the category.
    pub top_interests: Vec<String>,
}

/// Geographic concentration of a community, reported only when a majority
/// of members fall into one cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoCluster {
    /// A single code, or a generalized prefix description like "941*".
    pub description: String,
    pub member_count: usize,
}

/// Age spread across community members.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeSummary {
    pub min: u32,
    pub max: u32,
    pub mean: f64,
}

impl AgeSummary {
    /// "34" for a single age, "28-41 (avg 33)" for a range.
    pub fn describe(&self) -> String {
        if self.min == self.max {
            format!("{}", self.min)
        } else {
            format!("{}-{} (avg {:.0})", self.min, self.max, self.mean)
        }
    }
}

/// One connected component of the match graph, characterized.
///
/// Ids are fresh per detection pass — threshold changes renumber, merge,
/// and split communities freely, so they must never be persisted as
/// durable identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    pub id: usize,
    /// Members in traversal discovery order.
    pub members: Vec<ProfileId>,
    pub dominant_category: Option<DominantCategory>,
    /// Interests held by a meaningful fraction of members, most common
    /// first.
    pub shared_interests: Vec<String>,
    pub geo_cluster: Option<GeoCluster>,
    pub age_summary: Option<AgeSummary>,
    /// Whether the distinguished viewer profile belongs here.
    pub contains_viewer: bool,
}

impl Community {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Result of one graph-building + detection pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityReport {
    pub communities: Vec<Community>,
    /// Nodes with no qualifying edge at the requested threshold. Reported,
    /// never silently dropped and never given spurious communities.
    pub isolated: Vec<ProfileId>,
}

impl CommunityReport {
    pub fn isolated_count(&self) -> usize {
        self.isolated.len()
    }

    /// Total profiles covered: community members plus isolated nodes.
    pub fn total_nodes(&self) -> usize {
        self.communities.iter().map(Community::size).sum::<usize>() + self.isolated.len()
    }
}
