//! Multi-signal community characterization.
//!
//! Signals, in report order: dominant interest category (shared taxonomy),
//! commonly shared interests, geographic concentration, age range, viewer
//! membership. All are pure tallies over member snapshots.

use std::collections::HashMap;

use affinity_core::constants::{GEO_MAJORITY_FRACTION, SHARED_INTEREST_FRACTION};
use affinity_core::models::{AgeSummary, Community, DominantCategory, GeoCluster};
use affinity_core::profile::{Profile, ProfileId};
use affinity_core::taxonomy;
use affinity_core::traits::{LocationAdjacency, LocationProximity};

/// Maximum literal interests reported per signal.
const TOP_INTERESTS: usize = 3;

/// Characterize one component. Members without a known profile snapshot
/// still count toward size but contribute no signals.
pub fn community(
    id: usize,
    members: Vec<ProfileId>,
    profiles: &HashMap<&ProfileId, &Profile>,
    viewer: Option<&ProfileId>,
    adjacency: &dyn LocationAdjacency,
) -> Community {
    let snapshots: Vec<&Profile> = members
        .iter()
        .filter_map(|id| profiles.get(id).copied())
        .collect();

    let contains_viewer = viewer.is_some_and(|v| members.contains(v));

    Community {
        id,
        dominant_category: dominant_category(&snapshots),
        shared_interests: shared_interests(&snapshots, members.len()),
        geo_cluster: geo_cluster(&snapshots, members.len(), adjacency),
        age_summary: age_summary(&snapshots),
        contains_viewer,
        members,
    }
}

/// The taxonomy category with the highest raw interest-hit tally, plus the
/// most frequent literal interests behind it. Ties break by canonical
/// taxonomy order.
fn dominant_category(snapshots: &[&Profile]) -> Option<DominantCategory> {
    let mut tallies: HashMap<&'static str, usize> = HashMap::new();
    for profile in snapshots {
        for interest in &profile.interests {
            for category in taxonomy::categories_for(interest) {
                *tallies.entry(category).or_insert(0) += 1;
            }
        }
    }

    let (&category, _) = tallies
        .iter()
        .max_by(|(a_cat, a_n), (b_cat, b_n)| {
            a_n.cmp(b_n)
                .then_with(|| taxonomy::category_rank(b_cat).cmp(&taxonomy::category_rank(a_cat)))
        })?;

    // Literal interests driving the category, most frequent first.
    let mut driving: HashMap<&str, usize> = HashMap::new();
    for profile in snapshots {
        for interest in &profile.interests {
            if taxonomy::categories_for(interest).contains(&category) {
                *driving.entry(interest).or_insert(0) += 1;
            }
        }
    }
    let mut ranked: Vec<(&str, usize)> = driving.into_iter().collect();
    ranked.sort_by(|(a_tag, a_n), (b_tag, b_n)| b_n.cmp(a_n).then_with(|| a_tag.cmp(b_tag)));

    Some(DominantCategory {
        category: category.to_string(),
        top_interests: ranked
            .into_iter()
            .take(TOP_INTERESTS)
            .map(|(tag, _)| tag.to_string())
            .collect(),
    })
}

/// Interests held by at least the shared fraction of members (and by at
/// least two of them), most common first, alphabetical on ties.
fn shared_interests(snapshots: &[&Profile], member_count: usize) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for profile in snapshots {
        for interest in &profile.interests {
            *counts.entry(interest).or_insert(0) += 1;
        }
    }

    let mut qualifying: Vec<(&str, usize)> = counts
        .into_iter()
        .filter(|(_, n)| *n >= 2 && *n as f64 / member_count as f64 >= SHARED_INTEREST_FRACTION)
        .collect();
    qualifying.sort_by(|(a_tag, a_n), (b_tag, b_n)| b_n.cmp(a_n).then_with(|| a_tag.cmp(b_tag)));

    qualifying
        .into_iter()
        .take(TOP_INTERESTS)
        .map(|(tag, _)| tag.to_string())
        .collect()
}

/// Greedy adjacency clustering over member location codes. Described only
/// when the largest cluster is a majority of the whole community.
fn geo_cluster(
    snapshots: &[&Profile],
    member_count: usize,
    adjacency: &dyn LocationAdjacency,
) -> Option<GeoCluster> {
    let codes: Vec<&str> = snapshots
        .iter()
        .filter_map(|p| p.location.as_deref())
        .collect();
    if codes.is_empty() {
        return None;
    }

    let mut clusters: Vec<Vec<&str>> = Vec::new();
    for code in codes {
        let near = clusters.iter_mut().find(|cluster| {
            matches!(
                adjacency.proximity(cluster[0], code),
                LocationProximity::Same | LocationProximity::Adjacent
            )
        });
        match near {
            Some(cluster) => cluster.push(code),
            None => clusters.push(vec![code]),
        }
    }

    let largest = clusters.into_iter().max_by_key(Vec::len)?;
    if (largest.len() as f64 / member_count as f64) < GEO_MAJORITY_FRACTION {
        return None;
    }

    let mut distinct: Vec<&str> = largest.clone();
    distinct.sort_unstable();
    distinct.dedup();

    let description = if distinct.len() == 1 {
        distinct[0].to_string()
    } else {
        format!("{}*", common_prefix(&distinct))
    };

    Some(GeoCluster {
        description,
        member_count: largest.len(),
    })
}

fn common_prefix(codes: &[&str]) -> String {
    let first = codes[0];
    let len = codes
        .iter()
        .map(|code| {
            first
                .chars()
                .zip(code.chars())
                .take_while(|(a, b)| a == b)
                .count()
        })
        .min()
        .unwrap_or(0);
    first.chars().take(len).collect()
}

fn age_summary(snapshots: &[&Profile]) -> Option<AgeSummary> {
    let ages: Vec<u32> = snapshots.iter().filter_map(|p| p.age).collect();
    if ages.is_empty() {
        return None;
    }
    Some(AgeSummary {
        min: *ages.iter().min().unwrap(),
        max: *ages.iter().max().unwrap(),
        mean: ages.iter().map(|&a| f64::from(a)).sum::<f64>() / ages.len() as f64,
    })
}
