//! Human-readable match explanations.
//!
//! 1-4 short strings derived purely by thresholding component values — no
//! additional modeling. These are UI copy, not data; consumers wanting the
//! numbers read the component breakdown on the record.

use affinity_core::models::ComponentScores;
use affinity_core::profile::Profile;

use crate::primitives::interests;

const MAX_INSIGHTS: usize = 4;

/// Derive insight strings for a scored pair.
pub fn derive(a: &Profile, b: &Profile, components: &ComponentScores) -> Vec<String> {
    let mut insights = Vec::new();

    let common = interests::common_count(&a.interests, &b.interests);
    if common == 1 {
        insights.push("share 1 common interest".to_string());
    } else if common > 1 {
        insights.push(format!("share {common} common interests"));
    } else if components.interest.value() >= 0.3 {
        insights.push("interests overlap in theme".to_string());
    }

    if components.age.value() >= 1.0 {
        insights.push("very compatible age range".to_string());
    } else if components.age.value() >= 0.8 {
        insights.push("compatible age range".to_string());
    }

    if components.location.value() >= 1.0 {
        insights.push("same neighborhood".to_string());
    } else if components.location.value() >= 0.7 {
        insights.push("live close by".to_string());
    }

    if components.semantic.value() >= 0.75 {
        insights.push("similar outlook in their bios".to_string());
    }

    if insights.is_empty() {
        insights.push("few shared signals so far".to_string());
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}
