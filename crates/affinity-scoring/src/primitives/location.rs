//! Location proximity via the pluggable adjacency provider.

use affinity_core::profile::Score;
use affinity_core::traits::{LocationAdjacency, LocationProximity};

const ADJACENT_SCORE: f64 = 0.7;
const REGION_SCORE: f64 = 0.3;

/// Location proximity score.
///
/// The adjacency provider decides what "nearby" means; this only maps its
/// classification onto the score tiers. Missing location on either side is
/// neutral.
pub fn similarity(a: Option<&str>, b: Option<&str>, adjacency: &dyn LocationAdjacency) -> Score {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Score::NEUTRAL,
    };

    match adjacency.proximity(a, b) {
        LocationProximity::Same => Score::MAX,
        LocationProximity::Adjacent => Score::new(ADJACENT_SCORE),
        LocationProximity::Region => Score::new(REGION_SCORE),
        LocationProximity::Far => Score::MIN,
    }
}
