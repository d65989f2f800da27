//! Output models the engine hands back to the surrounding product.

mod batch_summary;
mod community;
mod score_record;

pub use batch_summary::BatchSummary;
pub use community::{AgeSummary, Community, CommunityReport, DominantCategory, GeoCluster};
pub use score_record::{ComponentScores, QualityTier, ScoreRecord};
