//! Profile snapshot types and score primitives.

mod base;
mod pair;
mod score;

pub use base::{Profile, ProfileId};
pub use pair::PairKey;
pub use score::Score;
