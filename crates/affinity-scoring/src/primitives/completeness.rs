//! Profile completeness bonus.
//!
//! Not a compatibility measure — a light signal rewarding pairs of fuller
//! profiles, since every other dimension degrades to neutral on missing
//! data.

use affinity_core::profile::{Profile, Score};

/// Average completeness of the two profiles in a pair.
pub fn bonus(a: &Profile, b: &Profile) -> Score {
    Score::new((a.completeness() + b.completeness()) / 2.0)
}
