use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Similarity score clamped to [0.0, 1.0].
///
/// Every primitive and the combined compatibility value use this type, so
/// the range invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score(f64);

impl Score {
    /// Fully compatible on this dimension.
    pub const MAX: Score = Score(1.0);
    /// No compatibility signal at all.
    pub const MIN: Score = Score(0.0);
    /// Neutral fallback when a dimension's input is unavailable.
    pub const NEUTRAL: Score = Score(crate::constants::NEUTRAL_SCORE);

    /// Create a new Score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(0.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(s: Score) -> Self {
        s.0
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Mul<f64> for Score {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}
