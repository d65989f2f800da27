//! Age compatibility ladder.

use affinity_core::profile::Score;

/// Scores for each multiple of the tolerance window. The floor is 0.1,
/// never 0 — large age gaps stay discoverable in the long tail.
const LADDER: [f64; 4] = [1.0, 0.8, 0.5, 0.3];
const FLOOR: f64 = 0.1;

/// Age compatibility given a tolerance window in years.
///
/// |diff| within 1x tolerance is fully compatible, then the ladder steps
/// down at 2x, 3x, and 4x. Missing age on either side is neutral.
pub fn similarity(a: Option<u32>, b: Option<u32>, tolerance_years: u32) -> Score {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Score::NEUTRAL,
    };

    let diff = a.abs_diff(b);
    for (step, &score) in LADDER.iter().enumerate() {
        if diff <= tolerance_years * (step as u32 + 1) {
            return Score::new(score);
        }
    }
    Score::new(FLOOR)
}
