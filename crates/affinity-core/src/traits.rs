//! Pluggable seams the engine depends on but does not own.

use serde::{Deserialize, Serialize};

/// How close two geographic codes are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationProximity {
    /// Identical code.
    Same,
    /// Nearby, e.g. neighboring postal zones.
    Adjacent,
    /// Same wider region.
    Region,
    /// No meaningful proximity.
    Far,
}

/// Nearby predicate over geographic codes.
///
/// The real adjacency data (postal geometry, drive times, ...) lives in the
/// surrounding product; the engine only consumes the classification. Both
/// the location primitive and community geo-clustering use the same
/// provider so "nearby" means one thing per run.
pub trait LocationAdjacency: Send + Sync {
    fn proximity(&self, a: &str, b: &str) -> LocationProximity;
}

/// Prefix-based adjacency over postal-style codes.
///
/// Full match is Same, a shared 3-character prefix is Adjacent, a shared
/// leading character is Region. Good enough for numeric postal systems
/// where nearby zones share prefixes; products with real geography plug in
/// their own provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixAdjacency;

impl LocationAdjacency for PrefixAdjacency {
    fn proximity(&self, a: &str, b: &str) -> LocationProximity {
        if a.is_empty() || b.is_empty() {
            return LocationProximity::Far;
        }
        if a == b {
            return LocationProximity::Same;
        }
        let shared = a
            .chars()
            .zip(b.chars())
            .take_while(|(x, y)| x == y)
            .count();
        if shared >= 3 {
            LocationProximity::Adjacent
        } else if shared >= 1 {
            LocationProximity::Region
        } else {
            LocationProximity::Far
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_postal_prefixes() {
        let adj = PrefixAdjacency;
        assert_eq!(adj.proximity("94110", "94110"), LocationProximity::Same);
        assert_eq!(adj.proximity("94110", "94117"), LocationProximity::Adjacent);
        assert_eq!(adj.proximity("94110", "90210"), LocationProximity::Region);
        assert_eq!(adj.proximity("94110", "10001"), LocationProximity::Far);
    }

    #[test]
    fn empty_codes_are_far() {
        let adj = PrefixAdjacency;
        assert_eq!(adj.proximity("", "94110"), LocationProximity::Far);
    }
}
