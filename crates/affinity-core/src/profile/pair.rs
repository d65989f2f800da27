use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProfileId;

/// Canonical unordered pair of profile ids.
///
/// Ids are sorted on construction, so `(a, b)` and `(b, a)` produce the
/// same key and one record per pair is ever stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    first: ProfileId,
    second: ProfileId,
}

impl PairKey {
    /// Canonicalize an unordered pair. Panics in debug builds if both ids
    /// are identical — the driver never evaluates self-pairs.
    pub fn new(a: ProfileId, b: ProfileId) -> Self {
        debug_assert_ne!(a, b, "self-pair");
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn first(&self) -> &ProfileId {
        &self.first
    }

    pub fn second(&self) -> &ProfileId {
        &self.second
    }

    /// Whether either side of the pair is `id`.
    pub fn involves(&self, id: &ProfileId) -> bool {
        &self.first == id || &self.second == id
    }

    /// The other side of the pair, if `id` is one of the two.
    pub fn other(&self, id: &ProfileId) -> Option<&ProfileId> {
        if &self.first == id {
            Some(&self.second)
        } else if &self.second == id {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_order() {
        let ab = PairKey::new("a".into(), "b".into());
        let ba = PairKey::new("b".into(), "a".into());
        assert_eq!(ab, ba);
        assert_eq!(ab.first().as_str(), "a");
    }

    #[test]
    fn other_side_lookup() {
        let key = PairKey::new("x".into(), "y".into());
        assert_eq!(key.other(&"x".into()).unwrap().as_str(), "y");
        assert!(key.other(&"z".into()).is_none());
        assert!(key.involves(&"y".into()));
    }
}
