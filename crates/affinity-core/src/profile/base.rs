use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque profile identifier, owned by the surrounding product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Read-only member profile snapshot.
///
/// The engine never mutates profiles; the surrounding product owns them.
/// Interests are lowercase tag strings; the bio embedding, when present,
/// is precomputed elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub age: Option<u32>,
    /// Short geographic code, e.g. a postal code.
    pub location: Option<String>,
    pub interests: Vec<String>,
    pub bio: Option<String>,
    pub bio_embedding: Option<Vec<f32>>,
}

impl Profile {
    /// Create an empty profile with just an id.
    pub fn new(id: impl Into<ProfileId>) -> Self {
        Self {
            id: id.into(),
            age: None,
            location: None,
            interests: Vec::new(),
            bio: None,
            bio_embedding: None,
        }
    }

    pub fn has_interests(&self) -> bool {
        !self.interests.is_empty()
    }

    /// Fraction of {bio, interests, age, location} present, in [0, 1].
    /// Blank strings count as absent.
    pub fn completeness(&self) -> f64 {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.trim().is_empty());
        let mut present = 0u32;
        if filled(&self.bio) {
            present += 1;
        }
        if self.has_interests() {
            present += 1;
        }
        if self.age.is_some() {
            present += 1;
        }
        if filled(&self.location) {
            present += 1;
        }
        f64::from(present) / 4.0
    }
}

impl From<String> for ProfileId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
