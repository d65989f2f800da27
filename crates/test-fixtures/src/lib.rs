//! Shared test fixtures: profile builders and canned populations.

use affinity_core::profile::Profile;

/// Fluent builder for test profiles.
pub struct ProfileBuilder {
    profile: Profile,
}

/// Start building a profile with the given id.
pub fn profile(id: &str) -> ProfileBuilder {
    ProfileBuilder {
        profile: Profile::new(id),
    }
}

impl ProfileBuilder {
    pub fn age(mut self, age: u32) -> Self {
        self.profile.age = Some(age);
        self
    }

    pub fn location(mut self, code: &str) -> Self {
        self.profile.location = Some(code.to_string());
        self
    }

    pub fn interests(mut self, tags: &[&str]) -> Self {
        self.profile.interests = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn bio(mut self, text: &str) -> Self {
        self.profile.bio = Some(text.to_string());
        self
    }

    pub fn embedding(mut self, vector: Vec<f32>) -> Self {
        self.profile.bio_embedding = Some(vector);
        self
    }

    pub fn build(self) -> Profile {
        self.profile
    }
}

/// A population of `n` complete profiles with staggered attributes, for
/// driver and bench workloads. Deterministic.
pub fn dense_population(n: usize) -> Vec<Profile> {
    let interest_pool = [
        "hiking", "reading", "cooking", "yoga", "gaming", "painting", "running", "wine",
    ];
    (0..n)
        .map(|i| {
            let tags: Vec<&str> = (0..3).map(|k| interest_pool[(i + k) % 8]).collect();
            profile(&format!("member-{i}"))
                .age(22 + (i % 40) as u32)
                .location(&format!("94{:03}", i % 20))
                .interests(&tags)
                .bio("generated fixture bio")
                .embedding(vec![(i % 7) as f32 * 0.1, 1.0 - (i % 5) as f32 * 0.1, 0.4])
                .build()
        })
        .collect()
}
