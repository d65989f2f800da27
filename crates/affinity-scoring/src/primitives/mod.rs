//! Single-dimension similarity primitives.
//!
//! Each returns a [`Score`] in [0, 1] and substitutes the neutral default
//! when its inputs are missing on either side. No primitive performs I/O.
//!
//! [`Score`]: affinity_core::profile::Score

pub mod age;
pub mod completeness;
pub mod interests;
pub mod location;
pub mod semantic;
