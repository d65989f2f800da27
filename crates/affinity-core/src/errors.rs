/// Engine-wide result alias.
pub type AffinityResult<T> = Result<T, ScoringError>;

/// Scoring subsystem errors.
///
/// Missing profile fields are not errors — they resolve locally to the
/// neutral default and scoring continues.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("embedding dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("embedding present but zero-length")]
    ZeroLengthEmbedding,

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}
