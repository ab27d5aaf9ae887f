//! Errors that can occur when using the k-NN classifier.

/// Error type for neighbor search and voting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KnnError {
    /// k cannot be zero for a k-NN classifier.
    #[error("k must be >= 1, got {k}")]
    InvalidK { k: usize },

    /// Cannot search neighbors in an empty training set.
    #[error("cannot predict with an empty training set")]
    EmptyTrainingSet,

    /// More neighbors were requested than there are training records.
    #[error("k = {k} exceeds the {available} available training records")]
    KExceedsTrainingSet { k: usize, available: usize },

    /// Invalid distance comparison (NaN values in the features).
    #[error("invalid distance comparison (NaN in the features)")]
    InvalidDistance,

    /// A vote was requested over zero neighbors.
    #[error("cannot vote without neighbors")]
    NoNeighbors,

    /// A raw feature query did not have two components.
    #[error("expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
