//! Top-level error type of the hold-out pipeline.

use holdout_helpers::DataError;
use k_nn::KnnError;

/// Any failure of [`crate::run`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HoldoutError {
    /// Splitting, annotating or scoring failed.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Neighbor search or voting failed.
    #[error(transparent)]
    Knn(#[from] KnnError),
}
