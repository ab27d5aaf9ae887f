use ndarray::{NdFloat, ScalarOperand};

use num_traits::FromPrimitive;

use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Sum;

// Include submodules
mod common;
mod confusion;
mod distance;
mod error;
mod evaluate;
mod split;

// Re-export types from submodules
pub use common::Record;
pub use confusion::ConfusionMatrix;
pub use distance::{euclidean, Distance, L2Dist};
pub use error::DataError;
pub use evaluate::{evaluate, Evaluation};
pub use split::{shuffle_and_split, shuffle_and_split_with_rng, split_index, Split, DEFAULT_SEED};

/// Scalar type for record features.
pub trait Float:
    NdFloat + FromPrimitive + Default + Sum + ScalarOperand + std::marker::Unpin
{
}

impl Float for f32 {}

impl Float for f64 {}

/// Class label carried by a [`Record`].
///
/// `Ord` is required so that ties in the vote and the rows of a
/// [`ConfusionMatrix`] have a deterministic order.
pub trait Label: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + Debug + Send + Sync {}
