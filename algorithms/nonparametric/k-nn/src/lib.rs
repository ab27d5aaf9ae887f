// These are the core components from our shared library.
use holdout_helpers::{Distance, Float, Label, Record};

// ndarray is used in the public function signatures.
use ndarray::ArrayView1;

mod error;
mod neighbors;
mod vote;

pub use error::KnnError;
pub use neighbors::{neighbors, neighbors_of, Neighbor, NeighborPolicy};
pub use vote::{majority_vote, tally, TieBreak};

/// A k-Nearest Neighbors (k-NN) classifier.
///
/// This classifier predicts the label of a new point by finding the `k`
/// closest records in its training set and taking a majority vote among their labels.
///
/// # Type Parameters
///
/// * `L`: The type of the label (e.g., `i64` or a custom `enum`).
/// * `F`: The float type for the features (e.g., `f32`, `f64`).
/// * `D`: The distance metric, which must implement the `holdout_helpers::Distance` trait.
#[derive(Debug, Clone)]
pub struct KnnClassifier<L, F, D>
where
    L: Label,
    F: Float,
    D: Distance<F>,
{
    k: usize,
    training_data: Vec<Record<L, F>>,
    distance: D,
    policy: NeighborPolicy,
    tie_break: TieBreak,
}

impl<L, F, D> KnnClassifier<L, F, D>
where
    L: Label,
    F: Float,
    D: Distance<F>,
{
    /// Creates a new k-NN classifier.
    ///
    /// # Arguments
    ///
    /// * `k`: The number of neighbors to consider for classification. Must be greater than 0.
    /// * `training_data`: The records the classifier searches for neighbors.
    /// * `distance`: An instance of a struct that implements the `Distance` trait (e.g., `L2Dist`).
    ///
    /// # Errors
    ///
    /// Returns `KnnError::InvalidK` if `k` is 0, as this is not a valid configuration.
    pub fn new(
        k: usize,
        training_data: Vec<Record<L, F>>,
        distance: D,
    ) -> Result<Self, KnnError> {
        if k == 0 {
            return Err(KnnError::InvalidK { k });
        }
        Ok(Self {
            k,
            training_data,
            distance,
            policy: NeighborPolicy::default(),
            tie_break: TieBreak::default(),
        })
    }

    /// Sets how a `k` larger than the training set is handled.
    pub fn with_policy(mut self, policy: NeighborPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the rule used when the vote is tied.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn training_data(&self) -> &[Record<L, F>] {
        &self.training_data
    }

    /// Gives the training records back, e.g. to report them next to the test set.
    pub fn into_training_data(self) -> Vec<Record<L, F>> {
        self.training_data
    }

    /// The `k` training records closest to `query`, nearest first.
    ///
    /// # Errors
    ///
    /// See [`neighbors()`].
    pub fn neighbors(&self, query: &Record<L, F>) -> Result<Vec<Neighbor<'_, L, F>>, KnnError> {
        neighbors(query, &self.training_data, self.k, &self.distance, self.policy)
    }

    /// Predicts the label for a record. Its own label and prediction are ignored.
    ///
    /// The record is not modified; store the result with `Record::set_prediction`.
    ///
    /// # Errors
    ///
    /// Returns `KnnError::EmptyTrainingSet` if the training data is empty.
    /// Returns `KnnError::KExceedsTrainingSet` if `k` is larger than the training set
    /// and the policy is `NeighborPolicy::Strict`.
    /// Returns `KnnError::InvalidDistance` if distance comparison fails (e.g., due to NaN values).
    pub fn predict(&self, query: &Record<L, F>) -> Result<L, KnnError> {
        let found = self.neighbors(query)?;
        majority_vote(&found, self.tie_break)
    }

    /// Predicts the label for a raw two-component feature vector.
    ///
    /// # Errors
    ///
    /// Returns `KnnError::DimensionMismatch` if `features` does not have two components,
    /// plus every error of [`KnnClassifier::predict`].
    pub fn predict_features(&self, features: ArrayView1<F>) -> Result<L, KnnError> {
        if features.len() != 2 {
            return Err(KnnError::DimensionMismatch {
                expected: 2,
                got: features.len(),
            });
        }
        let found = neighbors_of(
            features,
            &self.training_data,
            self.k,
            &self.distance,
            self.policy,
        )?;
        majority_vote(&found, self.tie_break)
    }
}
