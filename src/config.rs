//! Parameters of one hold-out evaluation run.

use holdout_helpers::{DataError, DEFAULT_SEED};
use k_nn::{KnnError, NeighborPolicy, TieBreak};

use crate::error::HoldoutError;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Configuration for [`crate::run`].
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use holdout::HoldoutConfig;
///
/// let config = HoldoutConfig::new(3).with_ratio(0.75).with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct HoldoutConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
    /// Fraction of the shuffled records used for training.
    ratio: f64,
    /// Seed of the shuffle generator.
    seed: u64,
    policy: NeighborPolicy,
    tie_break: TieBreak,
    /// Classify test records on the rayon thread pool.
    parallel: bool,
}

impl HoldoutConfig {
    /// Creates a configuration with the given k.
    ///
    /// Defaults: `ratio = 0.8`, `seed = 1337`, strict neighbor policy,
    /// smallest-label tie-break, sequential classification.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ratio: 0.8,
            seed: DEFAULT_SEED,
            policy: NeighborPolicy::Strict,
            tie_break: TieBreak::SmallestLabel,
            parallel: false,
        }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_policy(mut self, policy: NeighborPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn policy(&self) -> NeighborPolicy {
        self.policy
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Checks the parameters that do not depend on the data.
    ///
    /// `k` against the training set size is checked later, during neighbor search.
    pub fn validate(&self) -> Result<(), HoldoutError> {
        if self.k < 1 {
            return Err(KnnError::InvalidK { k: self.k }.into());
        }
        if !self.ratio.is_finite() || !(0.0..=1.0).contains(&self.ratio) {
            return Err(DataError::InvalidRatio { ratio: self.ratio }.into());
        }
        Ok(())
    }
}

impl Default for HoldoutConfig {
    fn default() -> Self {
        Self::new(4)
    }
}
