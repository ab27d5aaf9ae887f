//! Hold-out evaluation of a k-nearest-neighbors classifier on labeled 2-D points.
//!
//! # Quick start
//!
//! ```
//! use holdout::{run, HoldoutConfig, Record};
//!
//! let records = vec![
//!     Record::new(0.0, 0.0, 1),
//!     Record::new(0.0, 1.0, 1),
//!     Record::new(5.0, 5.0, 2),
//!     Record::new(5.0, 6.0, 2),
//!     Record::new(10.0, 10.0, 1),
//! ];
//! let report = run(records, &HoldoutConfig::new(1).with_ratio(0.8)).unwrap();
//! assert_eq!(report.train.len(), 4);
//! assert_eq!(report.test.len(), 1);
//! assert!(report.accuracy() == 0.0 || report.accuracy() == 1.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! run()
//!   ├─ HoldoutConfig::validate()
//!   ├─ shuffle_and_split()       (holdout-helpers)
//!   ├─ classify_all()
//!   │    └─ KnnClassifier::predict()
//!   │         ├─ neighbors()     (k-nn)
//!   │         └─ majority_vote() (k-nn)
//!   └─ evaluate()                (holdout-helpers)
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::HoldoutConfig;
pub use error::HoldoutError;
pub use pipeline::{classify_all, run, HoldoutReport};

// Shared building blocks, so callers only need this crate.
pub use holdout_helpers::{
    euclidean, evaluate, shuffle_and_split, shuffle_and_split_with_rng, split_index,
    ConfusionMatrix, DataError, Distance, Evaluation, Float, L2Dist, Label, Record, Split,
    DEFAULT_SEED,
};
pub use k_nn::{
    majority_vote, neighbors, KnnClassifier, KnnError, Neighbor, NeighborPolicy, TieBreak,
};
