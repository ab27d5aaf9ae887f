//! Ranking of training records by distance to a query point.

use std::cmp::Ordering;

use ndarray::ArrayView1;
use holdout_helpers::{Distance, Float, Label, Record};
use tracing::trace;

use crate::error::KnnError;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// What to do when `k` exceeds the number of training records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum NeighborPolicy {
    /// Fail with `KnnError::KExceedsTrainingSet`.
    #[default]
    Strict,
    /// Return all training records instead of k.
    Truncate,
}

/// A training record paired with its distance to one query.
///
/// Only valid for the query that produced it; the record itself is never modified.
#[derive(Debug, Clone)]
pub struct Neighbor<'a, L, F>
where
    L: Label,
    F: Float,
{
    pub record: &'a Record<L, F>,
    pub distance: F,
}

impl<L, F> Neighbor<'_, L, F>
where
    L: Label,
    F: Float,
{
    pub fn label(&self) -> &L {
        self.record.label()
    }
}

/// Returns the `k` training records closest to `query`, nearest first.
///
/// Equidistant records keep their relative order from `train`, so a tie at
/// the k-th place is won by the record that appears earlier in `train`.
///
/// # Errors
///
/// - `KnnError::InvalidK` if `k` is 0.
/// - `KnnError::EmptyTrainingSet` if `train` is empty.
/// - `KnnError::KExceedsTrainingSet` if `k > train.len()` under `NeighborPolicy::Strict`.
/// - `KnnError::InvalidDistance` if any distance is NaN.
pub fn neighbors<'a, L, F, D>(
    query: &Record<L, F>,
    train: &'a [Record<L, F>],
    k: usize,
    metric: &D,
    policy: NeighborPolicy,
) -> Result<Vec<Neighbor<'a, L, F>>, KnnError>
where
    L: Label,
    F: Float,
    D: Distance<F>,
{
    neighbors_of(query.view(), train, k, metric, policy)
}

/// Like [`neighbors`], for a raw feature view instead of a record.
pub fn neighbors_of<'a, L, F, D>(
    query: ArrayView1<F>,
    train: &'a [Record<L, F>],
    k: usize,
    metric: &D,
    policy: NeighborPolicy,
) -> Result<Vec<Neighbor<'a, L, F>>, KnnError>
where
    L: Label,
    F: Float,
    D: Distance<F>,
{
    if k == 0 {
        return Err(KnnError::InvalidK { k });
    }
    if train.is_empty() {
        return Err(KnnError::EmptyTrainingSet);
    }
    let take = match policy {
        NeighborPolicy::Strict if k > train.len() => {
            return Err(KnnError::KExceedsTrainingSet {
                k,
                available: train.len(),
            });
        }
        NeighborPolicy::Strict => k,
        NeighborPolicy::Truncate => k.min(train.len()),
    };

    // Rank on the relative distance; only the survivors pay for the conversion.
    let mut scored: Vec<(F, &Record<L, F>)> = train
        .iter()
        .map(|record| (metric.rdistance(record.view(), query), record))
        .collect();
    if scored.iter().any(|(d, _)| d.is_nan()) {
        return Err(KnnError::InvalidDistance);
    }

    // `sort_by` is stable: ties keep training order.
    scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    scored.truncate(take);

    trace!(k, returned = scored.len(), "selected neighbors");
    Ok(scored
        .into_iter()
        .map(|(rdist, record)| Neighbor {
            record,
            distance: metric.rdist_to_dist(rdist),
        })
        .collect())
}
