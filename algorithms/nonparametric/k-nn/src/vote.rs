//! Majority vote over a neighbor set.

use std::collections::BTreeMap;

use holdout_helpers::{Float, Label, Record};

use crate::error::KnnError;
use crate::neighbors::Neighbor;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Rule applied when several labels share the highest vote count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum TieBreak {
    /// Pick the smallest of the tied labels.
    #[default]
    SmallestLabel,
    /// Pick the tied label whose first neighbor is closest to the query.
    NearestNeighbor,
}

/// Counts how many neighbors carry each label.
pub fn tally<'a, L, F>(neighbors: &[Neighbor<'a, L, F>]) -> BTreeMap<&'a L, usize>
where
    L: Label,
    F: Float,
{
    let mut votes = BTreeMap::new();
    for n in neighbors {
        let record: &'a Record<L, F> = n.record;
        *votes.entry(record.label()).or_insert(0) += 1;
    }
    votes
}

/// Returns the most frequent label among `neighbors`.
///
/// `neighbors` is expected in ascending distance order, as produced by
/// [`crate::neighbors()`]; `TieBreak::NearestNeighbor` relies on it.
///
/// # Errors
///
/// Returns `KnnError::NoNeighbors` if `neighbors` is empty.
pub fn majority_vote<L, F>(neighbors: &[Neighbor<'_, L, F>], tie_break: TieBreak) -> Result<L, KnnError>
where
    L: Label,
    F: Float,
{
    let votes = tally(neighbors);
    let max_votes = votes.values().copied().max().ok_or(KnnError::NoNeighbors)?;

    let winner = match tie_break {
        // BTreeMap iterates in ascending label order.
        TieBreak::SmallestLabel => votes
            .iter()
            .find(|&(_, &count)| count == max_votes)
            .map(|(&label, _)| label),
        TieBreak::NearestNeighbor => neighbors
            .iter()
            .map(|n| n.record.label())
            .find(|label| votes.get(label) == Some(&max_votes)),
    };

    winner.cloned().ok_or(KnnError::NoNeighbors)
}
