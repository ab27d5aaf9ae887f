//! Seeded shuffle followed by a train/test partition.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

use crate::error::DataError;
use crate::{Float, Label, Record};

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 1337;

/// The two disjoint halves produced by [`shuffle_and_split`].
#[derive(Debug, Clone, PartialEq)]
pub struct Split<L, F>
where
    L: Label,
    F: Float,
{
    pub train: Vec<Record<L, F>>,
    pub test: Vec<Record<L, F>>,
}

impl<L, F> Split<L, F>
where
    L: Label,
    F: Float,
{
    pub fn into_parts(self) -> (Vec<Record<L, F>>, Vec<Record<L, F>>) {
        (self.train, self.test)
    }
}

/// Index at which a sequence of `len` records is cut: `floor(ratio * len)`.
///
/// # Errors
///
/// Returns `DataError::InvalidRatio` if `ratio` is NaN, infinite or outside `[0, 1]`.
pub fn split_index(len: usize, ratio: f64) -> Result<usize, DataError> {
    if !ratio.is_finite() || !(0.0..=1.0).contains(&ratio) {
        return Err(DataError::InvalidRatio { ratio });
    }
    let index = (ratio * len as f64).floor() as usize;
    Ok(index.min(len))
}

/// Shuffles `records` with a Xoshiro256++ generator seeded from `seed`, then
/// splits them into train and test sets.
///
/// Records `[0, floor(ratio * len))` of the permuted sequence become the
/// training set and the rest the test set. The same seed, ratio and input
/// always give the same split. A ratio of `0.0` yields an empty training set
/// and `1.0` an empty test set.
///
/// # Errors
///
/// Returns `DataError::InvalidRatio` if `ratio` is not within `[0, 1]`.
pub fn shuffle_and_split<L, F>(
    records: Vec<Record<L, F>>,
    ratio: f64,
    seed: u64,
) -> Result<Split<L, F>, DataError>
where
    L: Label,
    F: Float,
{
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    shuffle_and_split_with_rng(records, ratio, &mut rng)
}

/// Same as [`shuffle_and_split`] but draws the permutation from a caller-owned generator.
pub fn shuffle_and_split_with_rng<L, F, R>(
    mut records: Vec<Record<L, F>>,
    ratio: f64,
    rng: &mut R,
) -> Result<Split<L, F>, DataError>
where
    L: Label,
    F: Float,
    R: Rng + ?Sized,
{
    let index = split_index(records.len(), ratio)?;

    records.shuffle(rng);
    let test = records.split_off(index);

    debug!(
        train = records.len(),
        test = test.len(),
        ratio,
        "split records"
    );
    Ok(Split {
        train: records,
        test,
    })
}
