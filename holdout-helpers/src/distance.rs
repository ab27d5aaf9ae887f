use ndarray::ArrayView1;

use crate::{Float, Label, Record};

/// A dissimilarity measure between two feature vectors.
///
/// `rdistance` is a "relative" distance: it orders pairs the same way as
/// `distance` but may skip the final transform (for `L2Dist` it is the squared
/// Euclidean distance). Ranking code should compare `rdistance` values and
/// convert the survivors with `rdist_to_dist`.
pub trait Distance<F: Float>: Clone + Send + Sync {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F;

    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.distance(a, b)
    }

    fn rdist_to_dist(&self, rdist: F) -> F {
        rdist
    }
}

/// Euclidean (L2) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct L2Dist;

impl<F: Float> Distance<F> for L2Dist {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        self.rdistance(a, b).sqrt()
    }

    fn rdistance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| (x - y) * (x - y))
            .sum()
    }

    fn rdist_to_dist(&self, rdist: F) -> F {
        rdist.sqrt()
    }
}

/// Euclidean distance between the feature pairs of two records.
///
/// Symmetric, non-negative and zero exactly when the features are equal.
pub fn euclidean<L, F>(a: &Record<L, F>, b: &Record<L, F>) -> F
where
    L: Label,
    F: Float,
{
    L2Dist.distance(a.view(), b.view())
}
