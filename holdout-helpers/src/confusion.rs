//! Confusion matrix over arbitrary ordered labels.

use std::collections::BTreeSet;

use crate::Label;

/// Counts of (true label, predicted label) pairs.
///
/// Rows and columns follow the sorted union of every label seen on either
/// side, so a label that is only ever predicted still gets a column.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<L: Label> {
    labels: Vec<L>,
    counts: Vec<Vec<usize>>,
}

impl<L: Label> ConfusionMatrix<L> {
    /// Builds the matrix from `(truth, prediction)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a L, &'a L)>,
        L: 'a,
    {
        let pairs: Vec<(&L, &L)> = pairs.into_iter().collect();
        let labels: Vec<L> = pairs
            .iter()
            .flat_map(|&(t, p)| [t, p])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect();

        let n = labels.len();
        let mut counts = vec![vec![0usize; n]; n];
        for (t, p) in pairs {
            // Both labels were inserted above, so the lookups cannot miss.
            if let (Ok(i), Ok(j)) = (labels.binary_search(t), labels.binary_search(p)) {
                counts[i][j] += 1;
            }
        }
        Self { labels, counts }
    }

    /// Sorted labels indexing the rows and columns.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Number of records with true label `truth` predicted as `predicted`.
    pub fn count(&self, truth: &L, predicted: &L) -> usize {
        match (self.labels.binary_search(truth), self.labels.binary_search(predicted)) {
            (Ok(i), Ok(j)) => self.counts[i][j],
            _ => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flat_map(|row| row.iter()).sum()
    }

    pub fn correct(&self) -> usize {
        (0..self.labels.len()).map(|i| self.counts[i][i]).sum()
    }

    /// Overall accuracy, 0.0 for an empty matrix.
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.correct() as f64 / total as f64
        }
    }

    /// Fraction of records truly labeled `label` that were predicted as such.
    ///
    /// `None` if no record carries `label` as its true label.
    pub fn recall(&self, label: &L) -> Option<f64> {
        let i = self.labels.binary_search(label).ok()?;
        let support: usize = self.counts[i].iter().sum();
        (support > 0).then(|| self.counts[i][i] as f64 / support as f64)
    }

    /// Fraction of predictions of `label` that were correct.
    ///
    /// `None` if `label` was never predicted.
    pub fn precision(&self, label: &L) -> Option<f64> {
        let j = self.labels.binary_search(label).ok()?;
        let predicted: usize = self.counts.iter().map(|row| row[j]).sum();
        (predicted > 0).then(|| self.counts[j][j] as f64 / predicted as f64)
    }
}
