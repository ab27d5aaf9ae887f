use tracing::debug;

use crate::confusion::ConfusionMatrix;
use crate::error::DataError;
use crate::{Float, Label, Record};

/// Outcome of scoring an annotated test set.
#[derive(Debug, Clone)]
pub struct Evaluation<L, F>
where
    L: Label,
    F: Float,
{
    /// Fraction of records whose prediction equals their label, in `[0, 1]`.
    pub accuracy: f64,
    pub correct: usize,
    pub total: usize,
    /// Records with `label != prediction`, in their original order.
    pub misclassified: Vec<Record<L, F>>,
    pub confusion: ConfusionMatrix<L>,
}

impl<L, F> Evaluation<L, F>
where
    L: Label,
    F: Float,
{
    pub fn error_count(&self) -> usize {
        self.misclassified.len()
    }

    pub fn is_perfect(&self) -> bool {
        self.misclassified.is_empty()
    }
}

/// Scores a test set whose records all carry a prediction.
///
/// # Errors
///
/// Returns `DataError::EmptyTestSet` if `test` is empty and
/// `DataError::MissingPrediction` for the first record that was never classified.
pub fn evaluate<L, F>(test: &[Record<L, F>]) -> Result<Evaluation<L, F>, DataError>
where
    L: Label,
    F: Float,
{
    if test.is_empty() {
        return Err(DataError::EmptyTestSet);
    }

    let mut pairs = Vec::with_capacity(test.len());
    let mut misclassified = Vec::new();
    for (index, record) in test.iter().enumerate() {
        let prediction = record
            .prediction()
            .ok_or(DataError::MissingPrediction { index })?;
        if prediction != record.label() {
            misclassified.push(record.clone());
        }
        pairs.push((record.label(), prediction));
    }

    let total = test.len();
    let correct = total - misclassified.len();
    let accuracy = correct as f64 / total as f64;
    debug!(correct, total, accuracy, "evaluated test set");

    Ok(Evaluation {
        accuracy,
        correct,
        total,
        misclassified,
        confusion: ConfusionMatrix::from_pairs(pairs),
    })
}
