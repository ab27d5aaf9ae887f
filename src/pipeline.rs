//! Split, classify every test record, score.

use rayon::prelude::*;
use tracing::{debug, info};

use holdout_helpers::{evaluate, shuffle_and_split, Evaluation, Float, L2Dist, Label, Record};
use k_nn::{KnnClassifier, KnnError};

use crate::config::HoldoutConfig;
use crate::error::HoldoutError;

/// Everything a hold-out run produces.
#[derive(Debug, Clone)]
pub struct HoldoutReport<L, F>
where
    L: Label,
    F: Float,
{
    /// Training records, in shuffled order.
    pub train: Vec<Record<L, F>>,
    /// Test records, in shuffled order, each with its prediction set.
    pub test: Vec<Record<L, F>>,
    pub evaluation: Evaluation<L, F>,
}

impl<L, F> HoldoutReport<L, F>
where
    L: Label,
    F: Float,
{
    pub fn accuracy(&self) -> f64 {
        self.evaluation.accuracy
    }

    pub fn misclassified(&self) -> &[Record<L, F>] {
        &self.evaluation.misclassified
    }
}

/// Runs one hold-out evaluation of a Euclidean k-NN classifier.
///
/// The records are shuffled with `config.seed()`, split at `config.ratio()`,
/// every test record gets the majority label of its `config.k()` nearest
/// training records, and the annotated test set is scored. Predictions left
/// over from an earlier run are cleared first.
///
/// # Errors
///
/// - [`HoldoutError::Knn`] for an invalid `k`, an empty training set, or a
///   `k` above the training set size under the strict policy.
/// - [`HoldoutError::Data`] for an invalid ratio or an empty test set.
pub fn run<L, F>(
    mut records: Vec<Record<L, F>>,
    config: &HoldoutConfig,
) -> Result<HoldoutReport<L, F>, HoldoutError>
where
    L: Label,
    F: Float,
{
    config.validate()?;
    for record in &mut records {
        record.clear_prediction();
    }

    let (train, mut test) = shuffle_and_split(records, config.ratio(), config.seed())?.into_parts();
    info!(
        train = train.len(),
        test = test.len(),
        k = config.k(),
        seed = config.seed(),
        "split dataset"
    );

    let classifier = KnnClassifier::new(config.k(), train, L2Dist)?
        .with_policy(config.policy())
        .with_tie_break(config.tie_break());
    classify_all(&classifier, &mut test, config.parallel())?;

    let evaluation = evaluate(&test)?;
    info!(
        accuracy = evaluation.accuracy,
        misclassified = evaluation.error_count(),
        "evaluated test set"
    );

    Ok(HoldoutReport {
        train: classifier.into_training_data(),
        test,
        evaluation,
    })
}

/// Predicts a label for each record of `test` and stores it on that record.
///
/// With `parallel`, labels are computed on the rayon pool; the training set is
/// only read, and each label is written back to its own record afterwards, so
/// both paths produce the same predictions.
///
/// # Errors
///
/// Fails on the first neighbor-search error, or if a record already carries a prediction.
pub fn classify_all<L, F>(
    classifier: &KnnClassifier<L, F, L2Dist>,
    test: &mut [Record<L, F>],
    parallel: bool,
) -> Result<(), HoldoutError>
where
    L: Label,
    F: Float,
{
    let predictions: Vec<L> = if parallel {
        test.par_iter()
            .map(|record| classifier.predict(record))
            .collect::<Result<_, KnnError>>()?
    } else {
        test.iter()
            .map(|record| classifier.predict(record))
            .collect::<Result<_, KnnError>>()?
    };
    debug!(count = predictions.len(), parallel, "classified test records");

    for (record, label) in test.iter_mut().zip(predictions) {
        record.set_prediction(label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_helpers::DataError;

    fn blobs() -> Vec<Record<i64, f64>> {
        let mut records = Vec::new();
        for i in 0..10 {
            let d = i as f64 * 0.1;
            records.push(Record::new(d, d, 1));
            records.push(Record::new(10.0 + d, 10.0 - d, 2));
            records.push(Record::new(-10.0 + d, 10.0 + d, 3));
        }
        records
    }

    #[test]
    fn test_run_separable_blobs() {
        let report = run(blobs(), &HoldoutConfig::new(3)).unwrap();
        assert_eq!(report.train.len(), 24);
        assert_eq!(report.test.len(), 6);
        assert_eq!(report.accuracy(), 1.0);
        assert!(report.misclassified().is_empty());
        assert!(report.test.iter().all(|r| r.prediction().is_some()));
        assert!(report.train.iter().all(|r| r.prediction().is_none()));
    }

    #[test]
    fn test_classify_all_parallel_matches_sequential() {
        let records = blobs();
        let (train, test) = shuffle_and_split(records, 0.5, 3).unwrap().into_parts();
        let classifier = KnnClassifier::new(5, train, L2Dist).unwrap();

        let mut sequential = test.clone();
        classify_all(&classifier, &mut sequential, false).unwrap();
        let mut parallel = test;
        classify_all(&classifier, &mut parallel, true).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_classify_all_refuses_second_write() {
        let (train, mut test) = shuffle_and_split(blobs(), 0.8, 1).unwrap().into_parts();
        let classifier = KnnClassifier::new(1, train, L2Dist).unwrap();
        classify_all(&classifier, &mut test, false).unwrap();
        let err = classify_all(&classifier, &mut test, false).unwrap_err();
        assert_eq!(err, HoldoutError::Data(DataError::PredictionAlreadySet));
    }

    #[test]
    fn test_run_clears_stale_predictions() {
        let mut records = blobs();
        for r in &mut records {
            r.set_prediction(99).unwrap();
        }
        let report = run(records, &HoldoutConfig::new(1)).unwrap();
        assert!(report.test.iter().all(|r| r.prediction() != Some(&99)));
    }
}
