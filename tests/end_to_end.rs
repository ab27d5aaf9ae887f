use approx::assert_abs_diff_eq;
use holdout::{
    euclidean, run, DataError, HoldoutConfig, HoldoutError, KnnError, NeighborPolicy, Record,
    DEFAULT_SEED,
};

fn five_records() -> Vec<Record<i64, f64>> {
    vec![
        Record::new(0.0, 0.0, 1),
        Record::new(0.0, 1.0, 1),
        Record::new(5.0, 5.0, 2),
        Record::new(5.0, 6.0, 2),
        Record::new(10.0, 10.0, 1),
    ]
}

#[test]
fn test_five_record_example() {
    let config = HoldoutConfig::new(1).with_ratio(0.8).with_seed(DEFAULT_SEED);
    let report = run(five_records(), &config).unwrap();

    assert_eq!(report.train.len(), 4);
    assert_eq!(report.test.len(), 1);

    // The prediction is the label of the nearest training record; the first
    // one in training order wins an exact tie.
    let query = &report.test[0];
    let mut nearest = &report.train[0];
    for candidate in &report.train[1..] {
        if euclidean(candidate, query) < euclidean(nearest, query) {
            nearest = candidate;
        }
    }
    assert_eq!(query.prediction(), Some(nearest.label()));

    let expected = if query.label() == nearest.label() { 1.0 } else { 0.0 };
    assert_abs_diff_eq!(report.accuracy(), expected);
    assert_eq!(report.misclassified().len(), if expected == 1.0 { 0 } else { 1 });
}

#[test]
fn test_runs_are_reproducible() {
    let config = HoldoutConfig::new(1);
    let a = run(five_records(), &config).unwrap();
    let b = run(five_records(), &config).unwrap();
    assert_eq!(a.train, b.train);
    assert_eq!(a.test, b.test);
    assert_eq!(a.accuracy(), b.accuracy());
}

#[test]
fn test_k_zero_is_rejected() {
    let result = run(five_records(), &HoldoutConfig::new(0));
    assert!(matches!(
        result,
        Err(HoldoutError::Knn(KnnError::InvalidK { k: 0 }))
    ));
}

#[test]
fn test_k_above_training_size_is_rejected() {
    let result = run(five_records(), &HoldoutConfig::new(5).with_ratio(0.8));
    assert!(matches!(
        result,
        Err(HoldoutError::Knn(KnnError::KExceedsTrainingSet { k: 5, available: 4 }))
    ));
}

#[test]
fn test_truncate_policy_allows_large_k() {
    let config = HoldoutConfig::new(5)
        .with_ratio(0.8)
        .with_policy(NeighborPolicy::Truncate);
    let report = run(five_records(), &config).unwrap();
    assert_eq!(report.test.len(), 1);
    assert!(report.test[0].prediction().is_some());
}

#[test]
fn test_ratio_one_has_nothing_to_evaluate() {
    let result = run(five_records(), &HoldoutConfig::new(1).with_ratio(1.0));
    assert_eq!(result.unwrap_err(), HoldoutError::Data(DataError::EmptyTestSet));
}

#[test]
fn test_ratio_zero_has_no_training_data() {
    let result = run(five_records(), &HoldoutConfig::new(1).with_ratio(0.0));
    assert_eq!(result.unwrap_err(), HoldoutError::Knn(KnnError::EmptyTrainingSet));
}

#[test]
fn test_ratio_out_of_range_is_rejected() {
    let result = run(five_records(), &HoldoutConfig::new(1).with_ratio(1.2));
    assert!(matches!(
        result,
        Err(HoldoutError::Data(DataError::InvalidRatio { .. }))
    ));
}

#[test]
fn test_empty_input() {
    let result = run(Vec::<Record<i64, f64>>::new(), &HoldoutConfig::new(1));
    assert_eq!(result.unwrap_err(), HoldoutError::Data(DataError::EmptyTestSet));
}
