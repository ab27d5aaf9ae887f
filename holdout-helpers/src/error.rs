//! Errors raised while splitting, annotating and scoring records.

/// Error type for the data-handling half of the pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataError {
    /// The train fraction must be a finite value in `[0, 1]`.
    #[error("train ratio must be within [0, 1], got {ratio}")]
    InvalidRatio {
        /// The rejected ratio.
        ratio: f64,
    },

    /// Evaluation was requested over zero records.
    #[error("no data to evaluate: the test set is empty")]
    EmptyTestSet,

    /// A test record reached the evaluator without a prediction.
    #[error("test record {index} has no prediction")]
    MissingPrediction {
        /// Position of the record in the evaluated slice.
        index: usize,
    },

    /// A prediction was written twice within one run.
    #[error("prediction already set for this record")]
    PredictionAlreadySet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_ratio() {
        let e = DataError::InvalidRatio { ratio: 1.5 };
        assert_eq!(e.to_string(), "train ratio must be within [0, 1], got 1.5");
    }

    #[test]
    fn error_empty_test_set() {
        assert_eq!(
            DataError::EmptyTestSet.to_string(),
            "no data to evaluate: the test set is empty"
        );
    }

    #[test]
    fn error_missing_prediction() {
        let e = DataError::MissingPrediction { index: 4 };
        assert_eq!(e.to_string(), "test record 4 has no prediction");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<DataError>();
    }
}
