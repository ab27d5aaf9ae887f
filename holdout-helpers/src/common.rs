use ndarray::ArrayView1;
use crate::error::DataError;
use crate::{Float, Label};
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A single labeled point in the plane.
///
/// L: The type of the label (usually an integer class id).
/// F: The float type for the features (e.g., f32, f64).
///
/// The features and the label are fixed at construction. The prediction
/// starts unset and may be written once per evaluation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Record<L, F>
where
    L: Label,
    F: Float,
{
    features: [F; 2],
    label: L,
    prediction: Option<L>,
}

impl<L, F> Record<L, F>
where
    L: Label,
    F: Float,
{
    pub fn new(x1: F, x2: F, label: L) -> Self {
        Record {
            features: [x1, x2],
            label,
            prediction: None,
        }
    }

    pub fn features(&self) -> [F; 2] {
        self.features
    }

    pub fn x1(&self) -> F {
        self.features[0]
    }

    pub fn x2(&self) -> F {
        self.features[1]
    }

    /// Borrows the features as a 1-D `ndarray` view for the [`crate::Distance`] trait.
    pub fn view(&self) -> ArrayView1<'_, F> {
        ArrayView1::from(&self.features[..])
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn prediction(&self) -> Option<&L> {
        self.prediction.as_ref()
    }

    /// Stores the classifier's output for this record.
    ///
    /// # Errors
    ///
    /// Returns `DataError::PredictionAlreadySet` if a prediction was already
    /// written during this run. Call [`Record::clear_prediction`] to start a new run.
    pub fn set_prediction(&mut self, prediction: L) -> Result<(), DataError> {
        if self.prediction.is_some() {
            return Err(DataError::PredictionAlreadySet);
        }
        self.prediction = Some(prediction);
        Ok(())
    }

    pub fn clear_prediction(&mut self) {
        self.prediction = None;
    }

    /// `Some(true)` when the prediction matches the label, `None` if no prediction was made.
    pub fn is_correct(&self) -> Option<bool> {
        self.prediction.as_ref().map(|p| *p == self.label)
    }
}

impl<L, F> Display for Record<L, F>
where
    L: Label,
    F: Float,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "x1: {}, x2: {}, label: {:?}",
            self.features[0], self.features[1], self.label
        )?;
        match &self.prediction {
            Some(p) => write!(f, ", predicted: {:?}", p),
            None => write!(f, ", predicted: -"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_record_has_no_prediction() {
        let r = Record::new(1.5, -2.0, 3);
        assert_eq!(r.features(), [1.5, -2.0]);
        assert_eq!(*r.label(), 3);
        assert_eq!(r.prediction(), None);
        assert_eq!(r.is_correct(), None);
    }

    #[test]
    fn test_view_matches_features() {
        let r = Record::new(4.0_f32, 5.0, 1);
        let v = r.view();
        assert_eq!(v.len(), 2);
        assert_abs_diff_eq!(v[0], 4.0);
        assert_abs_diff_eq!(v[1], 5.0);
    }

    #[test]
    fn test_prediction_is_write_once() {
        let mut r = Record::new(0.0, 0.0, 1);
        r.set_prediction(2).unwrap();
        assert_eq!(r.prediction(), Some(&2));
        assert_eq!(r.is_correct(), Some(false));

        let result = r.set_prediction(1);
        assert_eq!(result, Err(DataError::PredictionAlreadySet));
        // The first write survives.
        assert_eq!(r.prediction(), Some(&2));
    }

    #[test]
    fn test_clear_prediction_allows_new_run() {
        let mut r = Record::new(0.0, 0.0, 7);
        r.set_prediction(7).unwrap();
        r.clear_prediction();
        assert_eq!(r.prediction(), None);
        r.set_prediction(7).unwrap();
        assert_eq!(r.is_correct(), Some(true));
    }

    #[test]
    fn test_display() {
        let mut r = Record::new(1.0, 2.5, -1);
        assert_eq!(r.to_string(), "x1: 1, x2: 2.5, label: -1, predicted: -");
        r.set_prediction(2).unwrap();
        assert_eq!(r.to_string(), "x1: 1, x2: 2.5, label: -1, predicted: 2");
    }
}
