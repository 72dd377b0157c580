//! Defines the behavior of a trained classifier.
use crate::error::Result;


/// A trait that defines the behavor of classifier.
/// You only need to implement `predict` method.
pub trait Classifier<L> {
    /// Predicts the label of a single row of features.
    fn predict(&self, row: &[f64]) -> Result<L>;


    /// Predicts the labels of all rows of `x`.
    /// The `i`-th prediction corresponds to the `i`-th row.
    fn predict_all<R>(&self, x: &[R]) -> Result<Vec<L>>
        where R: AsRef<[f64]>,
    {
        x.iter()
            .map(|row| self.predict(row.as_ref()))
            .collect()
    }
}
