//! Defines the error type shared by every part of this crate.
use thiserror::Error;

use std::io;


/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, TreeError>;


/// Errors returned by training, prediction, and the data utilities.
///
/// A node that cannot be split any further is **not** an error;
/// it simply becomes a leaf.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The given data cannot be used (e.g., no sample at all).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The number of feature rows and labels differ.
    #[error("shape mismatch: {n_rows} feature rows but {n_labels} labels")]
    ShapeMismatch {
        /// Number of rows in the feature matrix.
        n_rows: usize,
        /// Number of labels.
        n_labels: usize,
    },

    /// `predict` was called before a successful `fit`.
    #[error("the model is not trained yet. call `fit` first")]
    UntrainedModel,

    /// A branch refers to a feature that the given row does not have.
    #[error(
        "feature index {feature} is out of range \
         for a row with {n_features} features"
    )]
    FeatureIndexOutOfRange {
        /// Feature index stored in the branch.
        feature: usize,
        /// Number of features of the row.
        n_features: usize,
    },

    /// The configured feature names do not match the feature count.
    #[error("expected {expected} feature names, got {got}")]
    FeatureNames {
        /// Number of features in the training data.
        expected: usize,
        /// Number of names given.
        got: usize,
    },

    /// A value in a data file is not a number.
    #[error("non-numerical value `{value}` in line {line}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// The offending token.
        value: String,
    },

    /// A requested column does not exist.
    #[error("the column `{0}` does not exist")]
    MissingColumn(String),

    /// A ratio outside of `(0, 1)`.
    #[error("ratio must be in (0, 1), got {0}")]
    InvalidRatio(f64),

    /// I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// (De)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
