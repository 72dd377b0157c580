//! Provides some tools for experiments:
//! scoring a prediction and running a train/test experiment.

/// Defines accuracy and confusion matrix.
pub mod metrics;

/// Defines an end-to-end experiment.
pub mod experiment;


pub use metrics::{accuracy, ConfusionMatrix};
pub use experiment::{
    Experiment,
    Report,
    DEFAULT_EXPERIMENT_SEED,
    DEFAULT_EXPERIMENT_TEST_RATIO,
};
