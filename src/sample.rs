//! Struct `Sample` represents a batch of labeled rows,
//! with a CSV reader and a train/test splitter.

// Provides sample struct.
pub(crate) mod sample_struct;

// Provides a struct that reads a file.
pub(crate) mod reader;

// Provides a struct that splits a sample.
pub(crate) mod split;


pub use reader::SampleReader;
pub use sample_struct::Sample;
pub use split::{TrainTestSplit, DEFAULT_TEST_RATIO, DEFAULT_SEED};
