#![warn(missing_docs)]

//!
//! A crate that provides a decision tree classifier
//! grown by entropy reduction.
//!
//! Each internal node of a tree tests a single rule
//! `x[feature] <= threshold`,
//! chosen among all the observed feature values of the node's rows
//! so that the information gain (the decrease of Shannon entropy)
//! is maximal.
//! A node becomes a leaf predicting the majority label
//! when it has fewer than `min_samples_split` rows,
//! when it is deeper than `max_depth`,
//! or when no rule decreases the entropy.
//!
//! The tree is grown with an explicit work stack,
//! so a deep tree never overflows the call stack.
//!
//! ```
//! use entrotree::prelude::*;
//!
//! let x = vec![[1.0, 0.0], [2.0, 0.0], [3.0, 1.0], [4.0, 1.0]];
//! let y = vec!["low", "low", "high", "high"];
//!
//! let mut tree = DecisionTreeBuilder::new()
//!     .max_depth(3)
//!     .feature_names(["size", "flag"])
//!     .build();
//! tree.fit(&x, &y).unwrap();
//!
//! let f = tree.classifier().unwrap();
//! assert_eq!(f.predict(&[1.5, 0.0]).unwrap(), "low");
//! println!("{f}");
//! ```
//!
//! Besides the tree itself, this crate provides
//! a CSV reader ([`SampleReader`]),
//! a seeded train/test splitter ([`TrainTestSplit`]),
//! and the scores in [`research`].

pub mod error;
pub mod common;
pub mod hypothesis;
pub mod decision_tree;
pub mod sample;
pub mod research;

/// Exports the decision tree and the traits.
pub mod prelude;


pub use error::{Result, TreeError};
pub use hypothesis::Classifier;

pub use decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeConfig,
    Node,
    Splitter,
    Visit,
    entropy,
    majority,
};

pub use sample::{
    Sample,
    SampleReader,
    TrainTestSplit,
};

pub use research::{
    accuracy,
    ConfusionMatrix,
    Experiment,
    Report,
};
