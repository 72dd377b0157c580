//! Exports the decision tree, the data utilities, and the traits.
//!
pub use crate::hypothesis::Classifier;


pub use crate::decision_tree::{
    // Training
    DecisionTree,
    DecisionTreeBuilder,
    TreeConfig,


    // Trained tree
    DecisionTreeClassifier,
    Node,
    Splitter,
    Visit,
};


pub use crate::sample::{
    Sample,
    SampleReader,
    TrainTestSplit,
};


pub use crate::research::{
    accuracy,
    ConfusionMatrix,
    Experiment,
};


pub use crate::error::TreeError;
