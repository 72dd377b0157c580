//! Provides the decision tree grown by entropy reduction.

/// Defines the impurity measure.
pub mod impurity;

/// Defines the splitting rule and its search.
pub mod split_by;

/// Defines the tree node.
pub mod node;

/// Defines the depth-first traversal and the text rendering.
pub mod traverse;

/// Defines the parameters and their builder.
pub mod builder;

/// Defines the training algorithm.
pub mod dtree;

/// Defines the trained tree.
pub mod classifier;


pub use builder::{
    DecisionTreeBuilder,
    TreeConfig,
    DEFAULT_MAX_DEPTH,
    DEFAULT_MIN_SAMPLES_SPLIT,
};
pub use classifier::DecisionTreeClassifier;
pub use dtree::DecisionTree;
pub use impurity::{entropy, majority};
pub use node::Node;
pub use split_by::{best_split, Split, Splitter};
pub use traverse::{DepthFirst, Render, Visit};
