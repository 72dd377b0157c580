use serde::{Serialize, Deserialize};

use std::fs;
use std::path::Path;

use crate::error::Result;
use super::dtree::DecisionTree;


/// The minimal number of rows to split a node, set as default.
pub const DEFAULT_MIN_SAMPLES_SPLIT: usize = 2;
/// The maxmial depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 2;


/// Parameters of [`DecisionTree`].
///
/// This struct can be read from JSON.
/// Missing fields take the default values:
/// ```
/// use entrotree::TreeConfig;
/// let config = TreeConfig::from_json(r#"{ "max_depth": 10 }"#).unwrap();
/// assert_eq!(config.max_depth, 10);
/// assert_eq!(config.min_samples_split, 2);
/// assert!(config.feature_names.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// A node with fewer rows than this becomes a leaf.
    pub min_samples_split: usize,
    /// A node at depth `d` can be split only if `d <= max_depth`.
    /// The root has depth `0`.
    pub max_depth: usize,
    /// Names of the features, used only for printing a tree.
    pub feature_names: Option<Vec<String>>,
}


impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT,
            max_depth: DEFAULT_MAX_DEPTH,
            feature_names: None,
        }
    }
}


impl TreeConfig {
    /// Parse a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }


    /// Read a JSON file.
    pub fn from_json_file<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```
/// use entrotree::DecisionTreeBuilder;
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(10)
///     .min_samples_split(3)
///     .feature_names(["petal_length", "petal_width"])
///     .build::<String>();
/// assert_eq!(tree.config().max_depth, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeBuilder {
    config: TreeConfig,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT == 2,
    /// max_depth: DEFAULT_MAX_DEPTH == 2,
    /// feature_names: None,
    /// ```
    pub fn new() -> Self {
        Self::default()
    }


    /// Start from the given parameters.
    pub fn from_config(config: TreeConfig) -> Self {
        Self { config }
    }


    /// Specify the maximal depth at which a node can be split.
    /// Default maximal depth is `2`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }


    /// Specify the minimal number of rows to split a node.
    /// Default value is `2`.
    pub fn min_samples_split(mut self, n_sample: usize) -> Self {
        self.config.min_samples_split = n_sample;
        self
    }


    /// Set the feature names used when printing the tree.
    pub fn feature_names<T, S>(mut self, names: T) -> Self
        where T: IntoIterator<Item = S>,
              S: ToString,
    {
        let names = names.into_iter()
            .map(|name| name.to_string())
            .collect();
        self.config.feature_names = Some(names);
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build<L>(self) -> DecisionTree<L> {
        DecisionTree::new(self.config)
    }
}
