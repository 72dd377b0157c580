//! Defines the decision tree classifier.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;

use std::fmt;
use std::fs::File;
use std::io::{prelude::*, BufReader, BufWriter};
use std::path::Path;

use crate::error::Result;
use crate::hypothesis::Classifier;
use super::node::Node;
use super::traverse::{DepthFirst, Render};


/// Decision tree classifier.
/// This struct is a wrapper of the root [`Node`]
/// and the feature names used for printing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier<L> {
    root: Node<L>,
    feature_names: Option<Vec<String>>,
}


impl<L> From<Node<L>> for DecisionTreeClassifier<L> {
    #[inline]
    fn from(root: Node<L>) -> Self {
        Self { root, feature_names: None, }
    }
}


impl<L> Classifier<L> for DecisionTreeClassifier<L>
    where L: Clone,
{
    fn predict(&self, row: &[f64]) -> Result<L> {
        self.root.predict(row)
    }
}


impl<L> DecisionTreeClassifier<L> {
    #[inline]
    pub(crate) fn new(root: Node<L>, feature_names: Option<Vec<String>>)
        -> Self
    {
        Self { root, feature_names, }
    }


    #[inline]
    pub(crate) fn set_feature_names(&mut self, names: Vec<String>) {
        self.feature_names = Some(names);
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node<L> {
        &self.root
    }


    /// Returns the feature names, if known.
    #[inline]
    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }


    /// Visit the nodes in depth-first order.
    #[inline]
    pub fn depth_first(&self) -> DepthFirst<'_, L> {
        self.root.depth_first()
    }


    /// Returns the height of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns a value that displays the tree as nested
    /// `If <feature> <= <threshold>: / Else:` blocks.
    #[inline]
    pub fn render(&self) -> Render<'_, L> {
        Render::new(&self.root, self.feature_names())
    }
}


impl<L> DecisionTreeClassifier<L>
    where L: Clone + Send + Sync,
{
    /// Predicts the labels of all rows of `x` in parallel.
    /// The output order follows `x`.
    pub fn par_predict_all<R>(&self, x: &[R]) -> Result<Vec<L>>
        where R: AsRef<[f64]> + Sync,
    {
        x.par_iter()
            .map(|row| self.predict(row.as_ref()))
            .collect()
    }
}


impl<L> DecisionTreeClassifier<L>
    where L: fmt::Display,
{
    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(self.feature_names());
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        f.flush()?;

        Ok(())
    }
}


impl<L> DecisionTreeClassifier<L>
    where L: Serialize,
{
    /// Serialize the tree to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }


    /// Save the tree to a JSON file.
    pub fn save<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut f, self)?;
        f.flush()?;
        Ok(())
    }
}


impl<L> DecisionTreeClassifier<L>
    where L: DeserializeOwned,
{
    /// Parse a tree from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let tree = serde_json::from_str(json)?;
        Ok(tree)
    }


    /// Load a tree from a JSON file written by
    /// [`DecisionTreeClassifier::save`].
    pub fn load<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let reader = BufReader::new(File::open(path)?);
        let tree: Self = serde_json::from_reader(reader)?;
        log::info!("loaded a decision tree with {} leaves", tree.n_leaves());
        Ok(tree)
    }
}


impl<L> fmt::Display for DecisionTreeClassifier<L>
    where L: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
