use std::fmt;
use std::hash::Hash;

use crate::common::checker;
use crate::common::tree::Depth;
use crate::error::{Result, TreeError};
use crate::hypothesis::Classifier;
use crate::sample::Sample;

use super::{
    builder::TreeConfig,
    classifier::DecisionTreeClassifier,
    impurity::LabelCounter,
    node::Node,
    split_by::{best_split, Splitter},
};


/// The Decision Tree algorithm.
/// Given a set of labeled rows,
/// [`DecisionTree`] grows a binary tree greedily:
/// each node takes the `x[feature] <= threshold` rule
/// that maximizes the information gain (entropy reduction),
/// until one of the following holds:
///
/// - the node has fewer than `min_samples_split` rows,
/// - the node is deeper than `max_depth`,
/// - no rule has a positive gain.
///
/// Such a node becomes a leaf that predicts the majority label.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::DecisionTreeBuilder).
///
/// # Example
/// ```
/// use entrotree::DecisionTreeBuilder;
///
/// let x = vec![[1.0], [1.0], [2.0], [2.0]];
/// let y = vec!["A", "A", "B", "B"];
///
/// let mut tree = DecisionTreeBuilder::new()
///     .max_depth(1)
///     .build();
/// tree.fit(&x, &y).unwrap();
///
/// let predictions = tree.predict(&[[1.0], [2.0]]).unwrap();
/// assert_eq!(predictions, vec!["A", "B"]);
/// ```
pub struct DecisionTree<L> {
    config: TreeConfig,
    classifier: Option<DecisionTreeClassifier<L>>,
}


enum Task {
    /// Grow a subtree from the given rows.
    Grow {
        indices: Vec<usize>,
        depth: Depth,
    },
    /// Join the two most recently built subtrees.
    Join {
        splitter: Splitter,
        gain: f64,
    },
}


impl<L> DecisionTree<L> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(config: TreeConfig) -> Self {
        Self { config, classifier: None, }
    }


    /// Returns the parameters.
    #[inline]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }


    /// Returns the trained tree, if any.
    #[inline]
    pub fn classifier(&self) -> Option<&DecisionTreeClassifier<L>> {
        self.classifier.as_ref()
    }


    /// Takes the trained tree out of `self`.
    #[inline]
    pub fn into_classifier(self) -> Option<DecisionTreeClassifier<L>> {
        self.classifier
    }


    /// Returns `true` if [`DecisionTree::fit`] has succeeded once.
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.classifier.is_some()
    }
}


impl<L> DecisionTree<L>
    where L: Clone + Eq + Hash,
{
    /// Train a tree on the rows `x` and the labels `y`.
    /// The trained tree replaces the previous one.
    ///
    /// Returns
    /// - `Err(TreeError::ShapeMismatch)` if `x.len() != y.len()`,
    /// - `Err(TreeError::InvalidInput)` if `x` is empty
    ///   or the rows have different lengths,
    /// - `Err(TreeError::FeatureNames)` if the configured feature names
    ///   do not match the number of features.
    ///
    /// On error, the previously trained tree (if any) is kept.
    pub fn fit<R>(&mut self, x: &[R], y: &[L]) -> Result<()>
        where R: AsRef<[f64]>,
    {
        let n_features = checker::check_sample(x, y)?;
        let names = self.config.feature_names.as_deref();
        checker::check_feature_names(names, n_features)?;

        let root = self.grow(x, y, n_features)?;

        log::info!(
            "trained a decision tree on {} rows x {} features: \
             {} leaves, height {}",
            y.len(),
            n_features,
            root.n_leaves(),
            root.depth(),
        );

        let names = self.config.feature_names.clone();
        self.classifier = Some(DecisionTreeClassifier::new(root, names));
        Ok(())
    }


    /// Train a tree on a [`Sample`].
    /// If no feature names are configured,
    /// the trained tree uses the column names of `sample` for printing.
    pub fn fit_sample(&mut self, sample: &Sample<L>) -> Result<()> {
        self.fit(sample.rows(), sample.target())?;

        if self.config.feature_names.is_none() {
            if let Some(classifier) = self.classifier.as_mut() {
                classifier.set_feature_names(sample.feature_names().to_vec());
            }
        }
        Ok(())
    }


    /// Grow a tree from the root.
    ///
    /// The recursion `grow(rows, depth)` is unrolled
    /// into an explicit stack of tasks.
    /// Left subtrees are completed before right subtrees,
    /// so `built` always holds `[.., left, right]`
    /// when the matching `Join` is popped.
    fn grow<R>(&self, x: &[R], y: &[L], n_features: usize)
        -> Result<Node<L>>
        where R: AsRef<[f64]>,
    {
        let max_depth = Depth::from(self.config.max_depth);
        let min_samples_split = self.config.min_samples_split;

        let mut tasks = vec![Task::Grow {
            indices: (0..y.len()).collect::<Vec<usize>>(),
            depth: Depth::ROOT,
        }];
        let mut built: Vec<Node<L>> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Grow { indices, depth } => {
                    let counter = LabelCounter::new(
                        indices.iter().map(|&i| &y[i])
                    );

                    // A pure node never has a positive gain,
                    // so the search is skipped.
                    let splittable = indices.len() >= min_samples_split
                        && depth <= max_depth
                        && counter.n_distinct() > 1;

                    let split = if splittable {
                        best_split(x, y, &indices[..], n_features)?
                    } else {
                        None
                    };

                    match split {
                        Some(split) if split.gain > 0f64 => {
                            log::debug!(
                                "depth {depth}: split {} rows by \
                                 x[{}] <= {} into {} + {} (gain {:.6})",
                                indices.len(),
                                split.splitter.feature,
                                split.splitter.threshold,
                                split.left.len(),
                                split.right.len(),
                                split.gain,
                            );
                            let depth = depth + 1;
                            tasks.push(Task::Join {
                                splitter: split.splitter,
                                gain: split.gain,
                            });
                            tasks.push(Task::Grow {
                                indices: split.right,
                                depth,
                            });
                            tasks.push(Task::Grow {
                                indices: split.left,
                                depth,
                            });
                        },
                        _ => {
                            log::debug!(
                                "depth {depth}: leaf with {} rows",
                                indices.len(),
                            );
                            let label = counter.majority()
                                .ok_or_else(|| TreeError::InvalidInput(
                                    "a node received no row".to_string()
                                ))?
                                .clone();
                            built.push(Node::leaf(label));
                        },
                    }
                },
                Task::Join { splitter, gain } => {
                    let right = built.pop()
                        .expect("right subtree is built before its parent");
                    let left = built.pop()
                        .expect("left subtree is built before its parent");
                    let node = Node::branch(
                        splitter, gain, Box::new(left), Box::new(right)
                    );
                    built.push(node);
                },
            }
        }

        let root = built.pop()
            .expect("growing a tree always yields a root");
        Ok(root)
    }


    /// Predicts the labels of all rows of `x`.
    /// Returns `Err(TreeError::UntrainedModel)` before a successful `fit`.
    pub fn predict<R>(&self, x: &[R]) -> Result<Vec<L>>
        where R: AsRef<[f64]>,
    {
        self.classifier.as_ref()
            .ok_or(TreeError::UntrainedModel)?
            .predict_all(x)
    }
}


impl<L> fmt::Display for DecisionTree<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self.classifier.as_ref() {
            Some(c) => format!("trained ({} leaves)", c.n_leaves()),
            None => "not trained".to_string(),
        };
        writeln!(
            f,
            "\
            ----------\n\
            # Decision Tree\n\n\
            - Min. samples to split: {}\n\
            - Max depth: {}\n\
            - Status: {status}\
            ",
            self.config.min_samples_split,
            self.config.max_depth,
        )?;

        write!(f, "----------")
    }
}
