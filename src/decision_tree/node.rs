//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::common::tree::LeftRight;
use crate::error::Result;
use crate::hypothesis::Classifier;
use super::split_by::Splitter;
use super::traverse::{DepthFirst, Visit};


/// A node of a trained decision tree.
/// Every node owns its children, so a tree never shares a subtree.
///
/// Cloning, comparing, and dropping a tree do not recurse on its height.
/// The `Debug` output and the serde (de)serialization do recurse,
/// so they are meant for trees of moderate height.
#[derive(Serialize, Deserialize)]
pub enum Node<L> {
    /// A node that have two childrens.
    Branch {
        /// The rule that sends a row to `left` or `right`.
        splitter: Splitter,
        /// Information gain of `splitter` on the training rows
        /// that reached this node.
        gain: f64,
        /// Rows with `x[feature] <= threshold`.
        left: Box<Node<L>>,
        /// Rows with `x[feature] > threshold`.
        right: Box<Node<L>>,
    },
    /// A node that have no child.
    Leaf {
        /// The predicted label.
        label: L,
    },
}


impl<L> Node<L> {
    /// Construct a branch node.
    pub fn branch(
        splitter: Splitter,
        gain:     f64,
        left:     Box<Node<L>>,
        right:    Box<Node<L>>,
    ) -> Self
    {
        Self::Branch { splitter, gain, left, right, }
    }


    /// Construct a leaf node.
    pub fn leaf(label: L) -> Self {
        Self::Leaf { label, }
    }


    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Visit the nodes of this subtree in depth-first order.
    /// See [`Visit`] for the emitted events.
    pub fn depth_first(&self) -> DepthFirst<'_, L> {
        DepthFirst::new(self)
    }


    /// Returns the leaf reached by `row`.
    /// Returns `Err` if a branch on the path refers to a feature
    /// that `row` does not have.
    pub fn leaf_for(&self, row: &[f64]) -> Result<&L> {
        let mut node = self;
        loop {
            match node {
                Self::Leaf { label } => { return Ok(label); },
                Self::Branch { splitter, left, right, .. } => {
                    node = match splitter.split(row)? {
                        LeftRight::Left  => left,
                        LeftRight::Right => right,
                    };
                },
            }
        }
    }


    /// Returns the height of this subtree.
    /// A single leaf has height `0`.
    pub fn depth(&self) -> usize {
        self.depth_first()
            .filter_map(|visit| match visit {
                Visit::Leaf { depth, .. } => Some(depth),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }


    /// Returns the number of leaves of this subtree.
    pub fn n_leaves(&self) -> usize {
        self.depth_first()
            .filter(|visit| matches!(visit, Visit::Leaf { .. }))
            .count()
    }


    /// Returns the lines of a Graphviz `graph` body.
    /// Nodes are numbered in pre-order.
    pub(crate) fn to_dot_info(&self, names: Option<&[String]>) -> Vec<String>
        where L: fmt::Display,
    {
        let mut info = Vec::new();
        // Branches whose children are not connected yet,
        // with the side the next child hangs on.
        let mut parents: Vec<(usize, LeftRight)> = Vec::new();
        let mut id = 0_usize;

        for visit in self.depth_first() {
            let (line, is_branch) = match visit {
                Visit::Else { .. } => {
                    if let Some(top) = parents.last_mut() {
                        top.1 = LeftRight::Right;
                    }
                    continue;
                },
                Visit::Branch { splitter, .. } => {
                    let thr = splitter.threshold;
                    let feat = names.and_then(|n| n.get(splitter.feature))
                        .cloned()
                        .unwrap_or_else(|| format!("x[{}]", splitter.feature));
                    let line = format!(
                        "\tnode_{id} [ label = \"{feat} <= {thr} ?\" ];\n",
                    );
                    (line, true)
                },
                Visit::Leaf { label, .. } => {
                    let line = format!(
                        "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                    );
                    (line, false)
                },
            };

            match parents.last().copied() {
                Some((parent, LeftRight::Left)) => {
                    info.push(format!(
                        "\tnode_{parent} -- node_{id} [ label = \"Yes\" ];\n"
                    ));
                },
                Some((parent, LeftRight::Right)) => {
                    info.push(format!(
                        "\tnode_{parent} -- node_{id} [ label = \"No\" ];\n"
                    ));
                    parents.pop();
                },
                None => {},
            }

            info.push(line);
            if is_branch { parents.push((id, LeftRight::Left)); }
            id += 1;
        }

        info
    }
}


impl<L> Classifier<L> for Node<L>
    where L: Clone,
{
    fn predict(&self, row: &[f64]) -> Result<L> {
        self.leaf_for(row).cloned()
    }
}


enum Rebuild<'a, L> {
    Enter(&'a Node<L>),
    Join(Splitter, f64),
}


impl<L> Clone for Node<L>
    where L: Clone,
{
    fn clone(&self) -> Self {
        let mut tasks = vec![Rebuild::Enter(self)];
        let mut built: Vec<Node<L>> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Rebuild::Enter(Self::Leaf { label }) => {
                    built.push(Self::leaf(label.clone()));
                },
                Rebuild::Enter(Self::Branch { splitter, gain, left, right }) => {
                    tasks.push(Rebuild::Join(*splitter, *gain));
                    tasks.push(Rebuild::Enter(&**right));
                    tasks.push(Rebuild::Enter(&**left));
                },
                Rebuild::Join(splitter, gain) => {
                    let right = built.pop()
                        .expect("right subtree is copied before its parent");
                    let left = built.pop()
                        .expect("left subtree is copied before its parent");
                    built.push(Self::branch(
                        splitter, gain, Box::new(left), Box::new(right)
                    ));
                },
            }
        }

        built.pop().expect("copying a tree always yields a root")
    }
}


impl<L> PartialEq for Node<L>
    where L: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (Self::Leaf { label: a }, Self::Leaf { label: b }) => {
                    if a != b { return false; }
                },
                (
                    Self::Branch { splitter: s1, gain: g1, left: l1, right: r1 },
                    Self::Branch { splitter: s2, gain: g2, left: l2, right: r2 },
                ) => {
                    if s1 != s2 || g1 != g2 { return false; }
                    pairs.push((&**r1, &**r2));
                    pairs.push((&**l1, &**l2));
                },
                _ => { return false; },
            }
        }
        true
    }
}


impl<L> Drop for Node<L> {
    /// The default drop glue recurses once per level.
    /// Before the children are dropped,
    /// this subtree is reshaped into a tree of logarithmic height.
    /// Only the boxes are moved around; no node is created or lost.
    fn drop(&mut self) {
        // Rotate every left branch into the right spine,
        // so that each node on the spine has a leaf on its left.
        let mut cur: &mut Node<L> = self;
        loop {
            let Self::Branch { left, right, .. } = cur else { break; };
            while let Self::Branch { right: inner, .. } = &mut **left {
                std::mem::swap(inner, right);
                std::mem::swap(left, right);
            }
            cur = &mut **right;
        }

        // Fold pairs of spine nodes into one until the spine is short.
        // Each pass halves the spine and adds one level to the left.
        while Self::fold_spine(self) {}
    }
}


impl<L> Node<L> {
    /// Turns the spine `(a, (b, rest))` into `((b, a), rest)`
    /// all the way down.
    /// Returns `false` if the spine was already at most one node long.
    fn fold_spine(root: &mut Self) -> bool {
        let mut folded = false;
        let mut cur = root;
        loop {
            let Self::Branch { left, right, .. } = cur else { break; };
            let Self::Branch { right: rest, .. } = &mut **right else { break; };
            std::mem::swap(left, rest);
            std::mem::swap(left, right);
            folded = true;
            cur = &mut **right;
        }
        folded
    }
}


impl<L> fmt::Debug for Node<L>
    where L: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch {
                splitter,
                gain,
                left,
                right,
            } => {
                f.debug_struct("Branch")
                    .field("splitter", &splitter)
                    .field("gain", &gain)
                    .field("left", &left)
                    .field("right", &right)
                    .finish()
            },
            Self::Leaf {
                label,
            } => {
                f.debug_struct("Leaf")
                    .field("label", &label)
                    .finish()
            },
        }
    }
}
