//! Read-only depth-first traversal of a trained tree,
//! and a human-readable rendering built on top of it.
use std::fmt;

use super::node::Node;
use super::split_by::Splitter;


/// An event emitted by [`DepthFirst`].
///
/// A branch at depth `d` produces, in order,
/// `Branch { depth: d, .. }`, the events of its left subtree,
/// `Else { depth: d }`, and the events of its right subtree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visit<'a, L> {
    /// Entering a branch node.
    Branch {
        /// Depth of the node (the root has depth `0`).
        depth: usize,
        /// Splitting rule of the node.
        splitter: &'a Splitter,
        /// Information gain recorded at training time.
        gain: f64,
    },
    /// The left subtree of the branch at `depth` is done;
    /// the right subtree follows.
    Else {
        /// Depth of the branch node.
        depth: usize,
    },
    /// A leaf node.
    Leaf {
        /// Depth of the node.
        depth: usize,
        /// The label predicted by the leaf.
        label: &'a L,
    },
}


enum Step<'a, L> {
    Enter(&'a Node<L>, usize),
    Else(usize),
}


/// Iterator over the [`Visit`] events of a tree.
/// Uses an explicit stack, so the tree height is not limited
/// by the call stack.
pub struct DepthFirst<'a, L> {
    stack: Vec<Step<'a, L>>,
}


impl<'a, L> DepthFirst<'a, L> {
    pub(super) fn new(root: &'a Node<L>) -> Self {
        Self { stack: vec![Step::Enter(root, 0)] }
    }
}


impl<'a, L> Iterator for DepthFirst<'a, L> {
    type Item = Visit<'a, L>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = match self.stack.pop()? {
            Step::Else(depth) => Visit::Else { depth },
            Step::Enter(Node::Leaf { label }, depth) => {
                Visit::Leaf { depth, label }
            },
            Step::Enter(Node::Branch { splitter, gain, left, right }, depth) => {
                self.stack.push(Step::Enter(right, depth + 1));
                self.stack.push(Step::Else(depth));
                self.stack.push(Step::Enter(left, depth + 1));
                Visit::Branch { depth, splitter, gain: *gain }
            },
        };
        Some(visit)
    }
}


/// Displays a tree as nested `If ... / Else:` blocks:
/// ```text
/// If petal_length <= 1.9:
///   Class: setosa
/// Else:
///   Class: versicolor
/// ```
/// Features without a name are shown as `x[i]`.
pub struct Render<'a, L> {
    root: &'a Node<L>,
    names: Option<&'a [String]>,
}


impl<'a, L> Render<'a, L> {
    pub(crate) fn new(root: &'a Node<L>, names: Option<&'a [String]>) -> Self {
        Self { root, names }
    }
}


impl<L> fmt::Display for Render<'_, L>
    where L: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.root.depth_first() {
            match visit {
                Visit::Branch { depth, splitter, .. } => {
                    let indent = "  ".repeat(depth);
                    let thr = splitter.threshold;
                    match self.names.and_then(|n| n.get(splitter.feature)) {
                        Some(name) => {
                            writeln!(f, "{indent}If {name} <= {thr}:")?;
                        },
                        None => {
                            let feat = splitter.feature;
                            writeln!(f, "{indent}If x[{feat}] <= {thr}:")?;
                        },
                    }
                },
                Visit::Else { depth } => {
                    let indent = "  ".repeat(depth);
                    writeln!(f, "{indent}Else:")?;
                },
                Visit::Leaf { depth, label } => {
                    let indent = "  ".repeat(depth);
                    writeln!(f, "{indent}Class: {label}")?;
                },
            }
        }
        Ok(())
    }
}
