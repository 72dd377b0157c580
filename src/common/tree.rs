//! This file defines some tools for tree algorithms
use serde::{Serialize, Deserialize};
use std::{fmt, cmp, ops};


/// Struct `Depth` defines the depth of a node in a tree.
/// This is just a wrapper for `usize`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Depth(usize);


impl Depth {
    /// The depth of the root node.
    pub const ROOT: Self = Self(0);


    /// Returns the inner value.
    #[inline]
    pub fn get(&self) -> usize {
        self.0
    }
}


impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.0;
        write!(f, "{depth}")
    }
}


impl From<usize> for Depth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}


impl ops::Add<usize> for Depth {
    type Output = Self;
    /// The depth of a child node.
    /// Saturates instead of overflowing.
    #[inline]
    fn add(self, other: usize) -> Self::Output {
        Self(self.0.saturating_add(other))
    }
}


impl cmp::PartialEq<usize> for Depth {
    #[inline]
    fn eq(&self, rhs: &usize) -> bool {
        self.0.eq(rhs)
    }
}


impl cmp::PartialOrd<usize> for Depth {
    #[inline]
    fn partial_cmp(&self, other: &usize) -> Option<cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}


/// The side a row goes to at a branch node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// `x[feature] <= threshold`.
    Left,
    /// `x[feature] > threshold`.
    Right,
}


impl LeftRight {
    /// Compares `value` against `threshold`.
    /// Ties go to the left.
    #[inline]
    pub fn of(value: f64, threshold: f64) -> Self {
        if value <= threshold { Self::Left } else { Self::Right }
    }
}
