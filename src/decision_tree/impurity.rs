//! Impurity measures and the majority vote used by the tree builder.
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{Result, TreeError};


/// Counts the occurrences of each label,
/// remembering the order in which the labels first appear.
pub(crate) struct LabelCounter<'a, L> {
    position: HashMap<&'a L, usize>,
    counts: Vec<(&'a L, usize)>,
    total: usize,
}


impl<'a, L> LabelCounter<'a, L>
    where L: Eq + Hash,
{
    /// Count the labels yielded by `labels`.
    pub(crate) fn new<I>(labels: I) -> Self
        where I: IntoIterator<Item = &'a L>,
    {
        let mut position = HashMap::new();
        let mut counts: Vec<(&'a L, usize)> = Vec::new();
        let mut total = 0_usize;

        for y in labels {
            let k = *position.entry(y)
                .or_insert_with(|| {
                    counts.push((y, 0));
                    counts.len() - 1
                });
            counts[k].1 += 1;
            total += 1;
        }

        Self { position, counts, total, }
    }


    /// Number of counted labels (with multiplicity).
    #[inline]
    pub(crate) fn total(&self) -> usize {
        self.total
    }


    /// Number of distinct labels.
    #[inline]
    pub(crate) fn n_distinct(&self) -> usize {
        debug_assert_eq!(self.position.len(), self.counts.len());
        self.counts.len()
    }


    /// Shannon entropy (base 2) of the empirical label distribution.
    ///
    /// The terms `-p * log2(p)` are summed in descending order of count,
    /// so the value depends only on the multiset of counts.
    /// Labels need not be ordered, so this is not the ascending label order.
    /// With three or more labels, the two orders may differ
    /// in the last bit of the result.
    pub(crate) fn entropy(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(TreeError::InvalidInput(
                "entropy of an empty label set is undefined".to_string()
            ));
        }

        if self.n_distinct() == 1 { return Ok(0f64); }

        // Descending count order; ties are equal terms.
        let mut counts = self.counts.iter()
            .map(|(_, c)| *c)
            .collect::<Vec<_>>();
        counts.sort_unstable_by(|a, b| b.cmp(a));

        let total = self.total as f64;
        let entropy = counts.into_iter()
            .map(|c| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum::<f64>();

        Ok(entropy)
    }


    /// The most frequent label.
    /// Among the labels sharing the maximal count,
    /// the one that appeared first wins.
    pub(crate) fn majority(&self) -> Option<&'a L> {
        let mut best: Option<(&'a L, usize)> = None;
        for &(y, c) in self.counts.iter() {
            match best {
                Some((_, b)) if c <= b => {},
                _ => { best = Some((y, c)); },
            }
        }
        best.map(|(y, _)| y)
    }
}


/// Returns the Shannon entropy (in bits) of the given labels:
/// `- sum_k p_k log2(p_k)`,
/// where `p_k` is the fraction of the labels equal to `k`.
///
/// Returns `Err(TreeError::InvalidInput)` for an empty input.
///
/// The terms are summed from the most frequent label to the least,
/// so relabeling or reordering the input never changes the result.
/// A sum taken in sorted-label order may differ in the last bit.
///
/// # Example
/// ```
/// use entrotree::entropy;
/// let labels = ["a", "a", "b", "b"];
/// let h = entropy(labels.iter()).unwrap();
/// assert!((h - 1.0).abs() < 1e-12);
/// ```
pub fn entropy<'a, L, I>(labels: I) -> Result<f64>
    where L: 'a + Eq + Hash,
          I: IntoIterator<Item = &'a L>,
{
    LabelCounter::new(labels).entropy()
}


/// Returns the most frequent label.
/// Ties are broken in favor of the label whose first occurrence
/// comes earliest in `labels`.
/// Returns `None` for an empty input.
pub fn majority<'a, L, I>(labels: I) -> Option<&'a L>
    where L: 'a + Eq + Hash,
          I: IntoIterator<Item = &'a L>,
{
    LabelCounter::new(labels).majority()
}


/// Information gain of splitting `parent` into `left` and `right`:
/// `H(parent) - (|left|/|parent| H(left) + |right|/|parent| H(right))`.
///
/// `parent_entropy` is passed in since the split searcher evaluates
/// many candidates for the same parent.
pub(crate) fn information_gain<L>(
    parent_entropy: f64,
    parent_size: usize,
    left: &LabelCounter<'_, L>,
    right: &LabelCounter<'_, L>,
) -> Result<f64>
    where L: Eq + Hash,
{
    let n = parent_size as f64;
    let wl = left.total() as f64 / n;
    let wr = right.total() as f64 / n;

    let gain = parent_entropy
        - (wl * left.entropy()? + wr * right.entropy()?);
    Ok(gain)
}
