//! Defines the exhaustive search for the best splitting rule.
use serde::{Serialize, Deserialize};

use std::hash::Hash;

use crate::common::tree::LeftRight;
use crate::error::{Result, TreeError};
use super::impurity::{LabelCounter, information_gain};


/// A splitting rule `x[feature] <= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    /// Index of the feature to look at.
    pub feature: usize,
    /// Rows with `x[feature] <= threshold` go to the left.
    pub threshold: f64,
}


impl Splitter {
    /// Construct the rule `x[feature] <= threshold`.
    #[inline]
    pub fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold, }
    }


    /// Defines the splitting.
    /// Returns `Err` if `row` does not have the feature.
    #[inline]
    pub fn split(&self, row: &[f64]) -> Result<LeftRight> {
        let value = row.get(self.feature)
            .ok_or(TreeError::FeatureIndexOutOfRange {
                feature: self.feature,
                n_features: row.len(),
            })?;

        Ok(LeftRight::of(*value, self.threshold))
    }
}


/// The best split found for a partition.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// The splitting rule.
    pub splitter: Splitter,
    /// Information gain of the rule on the partition.
    pub gain: f64,
    /// Rows (indices into the training data) sent to the left.
    pub left: Vec<usize>,
    /// Rows (indices into the training data) sent to the right.
    pub right: Vec<usize>,
}


/// Returns the split of the rows `indices` that maximizes
/// the information gain.
///
/// Candidates are visited feature by feature in ascending index order,
/// and for each feature, the distinct observed values in ascending order
/// serve as thresholds.
/// A candidate that leaves one side empty is skipped.
/// The best candidate is replaced only by a strictly larger gain,
/// so ties keep the candidate visited first.
///
/// Returns `Ok(None)` if no candidate separates the rows.
///
/// Returns `Err` if `indices` is empty, refers to a row that
/// `x` or `y` does not have, or if a row has fewer than
/// `n_features` features.
///
/// This is a brute-force search that costs
/// `O(n_features * |indices|^2)`.
pub fn best_split<R, L>(
    x: &[R],
    y: &[L],
    indices: &[usize],
    n_features: usize,
) -> Result<Option<Split>>
    where R: AsRef<[f64]>,
          L: Eq + Hash,
{
    let n_sample = indices.len();
    if n_sample == 0 {
        return Err(TreeError::InvalidInput(
            "cannot split an empty partition".to_string()
        ));
    }

    for &i in indices {
        let row = match (x.get(i), y.get(i)) {
            (Some(row), Some(_)) => row.as_ref(),
            _ => {
                return Err(TreeError::InvalidInput(format!(
                    "row {i} does not exist in a sample of {} rows",
                    x.len().min(y.len()),
                )));
            },
        };
        if row.len() < n_features {
            return Err(TreeError::FeatureIndexOutOfRange {
                feature: row.len(),
                n_features: row.len(),
            });
        }
    }

    let parent_entropy = LabelCounter::new(indices.iter().map(|&i| &y[i]))
        .entropy()?;

    let mut best: Option<Split> = None;
    let mut best_gain = f64::NEG_INFINITY;

    for feature in 0..n_features {
        let value = |i: usize| x[i].as_ref()[feature];

        let mut thresholds = indices.iter()
            .map(|&i| value(i))
            .collect::<Vec<f64>>();
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();

        for threshold in thresholds {
            let (left, right): (Vec<usize>, Vec<usize>) = indices.iter()
                .partition(|&&i| value(i) <= threshold);

            if left.is_empty() || right.is_empty() { continue; }

            let lcount = LabelCounter::new(left.iter().map(|&i| &y[i]));
            let rcount = LabelCounter::new(right.iter().map(|&i| &y[i]));
            let gain = information_gain(
                parent_entropy, n_sample, &lcount, &rcount
            )?;

            if gain > best_gain {
                log::trace!(
                    "candidate x[{feature}] <= {threshold} \
                     improves the gain to {gain}"
                );
                best_gain = gain;
                best = Some(Split {
                    splitter: Splitter::new(feature, threshold),
                    gain,
                    left,
                    right,
                });
            }
        }
    }

    Ok(best)
}


#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-9;

    fn all(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_splitter_01() {
        let rule = Splitter::new(1, 0.5);
        assert_eq!(rule.split(&[9.0, 0.5]).unwrap(), LeftRight::Left);
        assert_eq!(rule.split(&[9.0, 0.6]).unwrap(), LeftRight::Right);
    }

    #[test]
    fn test_splitter_out_of_range() {
        let rule = Splitter::new(2, 0.5);
        let res = rule.split(&[9.0, 0.5]);
        assert!(matches!(
            res,
            Err(TreeError::FeatureIndexOutOfRange { feature: 2, n_features: 2 })
        ));
    }

    #[test]
    fn test_best_split_01() {
        let x = vec![[1.0], [1.0], [2.0], [2.0]];
        let y = vec!["A", "A", "B", "B"];
        let split = best_split(&x, &y, &all(4), 1)
            .unwrap()
            .expect("a split exists");

        assert_eq!(split.splitter, Splitter::new(0, 1.0));
        assert_eq!(split.left, vec![0, 1]);
        assert_eq!(split.right, vec![2, 3]);
        assert!(
            (1f64 - split.gain).abs() < TEST_TOLERANCE,
            "expected 1, got {}.", split.gain,
        );
    }

    #[test]
    fn test_best_split_keeps_partition_order() {
        let x = vec![[3.0], [0.0], [2.0], [1.0], [4.0]];
        let y = vec![1, 0, 1, 0, 1];
        let split = best_split(&x, &y, &[4, 3, 2, 1, 0], 1)
            .unwrap()
            .unwrap();

        assert_eq!(split.splitter.threshold, 1.0);
        assert_eq!(split.left, vec![3, 1]);
        assert_eq!(split.right, vec![4, 2, 0]);
    }

    #[test]
    fn test_best_split_none_for_constant_feature() {
        let x = vec![[5.0], [5.0], [5.0]];
        let y = vec!["A", "B", "B"];
        let split = best_split(&x, &y, &all(3), 1).unwrap();
        assert!(split.is_none());
    }

    #[test]
    fn test_best_split_none_for_single_row() {
        let x = vec![[5.0, 1.0]];
        let y = vec!["A"];
        let split = best_split(&x, &y, &all(1), 2).unwrap();
        assert!(split.is_none());
    }

    #[test]
    fn test_best_split_zero_gain_is_reported() {
        // Every cut is accepted but none is informative.
        let x = vec![[1.0], [2.0], [3.0]];
        let y = vec!["A", "A", "A"];
        let split = best_split(&x, &y, &all(3), 1).unwrap().unwrap();
        assert_eq!(split.gain, 0f64);
        assert_eq!(split.splitter.threshold, 1.0);
    }

    #[test]
    fn test_best_split_tie_prefers_lower_feature() {
        // Both features separate the labels perfectly.
        let x = vec![
            [0.0, 10.0],
            [0.0, 10.0],
            [1.0, 20.0],
            [1.0, 20.0],
        ];
        let y = vec!["A", "A", "B", "B"];
        let split = best_split(&x, &y, &all(4), 2).unwrap().unwrap();
        assert_eq!(split.splitter, Splitter::new(0, 0.0));
    }

    #[test]
    fn test_best_split_tie_prefers_lower_threshold() {
        // x <= 1 and x <= 2 both isolate one `B`.
        let x = vec![[1.0], [2.0], [3.0]];
        let y = vec!["B", "A", "B"];
        let split = best_split(&x, &y, &all(3), 1).unwrap().unwrap();
        assert_eq!(split.splitter.threshold, 1.0);
    }

    #[test]
    fn test_best_split_picks_informative_feature() {
        let x = vec![
            [0.3, 0.1],
            [0.3, 0.2],
            [0.3, 0.3],
            [0.9, 0.4],
            [0.9, 0.5],
            [0.9, 0.6],
        ];
        let y = vec![1, 1, -1, -1, -1, 1];
        let split = best_split(&x, &y, &all(6), 2).unwrap().unwrap();

        // feature 0 gives gain 1 - H(1/3) ~ 0.08,
        // feature 1 at 0.2 gives 1 - (4/6) H(1/4) ~ 0.46.
        assert_eq!(split.splitter, Splitter::new(1, 0.2));
        assert!(split.gain > 0f64);
    }

    #[test]
    fn test_best_split_too_many_features() {
        let x = vec![vec![1.0], vec![2.0]];
        let y = vec!["a", "b"];
        let res = best_split(&x, &y, &all(2), 2);
        assert!(matches!(
            res,
            Err(TreeError::FeatureIndexOutOfRange { feature: 1, n_features: 1 })
        ));
    }

    #[test]
    fn test_best_split_ragged_rows() {
        let x = vec![vec![1.0, 0.0], vec![2.0]];
        let y = vec!["a", "b"];
        let res = best_split(&x, &y, &all(2), 2);
        assert!(matches!(
            res,
            Err(TreeError::FeatureIndexOutOfRange { feature: 1, n_features: 1 })
        ));
    }

    #[test]
    fn test_best_split_index_out_of_range() {
        let x = vec![[1.0], [2.0]];
        let y = vec!["a", "b"];
        let res = best_split(&x, &y, &[0, 2], 1);
        assert!(matches!(res, Err(TreeError::InvalidInput(_))));

        let res = best_split(&x, &y[..1], &[0, 1], 1);
        assert!(matches!(res, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_best_split_empty_partition() {
        let x: Vec<[f64; 1]> = Vec::new();
        let y: Vec<u8> = Vec::new();
        let res = best_split(&x, &y, &[], 1);
        assert!(matches!(res, Err(TreeError::InvalidInput(_))));
    }
}
