use rand::prelude::*;

use crate::common::checker;
use crate::error::{Result, TreeError};
use super::sample_struct::Sample;


/// Default ratio of the test rows.
pub const DEFAULT_TEST_RATIO: f64 = 0.2;
/// Default seed of the randomness for shuffling.
pub const DEFAULT_SEED: u64 = 1234;


/// A struct that splits a sample into a training part and a test part.
///
/// The test part takes the first `ceil(test_ratio * n)` rows of
/// the (optionally shuffled) row order, and the training part takes the rest.
/// The same seed always yields the same split.
///
/// # Example
/// ```
/// use entrotree::{Sample, TrainTestSplit};
///
/// let rows = (0..10).map(|i| vec![i as f64]).collect::<Vec<_>>();
/// let target = (0..10).map(|i| i % 2).collect::<Vec<_>>();
/// let sample = Sample::new(vec!["x"], rows, target).unwrap();
///
/// let (train, test) = TrainTestSplit::new()
///     .test_ratio(0.25)
///     .seed(7)
///     .split(&sample)
///     .unwrap();
/// // ceil(0.25 * 10) == 3
/// assert_eq!(train.shape().0, 7);
/// assert_eq!(test.shape().0, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainTestSplit {
    test_ratio: f64,
    seed: u64,
    shuffle: bool,
}


impl Default for TrainTestSplit {
    fn default() -> Self {
        Self {
            test_ratio: DEFAULT_TEST_RATIO,
            seed: DEFAULT_SEED,
            shuffle: true,
        }
    }
}


impl TrainTestSplit {
    /// Construct a new instance of `TrainTestSplit.`
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Set the ratio of the test rows.
    /// Default value is `0.2`.
    #[inline]
    pub fn test_ratio(mut self, ratio: f64) -> Self {
        self.test_ratio = ratio;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set whether the rows are shuffled before splitting.
    /// Default value is `true`.
    #[inline]
    pub fn shuffle(mut self, flag: bool) -> Self {
        self.shuffle = flag;
        self
    }


    /// Returns the row indices of the training part and the test part.
    ///
    /// Returns `Err` if the ratio is not in `(0, 1)`,
    /// or if either part would be empty.
    pub fn split_indices(&self, n_sample: usize)
        -> Result<(Vec<usize>, Vec<usize>)>
    {
        checker::check_ratio(self.test_ratio)?;

        let test_size = (self.test_ratio * n_sample as f64).ceil() as usize;
        if test_size >= n_sample {
            return Err(TreeError::InvalidInput(format!(
                "cannot split {n_sample} rows with test ratio {}",
                self.test_ratio,
            )));
        }

        let mut ix = (0..n_sample).collect::<Vec<_>>();
        if self.shuffle {
            let mut rng = StdRng::seed_from_u64(self.seed);
            ix.shuffle(&mut rng);
        }

        let train = ix.split_off(test_size);
        log::debug!(
            "split {n_sample} rows into {} training and {test_size} test rows",
            train.len(),
        );
        Ok((train, ix))
    }


    /// Returns the pair of the training sample and the test sample.
    pub fn split<L>(&self, sample: &Sample<L>)
        -> Result<(Sample<L>, Sample<L>)>
        where L: Clone,
    {
        let n_sample = sample.shape().0;
        let (train, test) = self.split_indices(n_sample)?;
        Ok((sample.select(train), sample.select(test)))
    }
}
