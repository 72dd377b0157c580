//! Scores of a prediction against the true labels.
use std::fmt;

use crate::error::{Result, TreeError};


fn check_pair<L>(y_true: &[L], y_pred: &[L]) -> Result<()> {
    if y_true.len() != y_pred.len() {
        return Err(TreeError::ShapeMismatch {
            n_rows: y_pred.len(),
            n_labels: y_true.len(),
        });
    }
    if y_true.is_empty() {
        return Err(TreeError::InvalidInput(
            "cannot score an empty prediction".to_string()
        ));
    }
    Ok(())
}


/// Returns the fraction of `y_pred` that equals `y_true`.
///
/// ```
/// use entrotree::research::accuracy;
/// let acc = accuracy(&["a", "b", "b", "a"], &["a", "b", "a", "a"]).unwrap();
/// assert_eq!(acc, 0.75);
/// ```
pub fn accuracy<L>(y_true: &[L], y_pred: &[L]) -> Result<f64>
    where L: PartialEq,
{
    check_pair(y_true, y_pred)?;

    let n_correct = y_true.iter()
        .zip(y_pred)
        .filter(|(t, p)| t == p)
        .count();
    Ok(n_correct as f64 / y_true.len() as f64)
}


/// Confusion matrix.
/// The entry at row `i` and column `j` is the number of rows
/// whose true label is `labels()[i]` and predicted label is `labels()[j]`.
///
/// Labels are ordered by first occurrence in `y_true`,
/// followed by the labels that occur only in `y_pred`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionMatrix<L> {
    labels: Vec<L>,
    counts: Vec<Vec<usize>>,
}


impl<L> ConfusionMatrix<L>
    where L: Clone + PartialEq,
{
    /// Tally the pairs `(y_true[i], y_pred[i])`.
    pub fn new(y_true: &[L], y_pred: &[L]) -> Result<Self> {
        check_pair(y_true, y_pred)?;

        let mut labels: Vec<L> = Vec::new();
        for y in y_true.iter().chain(y_pred) {
            if !labels.contains(y) {
                labels.push(y.clone());
            }
        }

        let k = labels.len();
        let mut counts = vec![vec![0_usize; k]; k];
        let position = |y: &L| labels.iter().position(|l| l == y);
        for (t, p) in y_true.iter().zip(y_pred) {
            if let (Some(i), Some(j)) = (position(t), position(p)) {
                counts[i][j] += 1;
            }
        }

        Ok(Self { labels, counts })
    }


    /// Returns the number of rows with true label `truth`
    /// predicted as `pred`.
    pub fn count(&self, truth: &L, pred: &L) -> usize {
        let position = |y: &L| self.labels.iter().position(|l| l == y);
        match (position(truth), position(pred)) {
            (Some(i), Some(j)) => self.counts[i][j],
            _ => 0,
        }
    }
}


impl<L> ConfusionMatrix<L> {
    /// Returns the labels in the row/column order.
    pub fn labels(&self) -> &[L] {
        &self.labels[..]
    }


    /// Returns the rows of the matrix.
    pub fn counts(&self) -> &[Vec<usize>] {
        &self.counts[..]
    }


    /// Returns the number of scored rows.
    pub fn total(&self) -> usize {
        self.counts.iter()
            .map(|row| row.iter().sum::<usize>())
            .sum()
    }


    /// Returns the fraction of rows on the diagonal.
    pub fn accuracy(&self) -> f64 {
        let diag = (0..self.labels.len())
            .map(|i| self.counts[i][i])
            .sum::<usize>();
        diag as f64 / self.total() as f64
    }
}


impl<L> fmt::Display for ConfusionMatrix<L>
    where L: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.labels.iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>();
        let width = names.iter()
            .map(|s| s.len())
            .chain(
                self.counts.iter().flatten().map(|c| c.to_string().len())
            )
            .max()
            .unwrap_or(0);

        write!(f, "{:>width$}", "")?;
        for name in names.iter() {
            write!(f, " {name:>width$}")?;
        }
        writeln!(f)?;

        for (name, row) in names.iter().zip(&self.counts) {
            write!(f, "{name:>width$}")?;
            for c in row {
                write!(f, " {c:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
