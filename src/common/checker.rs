//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::error::{Result, TreeError};


/// Check whether the training sample is valid or not.
/// Returns the number of features on success.
#[inline]
pub(crate) fn check_sample<R, L>(x: &[R], y: &[L]) -> Result<usize>
    where R: AsRef<[f64]>,
{
    let n_rows = x.len();
    let n_labels = y.len();

    if n_rows != n_labels {
        return Err(TreeError::ShapeMismatch { n_rows, n_labels });
    }

    // Since the previous check guarantees `n_rows == n_labels`,
    // we only need to check `n_rows`.
    if n_rows == 0 {
        return Err(TreeError::InvalidInput(
            "the training sample has no example".to_string()
        ));
    }

    let n_features = x[0].as_ref().len();
    let ragged = x.iter()
        .position(|row| row.as_ref().len() != n_features);
    if let Some(i) = ragged {
        let got = x[i].as_ref().len();
        return Err(TreeError::InvalidInput(format!(
            "row {i} has {got} features, expected {n_features}"
        )));
    }

    Ok(n_features)
}


/// Check whether the given names match the number of features.
#[inline]
pub(crate) fn check_feature_names(
    names: Option<&[String]>,
    n_features: usize,
) -> Result<()>
{
    match names {
        Some(names) if names.len() != n_features => {
            Err(TreeError::FeatureNames {
                expected: n_features,
                got: names.len(),
            })
        },
        _ => Ok(()),
    }
}


/// Check whether `ratio` lies in the open interval `(0, 1)`.
#[inline]
pub(crate) fn check_ratio(ratio: f64) -> Result<()> {
    if 0f64 < ratio && ratio < 1f64 {
        Ok(())
    } else {
        Err(TreeError::InvalidRatio(ratio))
    }
}
