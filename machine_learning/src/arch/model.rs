use ndarray::{Array1, ArrayView2};

use crate::{MlErr, Result};

/// A trained regression model: one scalar prediction per input row.
pub trait Regressor {
    /// Returns the amount of features every input row must have.
    fn n_features(&self) -> usize;

    /// Predicts a value for each row of `x`.
    ///
    /// # Arguments
    /// * `x` - The input rows, `(n_rows, n_features)`.
    ///
    /// # Returns
    /// One prediction per row, or an error if the input width is wrong or the model produced a
    /// non finite value.
    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>>;

    /// Predicts the value of a single feature row.
    fn predict_one(&self, row: &[f32]) -> Result<f32> {
        let x = ArrayView2::from_shape((1, row.len()), row).map_err(|_| MlErr::SizeMismatch {
            what: "feature row",
            got: row.len(),
            expected: self.n_features(),
        })?;

        self.predict(x)?
            .first()
            .copied()
            .ok_or(MlErr::SizeMismatch {
                what: "predictions",
                got: 0,
                expected: 1,
            })
    }

    /// Fails if `x` does not have exactly `n_features` columns.
    fn check_width(&self, x: &ArrayView2<f32>) -> Result<()> {
        let expected = self.n_features();
        if x.ncols() != expected {
            return Err(MlErr::SizeMismatch {
                what: "input features",
                got: x.ncols(),
                expected,
            });
        }

        Ok(())
    }
}

/// Fails on the first prediction that is `NaN` or infinite.
pub fn ensure_finite(y: &Array1<f32>) -> Result<()> {
    match y.iter().position(|v| !v.is_finite()) {
        Some(row) => Err(MlErr::NonFinite { row }),
        None => Ok(()),
    }
}
