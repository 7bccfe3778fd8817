use ndarray::{linalg, prelude::*};

use crate::{MlErr, Result, arch::activations::ActFn};

/// A fully connected layer, `act_fn(x · w + b)`.
#[derive(Debug, Clone)]
pub struct Dense {
    w: Array2<f32>,
    b: Array1<f32>,
    act_fn: Option<ActFn>,
}

impl Dense {
    /// Creates a new `Dense` layer.
    ///
    /// # Arguments
    /// * `dim` - The `(inputs, outputs)` dimension of the layer.
    /// * `weights` - The row-major `inputs x outputs` weight matrix.
    /// * `biases` - One bias per output.
    /// * `act_fn` - The activation applied to the outputs, if any.
    ///
    /// # Returns
    /// A new `Dense` instance or an error if the parameters don't fit `dim`.
    pub fn new(
        dim: (usize, usize),
        weights: Vec<f32>,
        biases: Vec<f32>,
        act_fn: Option<ActFn>,
    ) -> Result<Self> {
        let got = weights.len();
        let w = Array2::from_shape_vec(dim, weights).map_err(|_| MlErr::SizeMismatch {
            what: "dense weights",
            got,
            expected: dim.0 * dim.1,
        })?;

        if biases.len() != dim.1 {
            return Err(MlErr::SizeMismatch {
                what: "dense biases",
                got: biases.len(),
                expected: dim.1,
            });
        }

        Ok(Self {
            w,
            b: Array1::from_vec(biases),
            act_fn,
        })
    }

    pub fn dim(&self) -> (usize, usize) {
        self.w.dim()
    }

    /// Returns the size of this layer.
    ///
    /// # Returns
    /// The amount of parameters this layer has.
    pub fn size(&self) -> usize {
        self.w.len() + self.b.len()
    }

    /// Makes a forward pass through the layer. `x` must have as many columns as the layer has
    /// inputs.
    pub fn forward(&self, x: ArrayView2<f32>) -> Array2<f32> {
        let mut z = Array2::zeros((x.nrows(), self.w.ncols()));
        linalg::general_mat_mul(1.0, &x, &self.w, 0.0, &mut z);
        z += &self.b;

        if let Some(ref act_fn) = self.act_fn {
            z.mapv_inplace(|z| act_fn.f(z));
        }

        z
    }
}
