use ndarray::{Array2, ArrayView2};

use super::Dense;
use crate::{Result, arch::activations::ActFn};

#[derive(Debug, Clone)]
pub enum Layer {
    Dense(Dense),
}

impl Layer {
    /// Builds a dense layer out of its raw row-major weights and biases.
    ///
    /// # Errors
    /// Fails if the parameter slices don't fit `dim`.
    pub fn dense(
        dim: (usize, usize),
        weights: Vec<f32>,
        biases: Vec<f32>,
        act_fn: Option<ActFn>,
    ) -> Result<Self> {
        Dense::new(dim, weights, biases, act_fn).map(Self::Dense)
    }

    /// Returns the `(inputs, outputs)` dimension of this layer.
    pub fn dim(&self) -> (usize, usize) {
        match self {
            Self::Dense(l) => l.dim(),
        }
    }

    pub fn size(&self) -> usize {
        match self {
            Self::Dense(l) => l.size(),
        }
    }

    pub fn forward(&self, x: ArrayView2<f32>) -> Array2<f32> {
        match self {
            Self::Dense(l) => l.forward(x),
        }
    }
}
