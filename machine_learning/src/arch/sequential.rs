use log::debug;
use ndarray::{Array1, Array2, ArrayView2, Axis};

use super::{Regressor, ensure_finite, layers::Layer};
use crate::{MlErr, Result};

/// A sequential model: information flows forward through its layers, the output of each layer
/// being the input of the next one.
#[derive(Debug, Clone)]
pub struct Sequential {
    layers: Vec<Layer>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance, or an error if there are no layers, adjacent layers don't
    /// agree on their dimensions or the last layer doesn't output a single value.
    pub fn new<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Layer>,
    {
        let layers: Vec<Layer> = layers.into_iter().collect();
        let last = layers.last().ok_or(MlErr::EmptyModel)?;

        // Adjacent layers must have compatible dimensions: prev.m == next.n
        for (i, pair) in layers.windows(2).enumerate() {
            let (_, prev_m) = pair[0].dim();
            let (curr_n, _) = pair[1].dim();
            if prev_m != curr_n {
                return Err(MlErr::LayerDimMismatch {
                    layer: i + 1,
                    got: curr_n,
                    expected: prev_m,
                });
            }
        }

        let (_, out) = last.dim();
        if out != 1 {
            return Err(MlErr::SizeMismatch {
                what: "output units",
                got: out,
                expected: 1,
            });
        }

        let model = Self { layers };
        debug!(layers = model.layers.len(), params = model.size(); "sequential model built");
        Ok(model)
    }

    /// Returns the amount of parameters in the model.
    pub fn size(&self) -> usize {
        self.layers.iter().map(|layer| layer.size()).sum()
    }

    /// Makes a forward pass through the network.
    ///
    /// # Arguments
    /// * `x` - The input data.
    ///
    /// # Returns
    /// The raw `(n_rows, 1)` output of the last layer.
    pub fn forward(&self, x: ArrayView2<f32>) -> Result<Array2<f32>> {
        self.check_width(&x)?;

        let mut layers = self.layers.iter();
        let Some(first) = layers.next() else {
            return Err(MlErr::EmptyModel);
        };

        let out = layers.fold(first.forward(x), |a, layer| layer.forward(a.view()));
        Ok(out)
    }
}

impl Regressor for Sequential {
    fn n_features(&self) -> usize {
        self.layers.first().map_or(0, |layer| layer.dim().0)
    }

    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>> {
        let y = self.forward(x)?.index_axis_move(Axis(1), 0);
        ensure_finite(&y)?;
        Ok(y)
    }
}
