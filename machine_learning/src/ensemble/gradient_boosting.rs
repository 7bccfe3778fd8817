use ndarray::{Array1, ArrayView2};

use super::{Node, Tree};
use crate::{
    MlErr, Result,
    arch::{Regressor, ensure_finite},
};

/// An additive ensemble of regression trees fitted by gradient boosting.
///
/// `prediction = init + learning_rate * sum(tree(x))`
#[derive(Debug, Clone)]
pub struct GradientBoosting {
    n_features: usize,
    init: f32,
    learning_rate: f32,
    trees: Vec<Tree>,
}

impl GradientBoosting {
    /// Creates a new `GradientBoosting` ensemble.
    ///
    /// # Arguments
    /// * `n_features` - The width of the input rows.
    /// * `init` - The initial estimate every prediction starts from.
    /// * `learning_rate` - The shrinkage applied to each tree's contribution.
    /// * `trees` - The node lists of each tree.
    ///
    /// # Returns
    /// A new `GradientBoosting` or an error if there are no trees or any of them is malformed.
    pub fn new<I>(n_features: usize, init: f32, learning_rate: f32, trees: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<Node>>,
    {
        let trees = trees
            .into_iter()
            .enumerate()
            .map(|(id, nodes)| Tree::new(id, nodes, n_features))
            .collect::<Result<Vec<_>>>()?;

        if trees.is_empty() || n_features == 0 {
            return Err(MlErr::EmptyModel);
        }

        Ok(Self {
            n_features,
            init,
            learning_rate,
            trees,
        })
    }
}

impl Regressor for GradientBoosting {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>> {
        self.check_width(&x)?;

        let y: Array1<f32> = x
            .outer_iter()
            .map(|row| {
                let boost: f32 = self.trees.iter().map(|tree| tree.eval(row)).sum();
                self.init + self.learning_rate * boost
            })
            .collect();

        ensure_finite(&y)?;
        Ok(y)
    }
}
