use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::{MlErr, Result};

/// A node of a regression tree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Rows with `x[feature] <= threshold` continue on `left`, the rest on `right`.
    Split {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    Leaf { value: f32 },
}

/// A regression tree stored as a flat node list, the root being the first node.
///
/// Children always come after their parent, so every evaluation walks forward and ends at a leaf.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates a new `Tree`.
    ///
    /// # Arguments
    /// * `id` - The position of the tree inside its ensemble, used for error reporting.
    /// * `nodes` - The flat node list.
    /// * `n_features` - The width of the rows this tree is going to evaluate.
    ///
    /// # Returns
    /// A new `Tree` or an error if the node list is malformed.
    pub fn new(id: usize, nodes: Vec<Node>, n_features: usize) -> Result<Self> {
        if nodes.is_empty() {
            return Err(MlErr::InvalidNode {
                tree: id,
                node: 0,
                reason: "the tree has no nodes",
            });
        }

        for (i, node) in nodes.iter().enumerate() {
            let Node::Split {
                feature,
                threshold,
                left,
                right,
            } = *node
            else {
                continue;
            };

            let invalid = |reason| MlErr::InvalidNode {
                tree: id,
                node: i,
                reason,
            };

            if feature >= n_features {
                return Err(invalid("split feature is out of range"));
            }
            if !threshold.is_finite() {
                return Err(invalid("split threshold is not finite"));
            }
            if left <= i || right <= i {
                return Err(invalid("children must come after their parent"));
            }
            if left >= nodes.len() || right >= nodes.len() {
                return Err(invalid("child index is out of range"));
            }
        }

        Ok(Self { nodes })
    }

    /// Walks the tree from the root down to the leaf `row` falls into.
    ///
    /// `row` must be at least as wide as the `n_features` the tree was validated against.
    pub fn eval(&self, row: ArrayView1<f32>) -> f32 {
        let mut i = 0;
        loop {
            match self.nodes[i] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => i = if row[feature] <= threshold { left } else { right },
            }
        }
    }
}
