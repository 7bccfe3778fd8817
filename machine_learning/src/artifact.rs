//! Pre-trained model artifacts.
//!
//! An artifact is a JSON document holding one [`ModelSpec`], loaded once when the process starts.
//! For example, a boosted ensemble with a single stump:
//!
//! ```json
//! { "gradient_boosting": {
//!     "n_features": 8, "init": 120000.0, "learning_rate": 0.1,
//!     "trees": [[
//!         { "split": { "feature": 1, "threshold": 0.5, "left": 1, "right": 2 } },
//!         { "leaf": { "value": 30000.0 } },
//!         { "leaf": { "value": -20000.0 } }
//!     ]]
//! } }
//! ```

use std::{fs, path::Path};

use log::{debug, info};
use ndarray::{Array1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    arch::{Regressor, Sequential, activations::ActFn, layers::Layer},
    ensemble::{GradientBoosting, Node},
};

/// The specification for the `ActFn` enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Sigmoid { amp: f32 },
    Relu,
}

/// The specification for a trained `Layer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSpec {
    Dense {
        dim: (usize, usize),
        weights: Vec<f32>,
        biases: Vec<f32>,
        #[serde(default)]
        act_fn: Option<ActFnSpec>,
    },
}

/// The specification for a trained `Model`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelSpec {
    GradientBoosting {
        n_features: usize,
        init: f32,
        learning_rate: f32,
        trees: Vec<Vec<Node>>,
    },
    Sequential {
        layers: Vec<LayerSpec>,
    },
}

/// A loaded, validated and ready to use model.
#[derive(Debug, Clone)]
pub enum Model {
    GradientBoosting(GradientBoosting),
    Sequential(Sequential),
}

impl Model {
    /// Reads and validates the artifact at `path`.
    ///
    /// # Errors
    /// Returns an `MlErr` if the file can't be read, isn't a valid artifact or describes a
    /// malformed model.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading model artifact from {}", path.display());

        let content = fs::read_to_string(path)?;
        let model = Self::from_json(&content)?;

        info!(
            kind = model.kind(), n_features = model.n_features();
            "model loaded from {}", path.display()
        );
        Ok(model)
    }

    /// Parses and validates an artifact held in memory.
    pub fn from_json(content: &str) -> Result<Self> {
        let spec: ModelSpec = serde_json::from_str(content)?;
        Self::from_spec(spec)
    }

    /// Builds the model described by `spec`.
    pub fn from_spec(spec: ModelSpec) -> Result<Self> {
        match spec {
            ModelSpec::GradientBoosting {
                n_features,
                init,
                learning_rate,
                trees,
            } => GradientBoosting::new(n_features, init, learning_rate, trees)
                .map(Self::GradientBoosting),
            ModelSpec::Sequential { layers } => {
                let layers = layers
                    .into_iter()
                    .map(|LayerSpec::Dense { dim, weights, biases, act_fn }| {
                        let act_fn = act_fn.map(|spec| match spec {
                            ActFnSpec::Sigmoid { amp } => ActFn::sigmoid(amp),
                            ActFnSpec::Relu => ActFn::relu(),
                        });
                        Layer::dense(dim, weights, biases, act_fn)
                    })
                    .collect::<Result<Vec<_>>>()?;

                Sequential::new(layers).map(Self::Sequential)
            }
        }
    }

    /// Returns a short name of the model's architecture.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GradientBoosting(_) => "gradient_boosting",
            Self::Sequential(_) => "sequential",
        }
    }
}

impl Regressor for Model {
    fn n_features(&self) -> usize {
        match self {
            Self::GradientBoosting(m) => m.n_features(),
            Self::Sequential(m) => m.n_features(),
        }
    }

    fn predict(&self, x: ArrayView2<f32>) -> Result<Array1<f32>> {
        match self {
            Self::GradientBoosting(m) => m.predict(x),
            Self::Sequential(m) => m.predict(x),
        }
    }
}
