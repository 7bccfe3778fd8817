pub mod catalog;
pub mod config;
pub mod encoder;
pub mod error;
pub mod predictor;
pub mod profile;
pub mod projection;

pub use config::EstimatorConfig;
pub use encoder::{FeatureVector, encode};
pub use error::{EstimatorErr, Result};
pub use predictor::{Prediction, Predictor};
pub use profile::Profile;
pub use projection::{GrowthPolicy, project};
