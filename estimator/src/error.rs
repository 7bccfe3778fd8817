use std::{error::Error, fmt};

use machine_learning::MlErr;

/// The estimator's result type.
pub type Result<T> = std::result::Result<T, EstimatorErr>;

/// All errors that can occur while estimating a salary.
#[derive(Debug)]
pub enum EstimatorErr {
    /// A label that doesn't belong to its field's catalog.
    UnknownLabel { field: &'static str, label: String },
    /// A work year outside of the years the model covers.
    WorkYearOutOfRange { year: u16 },
    /// A remote ratio that isn't one of the offered percentages.
    InvalidRemoteRatio { ratio: u8 },
    /// A profile that isn't valid JSON or doesn't have the expected shape.
    Parse(serde_json::Error),
    /// The model can't be loaded.
    Model(MlErr),
    /// The model expects a different amount of features than the encoder produces.
    IncompatibleModel { got: usize, expected: usize },
    /// The model failed while predicting.
    Inference(MlErr),
    /// A configuration variable holds an unusable value.
    InvalidConfig { var: &'static str, msg: String },
}

impl fmt::Display for EstimatorErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLabel { field, label } => write!(f, "unknown {field}: {label:?}"),
            Self::WorkYearOutOfRange { year } => write!(f, "work year {year} is out of range"),
            Self::InvalidRemoteRatio { ratio } => {
                write!(f, "remote ratio {ratio}% is not one of the offered choices")
            }
            Self::Parse(e) => write!(f, "invalid profile: {e}"),
            Self::Model(e) => write!(f, "model error: {e}"),
            Self::IncompatibleModel { got, expected } => write!(
                f,
                "the model takes {got} features but profiles are encoded into {expected}"
            ),
            Self::Inference(e) => write!(f, "prediction error: {e}"),
            Self::InvalidConfig { var, msg } => write!(f, "invalid config {var}: {msg}"),
        }
    }
}

impl Error for EstimatorErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Model(e) | Self::Inference(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for EstimatorErr {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<MlErr> for EstimatorErr {
    fn from(e: MlErr) -> Self {
        Self::Model(e)
    }
}
