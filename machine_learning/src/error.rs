use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug)]
pub enum MlErr {
    Io(io::Error),
    Parse(serde_json::Error),
    SizeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyModel,
    LayerDimMismatch {
        layer: usize,
        got: usize,
        expected: usize,
    },
    InvalidNode {
        tree: usize,
        node: usize,
        reason: &'static str,
    },
    NonFinite {
        row: usize,
    },
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlErr::Io(e) => write!(f, "io error: {e}"),
            MlErr::Parse(e) => write!(f, "invalid model artifact: {e}"),
            MlErr::SizeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "There's a size mismatch in {what}, got {got} and expected {expected}"
            ),
            MlErr::EmptyModel => write!(f, "the model has no layers or trees"),
            MlErr::LayerDimMismatch {
                layer,
                got,
                expected,
            } => write!(
                f,
                "layer {layer}: input size ({got}) does not match previous layer output size ({expected})"
            ),
            MlErr::InvalidNode { tree, node, reason } => {
                write!(f, "tree {tree}, node {node}: {reason}")
            }
            MlErr::NonFinite { row } => {
                write!(f, "the model produced a non finite prediction for row {row}")
            }
        }
    }
}

impl Error for MlErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlErr::Io(e) => Some(e),
            MlErr::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MlErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for MlErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
