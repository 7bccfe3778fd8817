pub mod arch;
pub mod artifact;
pub mod ensemble;
pub mod error;
mod test;

pub use arch::Regressor;
pub use artifact::Model;
pub use error::{MlErr, Result};
