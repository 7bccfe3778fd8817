pub mod activations;
pub mod layers;
mod model;
mod sequential;

pub use model::{Regressor, ensure_finite};
pub use sequential::Sequential;
