pub mod domain;
pub mod error;
pub mod validation;

pub use error::*;
pub use domain::*;
pub use validation::*;
