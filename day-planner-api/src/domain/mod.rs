pub mod activity;
pub mod outcome;

pub use activity::*;
pub use outcome::*;
