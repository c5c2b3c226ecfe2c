pub mod activity;
pub mod identifiable;

// Re-exports
pub use activity::*;
pub use identifiable::*;
