pub mod memory;
pub mod models;
pub mod repository;

pub use memory::InMemActivityRepository;
pub use models::*;
pub use repository::*;
