pub mod activity_repository;
pub mod create;
pub mod delete;
pub mod error;
pub mod find_by_id;
pub mod list_all;
pub mod ping;
pub mod update;

// Re-exports
pub use activity_repository::*;
pub use create::*;
pub use delete::*;
pub use error::*;
pub use find_by_id::*;
pub use list_all::*;
pub use ping::*;
pub use update::*;
