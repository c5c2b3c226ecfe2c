pub mod create;
pub mod delete;
pub mod document;
pub mod find_by_id;
pub mod list_all;
pub mod ping;
pub mod repo_impl;
pub mod update;

#[cfg(test)]
pub mod test_utils;

pub use document::ActivityDocument;
pub use repo_impl::ActivityRepositoryImpl;
