pub mod create;
pub mod delete;
pub mod find_by_id;
pub mod list_all;
pub mod ping;
pub mod repo_impl;
pub mod seed;
pub mod update;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::InMemActivityRepository;
