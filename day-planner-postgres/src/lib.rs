pub mod postgres_repositories;
pub mod repository;
pub mod retry;
pub mod utils;

pub use postgres_repositories::PostgresRepositories;
pub use repository::activity_repository::ActivityRepositoryImpl;
pub use retry::RetryPolicy;

#[cfg(test)]
pub mod test_helper;
