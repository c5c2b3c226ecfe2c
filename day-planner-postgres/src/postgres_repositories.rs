use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::repository::activity_repository::ActivityRepositoryImpl;
use crate::retry::RetryPolicy;

/// Owns the connection pool and hands out repositories sharing it.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
    retry: RetryPolicy,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>, retry: RetryPolicy) -> Self {
        Self { pool, retry }
    }

    /// Open a pool against `database_url`
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        retry: RetryPolicy,
    ) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .connect(database_url)
            .await?;
        tracing::info!(max_connections, "Connected to PostgreSQL");
        Ok(Self::new(Arc::new(pool), retry))
    }

    /// Apply the schema migrations embedded from `migrations/`
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!().run(&*self.pool).await?;
        tracing::info!("Activity schema is up to date");
        Ok(())
    }

    pub fn activity_repository(&self) -> Arc<ActivityRepositoryImpl> {
        Arc::new(ActivityRepositoryImpl::new(self.pool.clone(), self.retry))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }
}
