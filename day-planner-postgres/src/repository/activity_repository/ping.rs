use async_trait::async_trait;
use day_planner_db::repository::error::RepositoryResult;
use day_planner_db::repository::ping::Ping;
use sqlx::PgPool;

use crate::utils::store_error;

use super::repo_impl::ActivityRepositoryImpl;

#[async_trait]
impl Ping for ActivityRepositoryImpl {
    fn store_name(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> RepositoryResult<()> {
        let pool: &PgPool = &self.pool;
        // not retried
        sqlx::query("SELECT 1")
            .execute(pool)
            .await
            .map_err(|e| store_error(e, None))?;
        Ok(())
    }
}
