use async_trait::async_trait;
use day_planner_db::repository::delete::Delete;
use day_planner_db::repository::error::{RepositoryError, RepositoryResult};
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::store_error;

use super::repo_impl::{ActivityRepositoryImpl, DELETE};

impl ActivityRepositoryImpl {
    pub(super) async fn delete_impl(repo: &ActivityRepositoryImpl, id: Uuid) -> RepositoryResult<()> {
        let pool: &PgPool = &repo.pool;
        let key = id.hyphenated().to_string();
        let key = key.as_str();

        let result = repo
            .retry
            .run("delete", move || sqlx::query(DELETE).bind(key).execute(pool))
            .await
            .map_err(|e| store_error(e, None))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl Delete for ActivityRepositoryImpl {
    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        Self::delete_impl(self, id).await
    }
}
