use async_trait::async_trait;
use day_planner_db::models::activity::ActivityModel;
use day_planner_db::repository::error::RepositoryResult;
use day_planner_db::repository::list_all::ListAll;
use sqlx::PgPool;

use crate::utils::{store_error, TryFromRow};

use super::repo_impl::{ActivityRepositoryImpl, SELECT_ALL};

impl ActivityRepositoryImpl {
    pub(super) async fn list_all_impl(
        repo: &ActivityRepositoryImpl,
    ) -> RepositoryResult<Vec<ActivityModel>> {
        let pool: &PgPool = &repo.pool;
        let rows = repo
            .retry
            .run("list_all", move || sqlx::query(SELECT_ALL).fetch_all(pool))
            .await
            .map_err(|e| store_error(e, None))?;

        rows.iter().map(ActivityModel::try_from_row).collect()
    }
}

#[async_trait]
impl ListAll<ActivityModel> for ActivityRepositoryImpl {
    async fn list_all(&self) -> RepositoryResult<Vec<ActivityModel>> {
        Self::list_all_impl(self).await
    }
}
