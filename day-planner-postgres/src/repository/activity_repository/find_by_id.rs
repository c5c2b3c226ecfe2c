use async_trait::async_trait;
use day_planner_db::models::activity::ActivityModel;
use day_planner_db::repository::error::RepositoryResult;
use day_planner_db::repository::find_by_id::FindById;
use sqlx::PgPool;
use uuid::Uuid;

use crate::utils::{store_error, TryFromRow};

use super::repo_impl::{ActivityRepositoryImpl, SELECT_BY_ID};

impl ActivityRepositoryImpl {
    pub(super) async fn find_by_id_impl(
        repo: &ActivityRepositoryImpl,
        id: Uuid,
    ) -> RepositoryResult<Option<ActivityModel>> {
        let pool: &PgPool = &repo.pool;
        let key = id.hyphenated().to_string();
        let key = key.as_str();

        let row = repo
            .retry
            .run("find_by_id", move || {
                sqlx::query(SELECT_BY_ID).bind(key).fetch_optional(pool)
            })
            .await
            .map_err(|e| store_error(e, None))?;

        row.as_ref().map(ActivityModel::try_from_row).transpose()
    }
}

#[async_trait]
impl FindById<ActivityModel> for ActivityRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<ActivityModel>> {
        Self::find_by_id_impl(self, id).await
    }
}
