use async_trait::async_trait;
use day_planner_db::models::activity::ActivityModel;
use day_planner_db::models::identifiable::Identifiable;
use day_planner_db::repository::create::Create;
use day_planner_db::repository::error::RepositoryResult;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::utils::store_error;

use super::document::ActivityDocument;
use super::repo_impl::{ActivityRepositoryImpl, INSERT};

impl ActivityRepositoryImpl {
    pub(super) async fn create_impl(
        repo: &ActivityRepositoryImpl,
        item: ActivityModel,
    ) -> RepositoryResult<ActivityModel> {
        let pool: &PgPool = &repo.pool;
        let key = item.id_text();
        let key = key.as_str();
        let document = ActivityDocument::from(&item);
        let document = &document;

        repo.retry
            .run("create", move || {
                sqlx::query(INSERT)
                    .bind(key)
                    .bind(Json(document))
                    .execute(pool)
            })
            .await
            .map_err(|e| store_error(e, Some(item.id)))?;

        Ok(item)
    }
}

#[async_trait]
impl Create<ActivityModel> for ActivityRepositoryImpl {
    async fn create(&self, item: ActivityModel) -> RepositoryResult<ActivityModel> {
        Self::create_impl(self, item).await
    }
}
