use async_trait::async_trait;
use day_planner_db::models::activity::ActivityModel;
use day_planner_db::models::identifiable::Identifiable;
use day_planner_db::repository::error::{RepositoryError, RepositoryResult};
use day_planner_db::repository::update::Update;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::utils::store_error;

use super::document::ActivityDocument;
use super::repo_impl::{ActivityRepositoryImpl, REPLACE};

impl ActivityRepositoryImpl {
    pub(super) async fn update_impl(
        repo: &ActivityRepositoryImpl,
        item: ActivityModel,
    ) -> RepositoryResult<ActivityModel> {
        let pool: &PgPool = &repo.pool;
        let key = item.id_text();
        let key = key.as_str();
        let document = ActivityDocument::from(&item);
        let document = &document;

        let result = repo
            .retry
            .run("update", move || {
                sqlx::query(REPLACE)
                    .bind(key)
                    .bind(Json(document))
                    .execute(pool)
            })
            .await
            .map_err(|e| store_error(e, None))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(item.id));
        }
        Ok(item)
    }
}

#[async_trait]
impl Update<ActivityModel> for ActivityRepositoryImpl {
    async fn update(&self, item: ActivityModel) -> RepositoryResult<ActivityModel> {
        Self::update_impl(self, item).await
    }
}
