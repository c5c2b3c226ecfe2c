use async_trait::async_trait;
use uuid::Uuid;

use crate::models::activity::ActivityModel;
use crate::repository::error::RepositoryResult;
use crate::repository::find_by_id::FindById;

use super::repo_impl::InMemActivityRepository;

#[async_trait]
impl FindById<ActivityModel> for InMemActivityRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<ActivityModel>> {
        Ok(self.activities.read().get(&id).cloned())
    }
}
