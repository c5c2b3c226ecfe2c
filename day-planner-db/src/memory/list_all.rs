use async_trait::async_trait;

use crate::models::activity::ActivityModel;
use crate::repository::error::RepositoryResult;
use crate::repository::list_all::ListAll;

use super::repo_impl::InMemActivityRepository;

#[async_trait]
impl ListAll<ActivityModel> for InMemActivityRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<ActivityModel>> {
        let activities = self.activities.read();
        Ok(activities.values().cloned().collect())
    }
}
