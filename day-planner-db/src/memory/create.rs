use std::collections::hash_map::Entry;

use async_trait::async_trait;

use crate::models::activity::ActivityModel;
use crate::repository::create::Create;
use crate::repository::error::{RepositoryError, RepositoryResult};

use super::repo_impl::InMemActivityRepository;

#[async_trait]
impl Create<ActivityModel> for InMemActivityRepository {
    async fn create(&self, item: ActivityModel) -> RepositoryResult<ActivityModel> {
        let mut activities = self.activities.write();
        match activities.entry(item.id) {
            Entry::Occupied(_) => Err(RepositoryError::DuplicateId(item.id)),
            Entry::Vacant(slot) => {
                slot.insert(item.clone());
                Ok(item)
            }
        }
    }
}
