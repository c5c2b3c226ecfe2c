use async_trait::async_trait;
use uuid::Uuid;

use crate::repository::delete::Delete;
use crate::repository::error::{RepositoryError, RepositoryResult};

use super::repo_impl::InMemActivityRepository;

#[async_trait]
impl Delete for InMemActivityRepository {
    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        self.activities
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
