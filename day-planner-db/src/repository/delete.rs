use async_trait::async_trait;
use uuid::Uuid;

use crate::repository::error::RepositoryResult;

/// Generic repository trait for permanently removing an entity
///
/// There is no tombstone and no recovery path.
#[async_trait]
pub trait Delete: Send + Sync {
    /// Delete the entity with the given id
    ///
    /// # Returns
    /// * `Ok(())` - The entity was removed
    /// * `Err(NotFound)` - If no entity has that id
    /// * `Err(StoreUnavailable)` - If the store could not be reached
    async fn delete(&self, id: Uuid) -> RepositoryResult<()>;
}
