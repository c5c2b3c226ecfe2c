use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::error::RepositoryResult;

/// Generic repository trait for inserting a single entity
///
/// The entity arrives fully populated: its id and timestamps were assigned by
/// the caller and are stored as given.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Create<T: Identifiable>: Send + Sync {
    /// Insert `item`
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity
    /// * `Err(DuplicateId)` - If an entity with the same id is already stored
    /// * `Err(StoreUnavailable)` - If the store could not be reached
    async fn create(&self, item: T) -> RepositoryResult<T>;
}
