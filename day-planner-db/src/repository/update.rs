use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::error::RepositoryResult;

/// Generic repository trait for replacing a stored entity wholesale
///
/// The stored record whose id matches `item` is replaced by `item`. An update
/// never inserts: an unknown id is reported as `NotFound`.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait Update<T: Identifiable>: Send + Sync {
    /// Replace the stored entity with the same id as `item`
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity
    /// * `Err(NotFound)` - If no entity has that id
    /// * `Err(StoreUnavailable)` - If the store could not be reached
    async fn update(&self, item: T) -> RepositoryResult<T>;
}
