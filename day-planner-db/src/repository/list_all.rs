use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::repository::error::RepositoryResult;

/// Generic repository trait for reading every stored entity
///
/// No ordering is guaranteed and no pagination is applied: the whole
/// collection is returned in one call.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
#[async_trait]
pub trait ListAll<T: Identifiable>: Send + Sync {
    /// Load every entity in the store
    ///
    /// # Returns
    /// * `Ok(Vec<T>)` - All stored entities, possibly empty
    /// * `Err` - If the store could not be reached
    async fn list_all(&self) -> RepositoryResult<Vec<T>>;
}
