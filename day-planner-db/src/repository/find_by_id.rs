use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;
use crate::repository::error::RepositoryResult;

/// Generic repository trait for finding an entity by its ID
///
/// Returns an Option to handle cases where the entity might not exist; a
/// missing id is never reported as an error.
///
/// # Type Parameters
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl FindById<ActivityModel> for InMemActivityRepository {
///     async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<ActivityModel>> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait FindById<T: Identifiable>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Arguments
    /// * `id` - The UUID of the entity to find
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the store could not be queried
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<T>>;
}
