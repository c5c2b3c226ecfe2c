use async_trait::async_trait;

use crate::repository::error::RepositoryResult;

/// Readiness probe for the backing store
#[async_trait]
pub trait Ping: Send + Sync {
    /// Short name of the backing store, used in health reports
    fn store_name(&self) -> &'static str;

    /// Round trip to the store without touching any record
    async fn ping(&self) -> RepositoryResult<()>;
}
