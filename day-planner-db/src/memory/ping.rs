use async_trait::async_trait;

use crate::repository::error::RepositoryResult;
use crate::repository::ping::Ping;

use super::repo_impl::InMemActivityRepository;

#[async_trait]
impl Ping for InMemActivityRepository {
    fn store_name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
