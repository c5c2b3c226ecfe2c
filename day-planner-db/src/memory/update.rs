use async_trait::async_trait;

use crate::models::activity::ActivityModel;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::update::Update;

use super::repo_impl::InMemActivityRepository;

#[async_trait]
impl Update<ActivityModel> for InMemActivityRepository {
    async fn update(&self, item: ActivityModel) -> RepositoryResult<ActivityModel> {
        let mut activities = self.activities.write();
        let existing = activities
            .get_mut(&item.id)
            .ok_or(RepositoryError::NotFound(item.id))?;
        *existing = item.clone();
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::test_utils::test_utils::create_test_activity;
    use crate::memory::InMemActivityRepository;
    use crate::repository::error::RepositoryError;
    use crate::repository::find_by_id::FindById;
    use crate::repository::list_all::ListAll;
    use crate::repository::update::Update;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_update_replaces_record() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let item = create_test_activity("Skating");
        let repo = InMemActivityRepository::with_activities(vec![item.clone()]);

        let mut changed = item.clone();
        changed.name = "Ice skating".to_string();
        changed.description = None;
        changed.price = Decimal::from(12);
        repo.update(changed.clone()).await?;

        assert_eq!(repo.find_by_id(item.id).await?, Some(changed));
        assert_eq!(repo.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemActivityRepository::with_activities(vec![create_test_activity("A")]);
        let stranger = create_test_activity("B");

        let result = repo.update(stranger.clone()).await;

        assert!(matches!(result, Err(RepositoryError::NotFound(id)) if id == stranger.id));
        // never inserts
        assert_eq!(repo.list_all().await?.len(), 1);

        Ok(())
    }
}
