use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::activity::ActivityModel;

use super::repo_impl::InMemActivityRepository;

impl InMemActivityRepository {
    /// Builds a store holding the three sample activities used for demos
    /// and local runs.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let sample = |name: &str, owner: &str, price: i64| ActivityModel {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            business_owner: owner.to_string(),
            price: Decimal::from(price),
            created_date: now,
            updated_date: now,
        };

        let repo = Self::with_activities(vec![
            sample("A", "Owner A", 300),
            sample("B", "Owner B", 400),
            sample("C", "Owner C", 200),
        ]);
        tracing::info!(count = repo.len(), "Seeded in-memory activity store");
        repo
    }
}

#[cfg(test)]
mod tests {
    use crate::memory::InMemActivityRepository;
    use crate::repository::list_all::ListAll;

    #[tokio::test]
    async fn test_seeded_store_holds_samples() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = InMemActivityRepository::seeded();

        let mut names: Vec<_> = repo.list_all().await?.into_iter().map(|a| a.name).collect();
        names.sort();

        assert_eq!(names, vec!["A", "B", "C"]);

        Ok(())
    }
}
