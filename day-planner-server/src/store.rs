use std::sync::Arc;

use anyhow::Context;
use day_planner_db::{ActivityRepository, InMemActivityRepository, Ping};
use day_planner_postgres::PostgresRepositories;

use crate::config::{AppConfig, StoreKind};

/// Builds the process-wide activity repository selected by `config`.
///
/// The durable store is connected and migrated before it is handed out.
pub async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn ActivityRepository>> {
    let repository: Arc<dyn ActivityRepository> = match config.store {
        StoreKind::Memory => {
            if config.seed_store {
                Arc::new(InMemActivityRepository::seeded())
            } else {
                Arc::new(InMemActivityRepository::new())
            }
        }
        StoreKind::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is not set")?;
            let repos = PostgresRepositories::connect(
                database_url,
                config.database_max_connections,
                config.retry_policy(),
            )
            .await
            .context("Failed to connect to PostgreSQL")?;
            repos
                .migrate()
                .await
                .context("Failed to apply activity migrations")?;
            if config.seed_store {
                tracing::warn!("SEED_STORE only applies to the memory store, ignoring");
            }
            repos.activity_repository()
        }
    };

    tracing::info!(store = repository.store_name(), "Activity repository ready");
    Ok(repository)
}

#[cfg(test)]
mod tests {
    use super::*;
    use day_planner_db::ListAll;

    #[tokio::test]
    async fn test_memory_store_starts_empty() {
        let repository = build_repository(&AppConfig::default()).await.unwrap();

        assert_eq!(repository.store_name(), "memory");
        assert!(repository.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_store_can_be_seeded() {
        let config = AppConfig {
            seed_store: true,
            ..AppConfig::default()
        };

        let repository = build_repository(&config).await.unwrap();

        assert_eq!(repository.list_all().await.unwrap().len(), 3);
    }
}
