#[cfg(test)]
pub mod test_utils {
    use std::sync::Arc;

    use async_trait::async_trait;
    use day_planner_api::CreateActivityDto;
    use day_planner_db::{
        ActivityModel, ActivityRepository, Create, Delete, FindById, InMemActivityRepository,
        ListAll, Ping, RepositoryError, RepositoryResult, Update,
    };
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::config::AppConfig;
    use crate::state::AppState;

    /// A store whose every operation fails as if the backend were down
    pub struct UnavailableRepository;

    fn unavailable<T>() -> RepositoryResult<T> {
        Err(RepositoryError::StoreUnavailable("connection refused".to_string()))
    }

    #[async_trait]
    impl ListAll<ActivityModel> for UnavailableRepository {
        async fn list_all(&self) -> RepositoryResult<Vec<ActivityModel>> {
            unavailable()
        }
    }

    #[async_trait]
    impl FindById<ActivityModel> for UnavailableRepository {
        async fn find_by_id(&self, _id: Uuid) -> RepositoryResult<Option<ActivityModel>> {
            unavailable()
        }
    }

    #[async_trait]
    impl Create<ActivityModel> for UnavailableRepository {
        async fn create(&self, _item: ActivityModel) -> RepositoryResult<ActivityModel> {
            unavailable()
        }
    }

    #[async_trait]
    impl Update<ActivityModel> for UnavailableRepository {
        async fn update(&self, _item: ActivityModel) -> RepositoryResult<ActivityModel> {
            unavailable()
        }
    }

    #[async_trait]
    impl Delete for UnavailableRepository {
        async fn delete(&self, _id: Uuid) -> RepositoryResult<()> {
            unavailable()
        }
    }

    #[async_trait]
    impl Ping for UnavailableRepository {
        fn store_name(&self) -> &'static str {
            "unavailable"
        }

        async fn ping(&self) -> RepositoryResult<()> {
            unavailable()
        }
    }

    pub fn memory_repository() -> Arc<dyn ActivityRepository> {
        Arc::new(InMemActivityRepository::new())
    }

    pub fn unavailable_repository() -> Arc<dyn ActivityRepository> {
        Arc::new(UnavailableRepository)
    }

    pub fn test_state(repository: Arc<dyn ActivityRepository>) -> AppState {
        AppState::new(repository, Arc::new(AppConfig::default()))
    }

    pub fn create_input(name: &str, price: i64) -> CreateActivityDto {
        CreateActivityDto::new(
            name,
            Some(format!("{name} description")),
            format!("{name} owner"),
            Decimal::from(price),
        )
    }
}
