use std::sync::Arc;

use day_planner_api::{ApiError, CreateActivityDto, Outcome, UpdateActivityDto};
use day_planner_db::{FindById, InMemActivityRepository, ListAll};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{activity_location, ActivitiesController};
use crate::test_utils::test_utils::{create_input, memory_repository, unavailable_repository};

fn controller() -> ActivitiesController {
    ActivitiesController::new(memory_repository())
}

async fn create(controller: &ActivitiesController, name: &str, price: i64) -> day_planner_api::ActivityDto {
    controller
        .create_activity(create_input(name, price))
        .await
        .unwrap()
        .into_value()
        .unwrap()
}

#[tokio::test]
async fn test_create_returns_location_and_full_record() {
    let controller = controller();

    let outcome = controller
        .create_activity(create_input("Yoga", 25))
        .await
        .unwrap();

    let location = outcome.location().unwrap().to_string();
    let created = outcome.into_value().unwrap();
    assert_eq!(location, activity_location(created.id));
    assert_eq!(location, format!("/activities/{}", created.id));
    assert_eq!(created.name, "Yoga");
    assert_eq!(created.business_owner, "Yoga owner");
    assert_eq!(created.price, Decimal::from(25));
    assert_eq!(created.created_date, created.updated_date);

    let fetched = controller.get_activity(created.id).await.unwrap().into_value().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_created_ids_are_distinct() {
    let controller = controller();

    let first = create(&controller, "Run", 10).await;
    let second = create(&controller, "Run", 10).await;

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_price_bounds_are_inclusive() {
    let controller = controller();

    for price in [1, 1000] {
        let outcome = controller.create_activity(create_input("Edge", price)).await;
        assert!(matches!(outcome, Ok(Outcome::Created { .. })), "price {price}");
    }

    for price in [0, 1001] {
        let err = controller
            .create_activity(create_input("Edge", price))
            .await
            .unwrap_err();
        assert_eq!(err.violated_fields(), vec!["price"], "price {price}");
    }
}

#[tokio::test]
async fn test_validation_reports_every_violated_field() {
    let controller = controller();

    let err = controller
        .create_activity(CreateActivityDto::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::ValidationFailed(_)));
    assert_eq!(err.violated_fields(), vec!["businessOwner", "name", "price"]);
}

#[tokio::test]
async fn test_validation_failure_never_reaches_the_store() {
    let controller = ActivitiesController::new(unavailable_repository());

    let create_err = controller
        .create_activity(create_input("", 5000))
        .await
        .unwrap_err();
    let update_err = controller
        .update_activity(Uuid::new_v4(), UpdateActivityDto::default())
        .await
        .unwrap_err();

    assert!(matches!(create_err, ApiError::ValidationFailed(_)));
    assert!(matches!(update_err, ApiError::ValidationFailed(_)));
}

#[tokio::test]
async fn test_list_filters_by_name_case_insensitively() {
    let controller = controller();
    create(&controller, "Spring Run", 10).await;
    create(&controller, "march madness", 20).await;
    create(&controller, "MARCHING BAND", 30).await;

    let mut names: Vec<String> = controller
        .list_activities(Some("March"))
        .await
        .unwrap()
        .into_value()
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    names.sort();

    assert_eq!(names, vec!["MARCHING BAND", "march madness"]);
}

#[tokio::test]
async fn test_list_ignores_blank_filter() {
    let controller = controller();
    create(&controller, "A", 10).await;
    create(&controller, "B", 20).await;

    for filter in [None, Some(""), Some("   ")] {
        let all = controller.list_activities(filter).await.unwrap().into_value().unwrap();
        assert_eq!(all.len(), 2, "filter {filter:?}");
    }
}

#[tokio::test]
async fn test_missing_ids_yield_not_found() {
    let controller = controller();
    create(&controller, "Existing", 10).await;
    let missing = Uuid::new_v4();

    let get = controller.get_activity(missing).await;
    let update = controller
        .update_activity(missing, UpdateActivityDto::new("X", None, "Owner", Decimal::from(10)))
        .await;
    let delete = controller.delete_activity(missing).await;

    assert!(matches!(get, Err(ApiError::NotFound(_))));
    assert!(matches!(update, Err(ApiError::NotFound(_))));
    assert!(matches!(delete, Err(ApiError::NotFound(_))));
}

#[tokio::test]
async fn test_update_replaces_fields_and_advances_updated_date() {
    let repository = Arc::new(InMemActivityRepository::new());
    let controller = ActivitiesController::new(repository.clone());
    let created = create(&controller, "Old", 10).await;

    let outcome = controller
        .update_activity(
            created.id,
            UpdateActivityDto::new("New", None, "New owner", Decimal::from(99)),
        )
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::NoContent);

    let stored = repository.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.created_date, created.created_date);
    assert!(stored.updated_date > created.updated_date);
    assert_eq!(stored.name, "New");
    assert_eq!(stored.description, None);
    assert_eq!(stored.business_owner, "New owner");
    assert_eq!(stored.price, Decimal::from(99));
}

#[tokio::test]
async fn test_repeated_updates_keep_moving_updated_date_forward() {
    let controller = controller();
    let created = create(&controller, "Tick", 10).await;
    let mut previous = created.updated_date;

    for price in 11..16 {
        controller
            .update_activity(
                created.id,
                UpdateActivityDto::new("Tick", None, "Owner", Decimal::from(price)),
            )
            .await
            .unwrap();
        let current = controller.get_activity(created.id).await.unwrap().into_value().unwrap();
        assert!(current.updated_date > previous);
        previous = current.updated_date;
    }
}

#[tokio::test]
async fn test_delete_removes_the_record() {
    let repository = Arc::new(InMemActivityRepository::new());
    let controller = ActivitiesController::new(repository.clone());
    let keep = create(&controller, "Keep", 10).await;
    let gone = create(&controller, "Gone", 10).await;

    let outcome = controller.delete_activity(gone.id).await.unwrap();

    assert_eq!(outcome, Outcome::NoContent);
    assert!(matches!(controller.get_activity(gone.id).await, Err(ApiError::NotFound(_))));
    let remaining: Vec<Uuid> = repository.list_all().await.unwrap().into_iter().map(|a| a.id).collect();
    assert_eq!(remaining, vec![keep.id]);
}

#[tokio::test]
async fn test_store_failures_surface_as_unavailable() {
    let controller = ActivitiesController::new(unavailable_repository());

    let list = controller.list_activities(None).await;
    let get = controller.get_activity(Uuid::new_v4()).await;
    let create = controller.create_activity(create_input("Valid", 10)).await;

    assert!(matches!(list, Err(ApiError::StoreUnavailable(_))));
    assert!(matches!(get, Err(ApiError::StoreUnavailable(_))));
    assert!(matches!(create, Err(ApiError::StoreUnavailable(_))));
}
