//! Request orchestration for the activities resource.
//!
//! Every operation runs one linear sequence: validate the input, call the
//! repository, map the entity to its external shape, produce an [`Outcome`].
//! Validation failures never reach the repository.

use std::sync::Arc;

use chrono::Utc;
use day_planner_api::{
    into_api_error, ActivityDto, ApiError, ApiResult, CreateActivityDto, Outcome,
    UpdateActivityDto,
};
use day_planner_db::{ActivityModel, ActivityRepository, Create, Delete, FindById, ListAll, Update};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Path under which activities are addressed by id
pub const ACTIVITIES_PATH: &str = "/activities";

pub struct ActivitiesController {
    repository: Arc<dyn ActivityRepository>,
}

impl ActivitiesController {
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn ActivityRepository> {
        &self.repository
    }

    /// Lists every activity, keeping only those whose name contains `name`
    /// (case-insensitive) when a non-blank filter is given.
    #[instrument(name = "controller::list_activities", skip(self))]
    pub async fn list_activities(&self, name: Option<&str>) -> ApiResult<Outcome<Vec<ActivityDto>>> {
        let mut activities: Vec<ActivityDto> = self
            .repository
            .list_all()
            .await?
            .into_iter()
            .map(ActivityDto::from)
            .collect();

        if let Some(filter) = name.filter(|n| !n.trim().is_empty()) {
            let needle = filter.to_lowercase();
            activities.retain(|activity| activity.name.to_lowercase().contains(&needle));
        }

        info!(count = activities.len(), "Retrieved activities");
        Ok(Outcome::Ok(activities))
    }

    #[instrument(name = "controller::get_activity", skip(self))]
    pub async fn get_activity(&self, id: Uuid) -> ApiResult<Outcome<ActivityDto>> {
        let activity = self.find_existing(id).await?;
        Ok(Outcome::Ok(activity.into()))
    }

    #[instrument(name = "controller::create_activity", skip(self, input))]
    pub async fn create_activity(&self, input: CreateActivityDto) -> ApiResult<Outcome<ActivityDto>> {
        let fields = input.into_fields().map_err(into_api_error)?;

        let created = self
            .repository
            .create(ActivityModel::new(fields, Utc::now()))
            .await?;
        info!(id = %created.id, "Created activity");

        Ok(Outcome::Created {
            location: activity_location(created.id),
            value: created.into(),
        })
    }

    /// Replaces the client-writable fields of an existing activity.
    ///
    /// `id` and `createdDate` are kept; `updatedDate` moves strictly forward.
    #[instrument(name = "controller::update_activity", skip(self, input))]
    pub async fn update_activity(&self, id: Uuid, input: UpdateActivityDto) -> ApiResult<Outcome<()>> {
        let fields = input.into_fields().map_err(into_api_error)?;

        let mut activity = self.find_existing(id).await?;
        activity.replace_fields(fields, Utc::now());
        self.repository.update(activity).await?;
        info!("Updated activity");

        Ok(Outcome::NoContent)
    }

    #[instrument(name = "controller::delete_activity", skip(self))]
    pub async fn delete_activity(&self, id: Uuid) -> ApiResult<Outcome<()>> {
        self.find_existing(id).await?;
        self.repository.delete(id).await?;
        info!("Deleted activity");

        Ok(Outcome::NoContent)
    }

    async fn find_existing(&self, id: Uuid) -> ApiResult<ActivityModel> {
        match self.repository.find_by_id(id).await? {
            Some(activity) => Ok(activity),
            None => {
                warn!(%id, "Activity not found");
                Err(ApiError::NotFound(format!("activity {id}")))
            }
        }
    }
}

/// Reference that re-fetches the activity with `id`
pub fn activity_location(id: Uuid) -> String {
    format!("{ACTIVITIES_PATH}/{id}")
}

#[cfg(test)]
mod tests;
