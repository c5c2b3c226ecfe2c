use actix_web::{web, HttpResponse};
use day_planner_api::{ApiError, CreateActivityDto, UpdateActivityDto};
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use super::respond;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListActivitiesQuery {
    pub name: Option<String>,
}

#[instrument(name = "handler::list_activities", skip(app_state))]
pub async fn list_activities_handler(
    app_state: web::Data<AppState>,
    query: web::Query<ListActivitiesQuery>,
) -> Result<HttpResponse, AppError> {
    let outcome = app_state
        .controller
        .list_activities(query.name.as_deref())
        .await?;
    Ok(respond(outcome))
}

#[instrument(name = "handler::get_activity", skip(app_state))]
pub async fn get_activity_handler(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_activity_id(&path)?;
    let outcome = app_state.controller.get_activity(id).await?;
    Ok(respond(outcome))
}

#[instrument(name = "handler::create_activity", skip(app_state, body))]
pub async fn create_activity_handler(
    app_state: web::Data<AppState>,
    body: web::Json<CreateActivityDto>,
) -> Result<HttpResponse, AppError> {
    let outcome = app_state
        .controller
        .create_activity(body.into_inner())
        .await?;
    Ok(respond(outcome))
}

#[instrument(name = "handler::update_activity", skip(app_state, body))]
pub async fn update_activity_handler(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateActivityDto>,
) -> Result<HttpResponse, AppError> {
    let id = parse_activity_id(&path)?;
    let outcome = app_state
        .controller
        .update_activity(id, body.into_inner())
        .await?;
    Ok(respond(outcome))
}

#[instrument(name = "handler::delete_activity", skip(app_state))]
pub async fn delete_activity_handler(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_activity_id(&path)?;
    let outcome = app_state.controller.delete_activity(id).await?;
    Ok(respond(outcome))
}

// A segment that is not a UUID cannot name a stored activity
fn parse_activity_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(format!("activity {raw}")).into())
}
