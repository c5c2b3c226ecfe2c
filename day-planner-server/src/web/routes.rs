use actix_web::{error, web, HttpRequest};
use day_planner_api::{ApiError, FieldViolation};

use crate::error::AppError;
use crate::web::handlers::{activity_handlers, health_handlers};

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/health")
                .route("/live", web::get().to(health_handlers::live_handler))
                .route("/ready", web::get().to(health_handlers::ready_handler)),
        )
        .service(
            web::scope("/activities")
                .route("", web::get().to(activity_handlers::list_activities_handler))
                .route("", web::post().to(activity_handlers::create_activity_handler))
                .route("/{id}", web::get().to(activity_handlers::get_activity_handler))
                .route("/{id}", web::put().to(activity_handlers::update_activity_handler))
                .route("/{id}", web::delete().to(activity_handlers::delete_activity_handler)),
        );
}

// Unreadable bodies get the same 400 shape as rule violations
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _req: &HttpRequest| {
        AppError::from(ApiError::ValidationFailed(vec![FieldViolation::new(
            "body",
            err.to_string(),
        )]))
        .into()
    })
}
