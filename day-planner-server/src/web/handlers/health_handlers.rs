use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::health::readiness;
use crate::state::AppState;

pub async fn live_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "Healthy" }))
}

pub async fn ready_handler(app_state: web::Data<AppState>) -> HttpResponse {
    let report = readiness(app_state.controller.repository().as_ref()).await;
    if report.is_healthy() {
        HttpResponse::Ok().json(report)
    } else {
        HttpResponse::ServiceUnavailable().json(report)
    }
}
