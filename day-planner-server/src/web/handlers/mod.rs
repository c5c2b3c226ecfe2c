pub mod activity_handlers;
pub mod health_handlers;

use actix_web::http::header;
use actix_web::HttpResponse;
use day_planner_api::Outcome;
use serde::Serialize;

/// Turns a controller outcome into its HTTP response.
pub fn respond<T: Serialize>(outcome: Outcome<T>) -> HttpResponse {
    match outcome {
        Outcome::Ok(value) => HttpResponse::Ok().json(value),
        Outcome::Created { location, value } => HttpResponse::Created()
            .insert_header((header::LOCATION, location))
            .json(value),
        Outcome::NoContent => HttpResponse::NoContent().finish(),
    }
}
