use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use day_planner_api::ApiError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Api(ApiError::ValidationFailed(_)) => StatusCode::BAD_REQUEST,
            AppError::Api(ApiError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Api(ApiError::StoreUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Api(ApiError::InternalError(_)) | AppError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(application_error = %self, "Responding with error");
        } else {
            tracing::warn!(application_error = %self, "Rejecting request");
        }

        let body = match self {
            AppError::Api(ApiError::ValidationFailed(violations)) => {
                json!({ "error": self.to_string(), "violations": violations })
            }
            AppError::Api(ApiError::StoreUnavailable(_)) => {
                json!({ "error": "Activity store is unavailable" })
            }
            AppError::Api(ApiError::InternalError(_)) | AppError::Config(_) => {
                json!({ "error": "An internal error occurred" })
            }
            AppError::Api(ApiError::NotFound(_)) => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(status).json(body)
    }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
