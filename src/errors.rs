use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

/// Request-level error taxonomy. Everything a handler can fail with maps to
/// one of three HTTP outcomes: 400 for bad input, 404 for a missing row,
/// 500 for any store failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(Vec<String>),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(details) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Validation error",
                "details": details
            })),
            ApiError::NotFound(message) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": message
            })),
            ApiError::Database(e) => {
                // Log the driver error with context, return a generic message
                tracing::error!("Database error: {}", e);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Internal server error"
                }))
            }
        }
    }
}
