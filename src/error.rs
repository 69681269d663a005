// Application error type and its conversion into HTTP responses

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{models::ParseEnumError, rental::QuoteError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("internal server error: {0:#}")]
    InternalServerError(#[from] anyhow::Error),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<ParseEnumError> for AppError {
    fn from(error: ParseEnumError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

impl From<QuoteError> for AppError {
    fn from(error: QuoteError) -> Self {
        match error {
            QuoteError::Overflow => AppError::InternalServerError(anyhow::Error::new(QuoteError::Overflow)),
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

// Malformed query strings and bodies get the same JSON error shape as handler errors
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(e) => {
                tracing::error!("Internal server error: {:?}", e);
                // Don't expose internal details to the client
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
            AppError::Unauthorized(message) => {
                tracing::warn!("Unauthorized access attempt: {}", message);
                (StatusCode::UNAUTHORIZED, message)
            }
            AppError::BadRequest(message) => {
                tracing::debug!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "success": false, "error": error_message }));
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
