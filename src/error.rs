use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{ERR_INVALID_CREDENTIALS, ERR_USER_NOT_FOUND};

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate email or duplicate purchase
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid email or password")]
    Auth,

    /// Unresolved user id on a mutating endpoint
    #[error("User not found")]
    NotFound,

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Auth => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PasswordHash(_) | AppError::TaskJoin(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A body that is not JSON, or has a field of the wrong type, is a validation error
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection.body_text());
        AppError::Validation(rejection.body_text())
    }
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            AppError::PasswordHash(ref e) => {
                tracing::error!("Password hashing error: {}", e);
                "Internal server error"
            }
            AppError::TaskJoin(ref e) => {
                tracing::error!("Task join error: {:?}", e);
                "Internal server error"
            }
            AppError::Validation(ref msg) | AppError::Conflict(ref msg) => msg.as_str(),
            AppError::Auth => ERR_INVALID_CREDENTIALS,
            AppError::NotFound => ERR_USER_NOT_FOUND,
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
