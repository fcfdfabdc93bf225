//! # REST API Errors
//!
//! Error types for the REST API module.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::schema::ValidationError;
use crate::store::StoreError;

use super::response::{MessageResponse, ValidationErrorResponse};

/// Message sent with every 404
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Request body failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Movie not found
    #[error("Movie not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure or poisoned lock
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            RestError::Validation(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        RestError::Internal(err.to_string())
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            RestError::Validation(err) => {
                (status, Json(ValidationErrorResponse::from(err))).into_response()
            }
            RestError::NotFound => {
                (status, Json(MessageResponse::new(NOT_FOUND_MESSAGE))).into_response()
            }
            other => (status, Json(MessageResponse::new(other.to_string()))).into_response(),
        }
    }
}
