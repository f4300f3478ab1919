use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub entries: usize,
}

/// Custom error type for API endpoints
///
/// Every KV failure is client-caused, so each variant maps to a 4xx status.
/// Bodies are JSON `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or incomplete request body
    InvalidBody(String),
    /// Create on a key that is already present
    KeyExists(String),
    /// Key not found in the store
    KeyNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", msg),
            ),
            ApiError::KeyExists(key) => (
                StatusCode::CONFLICT,
                format!("Key already exists: {}", key),
            ),
            ApiError::KeyNotFound(key) => (
                StatusCode::NOT_FOUND,
                format!("Key not found: {}", key),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(key) => ApiError::KeyExists(key),
            StoreError::NotFound(key) => ApiError::KeyNotFound(key),
        }
    }
}

// Raised when a `value` string does not itself decode as JSON
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidBody(format!("value is not valid JSON: {}", err))
    }
}

// Syntax errors, wrong field types and a missing content type all count as bad input
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::InvalidBody(rejection.body_text())
    }
}
