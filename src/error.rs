use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::{InvalidItemId, ItemId, StoreError};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// mapping the two modeled failure kinds (invalid-input and not-found) to
/// 400 and 404, and anything from the store layer to a generic 500,
/// formatted as JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// Create payload rejected (missing, blank, or non-text name)
    InvalidName(&'static str),
    /// Path parameter is not a syntactically valid item id
    InvalidId(String),
    /// Delete-by-name matched zero items
    NameNotFound(String),
    /// Delete-by-id matched zero items
    ItemNotFound(ItemId),
    /// Document store operation error
    StoreError(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidName(msg) => (StatusCode::BAD_REQUEST, msg.to_string()),
            ApiError::InvalidId(id) => (
                StatusCode::BAD_REQUEST,
                format!("invalid id format: expected a 24 character hex string, got '{}'", id),
            ),
            ApiError::NameNotFound(name) => (
                StatusCode::NOT_FOUND,
                format!("no items with that name: {:?}", name),
            ),
            ApiError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("item not found: {}", id),
            ),
            ApiError::StoreError(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("document store error: {}", err),
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
        ApiError::StoreError(err)
    }
}

impl From<InvalidItemId> for ApiError {
    fn from(err: InvalidItemId) -> Self {
        ApiError::InvalidId(err.0)
    }
}
