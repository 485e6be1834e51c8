//! Error types for the duckpond service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Duck Error Enum ==
/// Unified error type for the duckpond service.
#[derive(Error, Debug)]
pub enum DuckError {
    /// Malformed input (non-positive id, empty url, ...)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Record or favorite already exists
    #[error("Already exists: {0}")]
    Duplicate(String),

    /// No such record in the store or in the favorites list
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation requires a non-empty favorites list
    #[error("Favorites list is empty")]
    EmptyFavorites,

    /// Third-party duck API request failed
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DuckError {
    fn into_response(self) -> Response {
        let status = match &self {
            DuckError::Validation(_) => StatusCode::BAD_REQUEST,
            DuckError::Duplicate(_) => StatusCode::CONFLICT,
            DuckError::NotFound(_) => StatusCode::NOT_FOUND,
            DuckError::EmptyFavorites => StatusCode::CONFLICT,
            DuckError::Upstream(_) => StatusCode::BAD_GATEWAY,
            DuckError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the duckpond service.
pub type Result<T> = std::result::Result<T, DuckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                DuckError::Validation("bad id".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                DuckError::Duplicate("duck 1".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                DuckError::NotFound("duck 7".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (DuckError::EmptyFavorites, StatusCode::CONFLICT),
            (
                DuckError::Upstream("timed out".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                DuckError::Internal("oops".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = err.into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_empty_favorites_message() {
        let err = DuckError::EmptyFavorites;
        assert_eq!(err.to_string(), "Favorites list is empty");
    }
}
