//! Response DTOs for the duckpond API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::records::Record;

/// Response body for record creation and deletion (POST/DELETE /records)
#[derive(Debug, Clone, Serialize)]
pub struct RecordResponse {
    /// Success message
    pub message: String,
    /// The record involved, absent for deletions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Record>,
}

impl RecordResponse {
    /// Response for a freshly created record
    pub fn created(record: Record) -> Self {
        Self {
            message: format!("Duck '{}' added successfully", record.url),
            record: Some(record),
        }
    }

    /// Response for a deleted record
    pub fn deleted(id: u64) -> Self {
        Self {
            message: format!("Duck with id {} deleted successfully", id),
            record: None,
        }
    }
}

/// Response body for single-favorite operations
/// (POST/DELETE /favorites/:id)
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    /// Success message
    pub message: String,
    /// The id that was added or removed
    pub id: u64,
}

impl FavoriteResponse {
    /// Response for an id added to favorites
    pub fn added(id: u64) -> Self {
        Self {
            message: format!("Duck {} added to favorites", id),
            id,
        }
    }

    /// Response for an id removed from favorites
    pub fn removed(id: u64) -> Self {
        Self {
            message: format!("Duck {} removed from favorites", id),
            id,
        }
    }
}

/// Response body for the favorites listing (GET /favorites)
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesListResponse {
    /// Number of favorited records
    pub count: usize,
    /// The favorited records in insertion order
    pub favorites: Vec<Record>,
}

impl FavoritesListResponse {
    /// Creates a listing response from resolved records
    pub fn new(favorites: Vec<Record>) -> Self {
        Self {
            count: favorites.len(),
            favorites,
        }
    }
}

/// Response body for clear operations (DELETE /favorites, DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
