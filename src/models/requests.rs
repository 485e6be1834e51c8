//! Request DTOs for the duckpond API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for record creation (POST /records)
///
/// # Fields
/// - `url`: Image url to persist. When omitted (or the body is missing
///   entirely) a random duck image url is fetched from the third-party API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRecordRequest {
    /// Optional image url; random duck when absent
    #[serde(default)]
    pub url: Option<String>,
}
