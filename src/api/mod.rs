//! API Module
//!
//! HTTP handlers and routing for the duckpond REST API.
//!
//! # Endpoints
//! - `POST /records` - Create a record (random duck when no url is given)
//! - `DELETE /records/:id` - Delete a record from the store
//! - `POST /favorites/:id` - Add a record id to favorites
//! - `DELETE /favorites/:id` - Remove a record id from favorites
//! - `GET /favorites` - List favorited records in insertion order
//! - `DELETE /favorites` - Clear the favorites list
//! - `GET /favorites/:id` - Resolve a record through the cache
//! - `DELETE /cache` - Drop all cached records
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
