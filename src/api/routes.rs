//! API Routes
//!
//! Configures the Axum router with all duckpond endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_favorite_handler, clear_cache_handler, clear_favorites_handler, create_record_handler,
    delete_record_handler, get_favorite_handler, health_handler, list_favorites_handler,
    remove_favorite_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /records` - Create a record (random duck when no url is given)
/// - `DELETE /records/:id` - Delete a record from the store
/// - `POST /favorites/:id` - Add a record id to favorites
/// - `DELETE /favorites/:id` - Remove a record id from favorites
/// - `GET /favorites` - List favorited records
/// - `DELETE /favorites` - Clear the favorites list
/// - `GET /favorites/:id` - Resolve a record through the cache
/// - `DELETE /cache` - Drop all cached records
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/records", post(create_record_handler))
        .route("/records/:id", delete(delete_record_handler))
        .route(
            "/favorites",
            get(list_favorites_handler).delete(clear_favorites_handler),
        )
        .route(
            "/favorites/:id",
            get(get_favorite_handler)
                .post(add_favorite_handler)
                .delete(remove_favorite_handler),
        )
        .route("/cache", delete(clear_cache_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
