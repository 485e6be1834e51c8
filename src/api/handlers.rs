//! API Handlers
//!
//! HTTP request handlers for each duckpond endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::favorites::FavoritesManager;
use crate::fetch::RandomDuckClient;
use crate::models::{
    ClearResponse, CreateRecordRequest, FavoriteResponse, FavoritesListResponse, HealthResponse,
    RecordResponse,
};
use crate::records::{MemoryStore, Record, RecordStore};

/// Application state shared across all handlers.
///
/// The manager is wrapped in Arc<RwLock<>> because it is not internally
/// synchronized; every public operation takes the write half. The duck API
/// client is cheap to clone and is never held across the lock.
#[derive(Clone)]
pub struct AppState {
    /// The favorites manager, store included
    pub manager: Arc<RwLock<FavoritesManager<MemoryStore>>>,
    /// Client for the random duck image API
    pub ducks: RandomDuckClient,
}

impl AppState {
    /// Creates a new AppState around an existing manager.
    pub fn new(manager: FavoritesManager<MemoryStore>, ducks: RandomDuckClient) -> Self {
        Self {
            manager: Arc::new(RwLock::new(manager)),
            ducks,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let manager = FavoritesManager::new(MemoryStore::new(), config.ttl_seconds);
        let ducks = RandomDuckClient::from_config(config)?;
        Ok(Self::new(manager, ducks))
    }
}

/// Handler for POST /records
///
/// Creates a record for the url in the body; with no url (or no body at
/// all) a random duck image url is fetched first. The upstream fetch
/// happens before the manager lock is taken.
pub async fn create_record_handler(
    State(state): State<AppState>,
    body: Option<Json<CreateRecordRequest>>,
) -> Result<(StatusCode, Json<RecordResponse>)> {
    let url = match body.and_then(|Json(req)| req.url) {
        Some(url) => url,
        None => state.ducks.random_duck_url().await?,
    };

    let mut manager = state.manager.write().await;
    let record = manager.store_mut().create(&url)?;

    Ok((StatusCode::CREATED, Json(RecordResponse::created(record))))
}

/// Handler for DELETE /records/:id
///
/// Deletes a record from the store. Favorites and cache are untouched;
/// a favorited id whose record is gone surfaces as NotFound on the next
/// cache refresh.
pub async fn delete_record_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<RecordResponse>> {
    let mut manager = state.manager.write().await;
    manager.store_mut().delete_by_id(id)?;

    Ok(Json(RecordResponse::deleted(id)))
}

/// Handler for POST /favorites/:id
///
/// Adds a record id to the favorites list.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<FavoriteResponse>> {
    let mut manager = state.manager.write().await;
    manager.add(id)?;

    Ok(Json(FavoriteResponse::added(id)))
}

/// Handler for DELETE /favorites/:id
///
/// Removes a record id from the favorites list.
pub async fn remove_favorite_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<FavoriteResponse>> {
    let mut manager = state.manager.write().await;
    manager.remove(id)?;

    Ok(Json(FavoriteResponse::removed(id)))
}

/// Handler for GET /favorites
///
/// Lists every favorited record in insertion order.
pub async fn list_favorites_handler(
    State(state): State<AppState>,
) -> Result<Json<FavoritesListResponse>> {
    let mut manager = state.manager.write().await;
    let favorites = manager.list()?;

    Ok(Json(FavoritesListResponse::new(favorites)))
}

/// Handler for DELETE /favorites
///
/// Clears the favorites list. Clearing an empty list succeeds.
pub async fn clear_favorites_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut manager = state.manager.write().await;
    manager.clear();

    Json(ClearResponse::new("Favorites cleared"))
}

/// Handler for GET /favorites/:id
///
/// Resolves a single record through the cache-or-store lookup.
pub async fn get_favorite_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Record>> {
    let mut manager = state.manager.write().await;
    let record = manager.get(id)?;

    Ok(Json(record))
}

/// Handler for DELETE /cache
///
/// Drops every cached record unconditionally.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let mut manager = state.manager.write().await;
    manager.clear_cache();

    Json(ClearResponse::new("Record cache cleared"))
}

/// Handler for GET /health
///
/// Returns health status of the service.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
