//! Duckpond - A favorites manager for random duck images
//!
//! Tracks which duck image records a user has favorited and keeps a
//! TTL-bounded cache of resolved records in front of the authoritative
//! record store.

pub mod api;
pub mod config;
pub mod error;
pub mod favorites;
pub mod fetch;
pub mod models;
pub mod records;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use error::{DuckError, Result};
pub use favorites::FavoritesManager;
pub use records::{MemoryStore, Record, RecordStore};
pub use tasks::spawn_sweep_task;
