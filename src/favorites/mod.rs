//! Favorites Module
//!
//! The favorites cache manager: an ordered, duplicate-free list of favorited
//! record ids plus a TTL cache of resolved records. The cache is consulted
//! before the record store on every lookup; the store remains the source of
//! truth.

mod entry;
mod manager;


pub use entry::CacheEntry;
pub use manager::FavoritesManager;
