//! Favorites Manager Module
//!
//! Owns the ordered favorites list and the TTL cache, and consults the
//! record store for anything not freshly cached.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::{DuckError, Result};
use crate::favorites::CacheEntry;
use crate::records::{Record, RecordStore};

// == Favorites Manager ==
/// Manages the favorited duck records of a user.
///
/// State is owned by the instance and mutated only through its methods; the
/// favorites list and the cache are independent mappings over the same id
/// space. Not internally synchronized: callers that share an instance must
/// wrap it in their own lock (the HTTP layer uses `tokio::sync::RwLock`).
#[derive(Debug)]
pub struct FavoritesManager<S> {
    /// Authoritative record store
    store: S,
    /// Favorited record ids in insertion order, no duplicates
    favorites: Vec<u64>,
    /// Id-keyed cache of resolved records
    cache: HashMap<u64, CacheEntry>,
    /// How long a cached record stays fresh
    ttl: Duration,
}

impl<S: RecordStore> FavoritesManager<S> {
    // == Constructor ==
    /// Creates a manager with an empty favorites list and cache.
    ///
    /// # Arguments
    /// * `store` - The authoritative record store to resolve against
    /// * `ttl_seconds` - Cache TTL in seconds (60 by default via `Config`)
    pub fn new(store: S, ttl_seconds: u64) -> Self {
        Self {
            store,
            favorites: Vec::new(),
            cache: HashMap::new(),
            ttl: Duration::from_secs(ttl_seconds),
        }
    }

    // == Add ==
    /// Adds a record id to the favorites list.
    ///
    /// The id must name an existing record; the existence check goes through
    /// the cache-or-store lookup and so also refreshes the cache entry as a
    /// byproduct. Fails with `NotFound` if the store has no such record and
    /// with `Duplicate` if the id is already favorited.
    pub fn add(&mut self, id: u64) -> Result<()> {
        let record = self.resolve(id)?;

        if self.favorites.contains(&id) {
            warn!("Duck with id {} already exists in favorites", id);
            return Err(DuckError::Duplicate(format!(
                "duck with id {} in favorites",
                id
            )));
        }

        info!("Adding duck '{}' (id {}) to favorites", record.url, id);
        self.favorites.push(id);
        Ok(())
    }

    // == Remove ==
    /// Removes a record id from the favorites list.
    ///
    /// Fails with `EmptyFavorites` if the list is empty, `Validation` if the
    /// id is not positive, and `NotFound` if the id is not favorited. The
    /// cache is left untouched and relative order of the remaining ids is
    /// preserved.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        if self.favorites.is_empty() {
            warn!("Attempted to remove duck {} from empty favorites", id);
            return Err(DuckError::EmptyFavorites);
        }
        ensure_positive_id(id)?;

        match self.favorites.iter().position(|&fav| fav == id) {
            Some(index) => {
                self.favorites.remove(index);
                info!("Removed duck with id {} from favorites", id);
                Ok(())
            }
            None => Err(DuckError::NotFound(format!(
                "duck with id {} in favorites",
                id
            ))),
        }
    }

    // == Clear ==
    /// Empties the favorites list.
    ///
    /// Clearing an already-empty list is not an error; it only emits a
    /// warning event. Cache entries survive a clear and may serve a
    /// later re-add.
    pub fn clear(&mut self) {
        if self.favorites.is_empty() {
            warn!("Attempted to clear an empty favorites list");
            return;
        }
        info!("Clearing {} ducks from favorites", self.favorites.len());
        self.favorites.clear();
    }

    // == Get ==
    /// Resolves a single record through the cache-or-store lookup.
    ///
    /// Fails with `EmptyFavorites` if the list is empty and `Validation` if
    /// the id is not positive. Membership of the specific id in the
    /// favorites list is deliberately not checked, so this can return
    /// records that were never favorited; callers depend on that.
    pub fn get(&mut self, id: u64) -> Result<Record> {
        if self.favorites.is_empty() {
            warn!("Attempted to retrieve duck {} from empty favorites", id);
            return Err(DuckError::EmptyFavorites);
        }
        ensure_positive_id(id)?;

        self.resolve(id)
    }

    // == List ==
    /// Returns every favorited record in favorites order.
    ///
    /// Fails with `EmptyFavorites` if the list is empty. Each id goes
    /// through the cache-or-store lookup; the first id the store cannot
    /// resolve aborts the whole call, no partial list is returned.
    pub fn list(&mut self) -> Result<Vec<Record>> {
        if self.favorites.is_empty() {
            warn!("Attempted to retrieve ducks from an empty favorites list");
            return Err(DuckError::EmptyFavorites);
        }

        info!("Retrieving {} ducks from favorites", self.favorites.len());
        let ids: Vec<u64> = self.favorites.clone();
        ids.into_iter().map(|id| self.resolve(id)).collect()
    }

    // == Clear Cache ==
    /// Drops every cached record unconditionally. Favorites are untouched.
    pub fn clear_cache(&mut self) {
        info!("Clearing {} cached ducks", self.cache.len());
        self.cache.clear();
    }

    // == Prune Expired ==
    /// Removes expired cache entries and returns how many were dropped.
    ///
    /// Lazy expiry on access is what guarantees freshness; this only bounds
    /// the memory held by long-dead entries and is driven by the optional
    /// background sweep task.
    pub fn prune_expired(&mut self) -> usize {
        let now = Instant::now();
        let before = self.cache.len();
        self.cache.retain(|_, entry| entry.is_fresh_at(now));
        before - self.cache.len()
    }

    // == Accessors ==
    /// Number of favorited ids.
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// Returns true if no ids are favorited.
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Number of cached records, fresh or stale.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Mutable access to the underlying record store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // == Resolve With Cache ==
    /// Cache-or-store lookup for a single id.
    ///
    /// A fresh cache entry is returned without touching the store. On a miss
    /// or a stale entry the store is queried; success overwrites the entry
    /// with a new expiry of now + TTL, while failure leaves any stale entry
    /// exactly as it was.
    fn resolve(&mut self, id: u64) -> Result<Record> {
        let now = Instant::now();

        if let Some(entry) = self.cache.get(&id) {
            if entry.is_fresh_at(now) {
                debug!("Using cached duck {} (TTL valid)", id);
                return Ok(entry.record.clone());
            }
        }

        let record = self.store.get_by_id(id)?;
        debug!("Duck {} loaded from store", id);
        self.cache
            .insert(id, CacheEntry::new(record.clone(), now, self.ttl));
        Ok(record)
    }
}

/// Rejects 0, the one unsigned value that is not a valid record id.
fn ensure_positive_id(id: u64) -> Result<()> {
    if id == 0 {
        return Err(DuckError::Validation(
            "duck id must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::MemoryStore;
    use std::cell::Cell;

    /// Record store wrapper that counts lookups, for cache-hit assertions.
    struct CountingStore {
        inner: MemoryStore,
        gets: Cell<u64>,
    }

    impl CountingStore {
        fn new() -> Self {
            Self {
                inner: MemoryStore::new(),
                gets: Cell::new(0),
            }
        }
    }

    impl RecordStore for CountingStore {
        fn create(&mut self, url: &str) -> Result<Record> {
            self.inner.create(url)
        }

        fn get_by_id(&self, id: u64) -> Result<Record> {
            self.gets.set(self.gets.get() + 1);
            self.inner.get_by_id(id)
        }

        fn delete_by_id(&mut self, id: u64) -> Result<()> {
            self.inner.delete_by_id(id)
        }
    }

    fn manager_with_records(count: u64, ttl_seconds: u64) -> FavoritesManager<CountingStore> {
        let mut store = CountingStore::new();
        for n in 1..=count {
            store
                .create(&format!("https://example.com/duck{}.jpg", n))
                .unwrap();
        }
        FavoritesManager::new(store, ttl_seconds)
    }

    // -- Add --

    #[test]
    fn test_add_appends_in_order() {
        let mut manager = manager_with_records(3, 60);

        manager.add(1).unwrap();
        manager.add(3).unwrap();
        manager.add(2).unwrap();

        assert_eq!(manager.favorites, vec![1, 3, 2]);
    }

    #[test]
    fn test_add_duplicate() {
        let mut manager = manager_with_records(1, 60);

        manager.add(1).unwrap();
        let result = manager.add(1);

        assert!(matches!(result, Err(DuckError::Duplicate(_))));
        assert_eq!(manager.favorites, vec![1]);
    }

    #[test]
    fn test_add_unknown_record() {
        let mut manager = manager_with_records(1, 60);

        let result = manager.add(99);

        assert!(matches!(result, Err(DuckError::NotFound(_))));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_add_populates_cache() {
        let mut manager = manager_with_records(1, 60);

        manager.add(1).unwrap();

        assert_eq!(manager.cached_len(), 1);
        // The existence check cached the record, so get hits the cache
        manager.get(1).unwrap();
        assert_eq!(manager.store.gets.get(), 1);
    }

    // -- Remove --

    #[test]
    fn test_remove_preserves_order() {
        let mut manager = manager_with_records(3, 60);
        manager.add(1).unwrap();
        manager.add(2).unwrap();
        manager.add(3).unwrap();

        manager.remove(2).unwrap();

        assert_eq!(manager.favorites, vec![1, 3]);
    }

    #[test]
    fn test_remove_from_empty() {
        let mut manager = manager_with_records(1, 60);

        let result = manager.remove(1);
        assert!(matches!(result, Err(DuckError::EmptyFavorites)));
    }

    #[test]
    fn test_remove_zero_id() {
        let mut manager = manager_with_records(1, 60);
        manager.add(1).unwrap();

        let result = manager.remove(0);
        assert!(matches!(result, Err(DuckError::Validation(_))));
    }

    #[test]
    fn test_remove_not_favorited() {
        let mut manager = manager_with_records(2, 60);
        manager.add(1).unwrap();
        manager.add(2).unwrap();

        manager.remove(1).unwrap();
        assert_eq!(manager.favorites, vec![2]);

        // Removing the same id again now fails
        let result = manager.remove(1);
        assert!(matches!(result, Err(DuckError::NotFound(_))));
    }

    #[test]
    fn test_remove_leaves_cache_alone() {
        let mut manager = manager_with_records(1, 60);
        manager.add(1).unwrap();

        manager.remove(1).unwrap();

        assert_eq!(manager.cached_len(), 1);
    }

    // -- Clear --

    #[test]
    fn test_clear_empties_favorites() {
        let mut manager = manager_with_records(2, 60);
        manager.add(1).unwrap();
        manager.add(2).unwrap();

        manager.clear();

        assert_eq!(manager.len(), 0);
        // Cache entries survive a clear
        assert_eq!(manager.cached_len(), 2);
    }

    #[test]
    fn test_clear_on_empty_is_not_an_error() {
        let mut manager = manager_with_records(1, 60);

        manager.clear();
        manager.clear();

        assert!(manager.is_empty());
    }

    // -- Get --

    #[test]
    fn test_get_on_empty_favorites() {
        let mut manager = manager_with_records(1, 60);

        // Record 1 exists in the store, yet the empty list wins
        let result = manager.get(1);
        assert!(matches!(result, Err(DuckError::EmptyFavorites)));
        assert_eq!(manager.store.gets.get(), 0);
    }

    #[test]
    fn test_get_zero_id() {
        let mut manager = manager_with_records(1, 60);
        manager.add(1).unwrap();

        let result = manager.get(0);
        assert!(matches!(result, Err(DuckError::Validation(_))));
    }

    #[test]
    fn test_get_returns_record() {
        let mut manager = manager_with_records(2, 60);
        manager.add(1).unwrap();

        let record = manager.get(1).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.url, "https://example.com/duck1.jpg");
    }

    #[test]
    fn test_get_does_not_check_membership() {
        // Compatibility behavior: a non-empty list lets any existing record
        // through, favorited or not.
        let mut manager = manager_with_records(2, 60);
        manager.add(1).unwrap();

        let record = manager.get(2).unwrap();
        assert_eq!(record.id, 2);
    }

    // -- List --

    #[test]
    fn test_list_on_empty_favorites() {
        let mut manager = manager_with_records(1, 60);

        let result = manager.list();
        assert!(matches!(result, Err(DuckError::EmptyFavorites)));
    }

    #[test]
    fn test_list_returns_favorites_order() {
        let mut manager = manager_with_records(3, 60);
        manager.add(2).unwrap();
        manager.add(1).unwrap();
        manager.add(3).unwrap();

        let records = manager.list().unwrap();
        let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_list_aborts_on_missing_record() {
        let mut manager = manager_with_records(2, 0);
        manager.add(1).unwrap();
        manager.add(2).unwrap();

        // Record 2 disappears from the store; TTL 0 forces a refresh
        manager.store_mut().delete_by_id(2).unwrap();

        let result = manager.list();
        assert!(matches!(result, Err(DuckError::NotFound(_))));
    }

    // -- Cache behavior --

    #[test]
    fn test_second_get_within_ttl_skips_store() {
        let mut manager = manager_with_records(1, 60);
        manager.add(1).unwrap();
        assert_eq!(manager.store.gets.get(), 1);

        manager.get(1).unwrap();
        manager.get(1).unwrap();

        assert_eq!(manager.store.gets.get(), 1);
    }

    #[test]
    fn test_expired_entry_is_refreshed_from_store() {
        // TTL 0 makes every entry stale the instant it is written
        let mut manager = manager_with_records(1, 0);
        manager.add(1).unwrap();
        assert_eq!(manager.store.gets.get(), 1);

        manager.get(1).unwrap();
        assert_eq!(manager.store.gets.get(), 2);

        manager.get(1).unwrap();
        assert_eq!(manager.store.gets.get(), 3);
    }

    #[test]
    fn test_clear_cache_forces_store_lookup() {
        let mut manager = manager_with_records(1, 60);
        manager.add(1).unwrap();

        manager.clear_cache();
        assert_eq!(manager.cached_len(), 0);

        manager.get(1).unwrap();
        assert_eq!(manager.store.gets.get(), 2);
    }

    #[test]
    fn test_clear_cache_is_idempotent() {
        let mut manager = manager_with_records(1, 60);

        manager.clear_cache();
        manager.clear_cache();

        assert_eq!(manager.cached_len(), 0);
    }

    #[test]
    fn test_failed_refresh_keeps_stale_entry() {
        let mut manager = manager_with_records(1, 0);
        manager.add(1).unwrap();
        let stale_url = manager.cache[&1].record.url.clone();

        // The record vanishes from the store, then the stale entry needs a
        // refresh that can only fail
        manager.store_mut().delete_by_id(1).unwrap();
        let result = manager.get(1);

        assert!(matches!(result, Err(DuckError::NotFound(_))));
        assert_eq!(manager.cached_len(), 1);
        assert_eq!(manager.cache[&1].record.url, stale_url);
    }

    #[test]
    fn test_prune_expired_drops_only_stale_entries() {
        let mut stale = manager_with_records(1, 0);
        stale.add(1).unwrap();
        assert_eq!(stale.prune_expired(), 1);
        assert_eq!(stale.cached_len(), 0);

        let mut fresh = manager_with_records(1, 60);
        fresh.add(1).unwrap();
        assert_eq!(fresh.prune_expired(), 0);
        assert_eq!(fresh.cached_len(), 1);
    }
}
