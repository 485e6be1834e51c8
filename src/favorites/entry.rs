//! Cache Entry Module
//!
//! Defines the structure for cached record copies with TTL support.

use std::time::{Duration, Instant};

use crate::records::Record;

// == Cache Entry ==
/// A cached copy of a record together with its expiry instant.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached record copy
    pub record: Record,
    /// Instant at which the copy stops being served from cache
    pub expires_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a cache entry that expires `ttl` after `now`.
    ///
    /// Monotonic time is used so TTL comparisons are immune to wall-clock
    /// adjustments.
    pub fn new(record: Record, now: Instant, ttl: Duration) -> Self {
        Self {
            record,
            expires_at: now + ttl,
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served at `now`.
    ///
    /// Boundary condition: the comparison is strict. An entry whose expiry
    /// instant equals `now` exactly is already stale and must be refreshed
    /// from the store.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}
