//! In-Memory Record Store
//!
//! HashMap-backed implementation of the record store contract. Stands in
//! for a real database; ids start at 1 and are never reused.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::{DuckError, Result};
use crate::records::{Record, RecordStore};

// == Memory Store ==
/// In-memory record store with auto-incrementing ids.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Id-keyed record storage
    records: HashMap<u64, Record>,
    /// Next id to assign on create
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: 1,
        }
    }

    /// Returns the current number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn create(&mut self, url: &str) -> Result<Record> {
        let url = url.trim();
        if url.is_empty() {
            warn!("Rejected record creation with empty url");
            return Err(DuckError::Validation(
                "url must be a non-empty string".to_string(),
            ));
        }

        if self.records.values().any(|r| r.url == url) {
            warn!("Duck already exists: {}", url);
            return Err(DuckError::Duplicate(format!("duck at '{}'", url)));
        }

        let id = self.next_id;
        self.next_id += 1;

        let record = Record::new(id, url);
        self.records.insert(id, record.clone());
        info!("Duck created: id={} url={}", id, url);
        Ok(record)
    }

    fn get_by_id(&self, id: u64) -> Result<Record> {
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| DuckError::NotFound(format!("duck with id {}", id)))
    }

    fn delete_by_id(&mut self, id: u64) -> Result<()> {
        if self.records.remove(&id).is_some() {
            info!("Duck deleted: id={}", id);
            Ok(())
        } else {
            Err(DuckError::NotFound(format!("duck with id {}", id)))
        }
    }
}
