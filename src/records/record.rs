//! Duck Record Entity
//!
//! A persisted duck image record. The id is assigned by the store on
//! creation and never changes afterwards; an image url that has not been
//! through [`RecordStore::create`](super::RecordStore::create) is just a
//! string and has no id yet.

use serde::{Deserialize, Serialize};

// == Record ==
/// A persisted duck image record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Store-assigned identifier, unique and immutable
    pub id: u64,
    /// Source url of the duck image
    pub url: String,
}

impl Record {
    /// Creates a record with a store-assigned id and a trimmed url.
    pub(super) fn new(id: u64, url: &str) -> Self {
        Self {
            id,
            url: url.trim().to_string(),
        }
    }
}
