//! Records Module
//!
//! The duck record entity and the authoritative store it lives in.
//!
//! The store is the source of truth for records; the favorites cache
//! (see [`crate::favorites`]) only holds short-lived copies.

mod memory;
mod record;

pub use memory::MemoryStore;
pub use record::Record;

use crate::error::Result;

// == Record Store Contract ==
/// Authoritative store for duck records.
///
/// Create/fetch/delete by identifier or exact locator match. The favorites
/// manager consults this contract for any identifier that is not freshly
/// cached; tests substitute their own implementations at this seam.
pub trait RecordStore {
    /// Creates and persists a new record for the given image url.
    ///
    /// Fails with `Validation` if the url is empty and with `Duplicate`
    /// if a record with that exact url already exists.
    fn create(&mut self, url: &str) -> Result<Record>;

    /// Retrieves a record by id, failing with `NotFound` if absent.
    fn get_by_id(&self, id: u64) -> Result<Record>;

    /// Deletes a record by id, failing with `NotFound` if absent.
    fn delete_by_id(&mut self, id: u64) -> Result<()>;
}
