//! # Storage Layer
//!
//! The [`RecordStore`] trait abstracts where a dashboard's records live.
//! The system deliberately has no persistence: every dashboard seeds an
//! in-memory store from fixtures at startup and discards it on teardown.
//!
//! `list` preserves insertion order. Derived views must return records in
//! store order when no explicit sort is applied, so the store keeps a `Vec`
//! rather than a map.

use uuid::Uuid;

use crate::error::Result;
use crate::model::Record;

pub mod memory;

pub use memory::MemoryStore;

/// Abstract interface for record storage.
pub trait RecordStore<R: Record> {
    /// All records, in insertion order.
    fn list(&self) -> Result<Vec<R>>;

    /// Get a record by id.
    fn get(&self, id: &Uuid) -> Result<R>;

    /// Save a record (insert or replace by id). Replacing keeps the
    /// record's position; inserting appends.
    fn save(&mut self, record: &R) -> Result<()>;

    /// Remove a record permanently.
    fn delete(&mut self, id: &Uuid) -> Result<()>;

    /// Read-modify-write a single record in place.
    fn mutate<F>(&mut self, id: &Uuid, f: F) -> Result<R>
    where
        F: FnOnce(&mut R),
    {
        let mut record = self.get(id)?;
        f(&mut record);
        self.save(&record)?;
        Ok(record)
    }
}
