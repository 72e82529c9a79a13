//! In-memory record store.

use uuid::Uuid;

use super::RecordStore;
use crate::error::{KeepsakeError, Result};
use crate::model::Record;

/// Order-preserving in-memory store. The only backend: dashboards own a
/// fresh copy of their sample data per session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<R> {
    records: Vec<R>,
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a store seeded with `records`, keeping their order.
    pub fn seeded(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id() == *id)
    }
}

impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn list(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: &Uuid) -> Result<R> {
        self.position(id)
            .map(|i| self.records[i].clone())
            .ok_or(KeepsakeError::RecordNotFound(*id))
    }

    fn save(&mut self, record: &R) -> Result<()> {
        match self.position(&record.id()) {
            Some(i) => self.records[i] = record.clone(),
            None => self.records.push(record.clone()),
        }
        Ok(())
    }

    fn delete(&mut self, id: &Uuid) -> Result<()> {
        match self.position(id) {
            Some(i) => {
                self.records.remove(i);
                Ok(())
            }
            None => Err(KeepsakeError::RecordNotFound(*id)),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::report::{Report, ReportReason, ReportStatus};

    pub struct ReportStoreFixture {
        pub store: MemoryStore<Report>,
    }

    impl Default for ReportStoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ReportStoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        pub fn with_pending(mut self, author: &str, excerpt: &str) -> Self {
            let report = Report::new(author, excerpt, ReportReason::Spam);
            self.store.save(&report).unwrap();
            self
        }

        pub fn with_status(mut self, author: &str, status: ReportStatus) -> Self {
            let mut report = Report::new(author, "fixture excerpt", ReportReason::Other);
            report.status = status;
            self.store.save(&report).unwrap();
            self
        }
    }
}
