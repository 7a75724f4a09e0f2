//! Passvault Storage Layer
//!
//! Implements the RecordStore trait with an owned, in-memory collection.
//!
//! # Architecture
//!
//! - Records live in a `Vec` in insertion order
//! - Per-kind counts are derived on every read, never cached
//! - Nothing is persisted; dropping the store discards the session
//!
//! # Examples
//!
//! ```
//! use passvault_domain::{NewRecord, RecordDetails, RecordKind, RecordStore};
//! use passvault_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! store.add(NewRecord::new("Gmail", "x", RecordDetails::email())).unwrap();
//! assert_eq!(store.count_by_kind(RecordKind::Email), 1);
//! ```

#![warn(missing_docs)]

mod seed;

pub use seed::demo_records;

use passvault_domain::traits::{KindSummary, RecordStore};
use passvault_domain::{CredentialRecord, NewRecord, RecordId, RecordKind, ValidationError};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was missing on add
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No record with the given id
    #[error("Record not found: {0}")]
    NotFound(RecordId),
}

/// In-memory implementation of RecordStore
///
/// Holds the records of one session. Single-threaded by construction:
/// mutations take `&mut self`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<CredentialRecord>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo records
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault_store::MemoryStore;
    ///
    /// let store = MemoryStore::seeded();
    /// assert_eq!(store.len(), 3);
    /// ```
    pub fn seeded() -> Self {
        Self::with_records(demo_records())
    }

    /// Create a store from existing records, keeping their order
    ///
    /// A record with an empty title or secret, or whose id is already
    /// present, is skipped.
    pub fn with_records(records: impl IntoIterator<Item = CredentialRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            if let Err(e) = record.validate() {
                warn!(
                    id = %record.id,
                    field = e.field.as_str(),
                    "Skipping seed record without required field"
                );
                continue;
            }
            if store.position(record.id).is_some() {
                warn!(id = %record.id, "Skipping seed record with duplicate id");
                continue;
            }
            store.records.push(record);
        }
        store
    }

    /// Borrow all records in insertion order
    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }

    /// Borrowing iterator over the records of one kind
    pub fn iter_kind(&self, kind: RecordKind) -> impl Iterator<Item = &CredentialRecord> {
        self.records.iter().filter(move |r| r.kind() == kind)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Fresh id not used by any stored record
    fn next_id(&self) -> RecordId {
        let mut id = RecordId::new();
        while self.position(id).is_some() {
            id = RecordId::new();
        }
        id
    }
}

impl RecordStore for MemoryStore {
    type Error = StoreError;

    fn add(&mut self, record: NewRecord) -> Result<CredentialRecord, Self::Error> {
        if let Err(e) = record.validate() {
            debug!(kind = %record.kind(), field = e.field.as_str(), "Rejected record");
            return Err(e.into());
        }

        let id = self.next_id();
        let record = NewRecord {
            details: record.details.normalized(),
            ..record
        };
        let stored = CredentialRecord::from_new(id, record, id.timestamp());

        debug!(id = %stored.id, kind = %stored.kind(), "Added record");
        self.records.push(stored.clone());

        Ok(stored)
    }

    fn list(&self) -> Vec<CredentialRecord> {
        self.records.clone()
    }

    fn list_by_kind(&self, kind: RecordKind) -> Vec<CredentialRecord> {
        self.iter_kind(kind).cloned().collect()
    }

    fn get(&self, id: RecordId) -> Option<CredentialRecord> {
        self.position(id).map(|idx| self.records[idx].clone())
    }

    fn delete(&mut self, id: RecordId) -> Result<CredentialRecord, Self::Error> {
        let idx = self.position(id).ok_or(StoreError::NotFound(id))?;
        // Vec::remove shifts the tail, keeping insertion order
        let removed = self.records.remove(idx);

        debug!(id = %removed.id, kind = %removed.kind(), "Deleted record");
        Ok(removed)
    }

    fn count_by_kind(&self, kind: RecordKind) -> usize {
        self.iter_kind(kind).count()
    }

    fn summary(&self) -> KindSummary {
        KindSummary::tally(&self.records)
    }
}
