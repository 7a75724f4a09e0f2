//! Trait definitions for record storage
//!
//! The store is the only mutation surface for records. Implementations
//! live in other crates.

use crate::{CredentialRecord, NewRecord, RecordId, RecordKind};

/// Trait for storing and retrieving credential records
///
/// Implemented by the infrastructure layer (passvault-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Validate and append a new record, returning it with its assigned id
    fn add(&mut self, record: NewRecord) -> Result<CredentialRecord, Self::Error>;

    /// All records in insertion order
    fn list(&self) -> Vec<CredentialRecord>;

    /// Records of one kind, in insertion order
    fn list_by_kind(&self, kind: RecordKind) -> Vec<CredentialRecord>;

    /// Get a record by id
    fn get(&self, id: RecordId) -> Option<CredentialRecord>;

    /// Remove a record, returning it
    fn delete(&mut self, id: RecordId) -> Result<CredentialRecord, Self::Error>;

    /// Number of records of one kind
    fn count_by_kind(&self, kind: RecordKind) -> usize {
        self.list_by_kind(kind).len()
    }

    /// Per-kind counts for the dashboard
    fn summary(&self) -> KindSummary {
        KindSummary {
            websites: self.count_by_kind(RecordKind::Website),
            emails: self.count_by_kind(RecordKind::Email),
            cards: self.count_by_kind(RecordKind::Card),
        }
    }
}

/// Record counts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindSummary {
    /// Website logins
    pub websites: usize,

    /// Email accounts
    pub emails: usize,

    /// Cards
    pub cards: usize,
}

impl KindSummary {
    /// Count for a single kind
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Website => self.websites,
            RecordKind::Email => self.emails,
            RecordKind::Card => self.cards,
        }
    }

    /// Sum over all kinds
    pub fn total(&self) -> usize {
        self.websites + self.emails + self.cards
    }

    /// Tally a sequence of records
    pub fn tally<'a>(records: impl IntoIterator<Item = &'a CredentialRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |mut summary, record| {
                match record.kind() {
                    RecordKind::Website => summary.websites += 1,
                    RecordKind::Email => summary.emails += 1,
                    RecordKind::Card => summary.cards += 1,
                }
                summary
            })
    }
}
