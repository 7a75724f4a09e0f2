//! Record module - the unit stored in the vault

use crate::validation::{RequiredField, ValidationError};
use crate::{RecordDetails, RecordKind};
use std::fmt;

/// Unique identifier for a record based on UUIDv7
///
/// UUIDv7 gives chronologically sortable, 128-bit identifiers that need no
/// coordination to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u128);

impl RecordId {
    /// Generate a new UUIDv7-based RecordId
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault_domain::RecordId;
    ///
    /// let id = RecordId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a RecordId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a RecordId from its hyphenated UUID form
    ///
    /// # Examples
    ///
    /// ```
    /// use passvault_domain::RecordId;
    ///
    /// let id = RecordId::new();
    /// let parsed = RecordId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s.trim())
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid record id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Timestamp component of the UUIDv7 (milliseconds since Unix epoch)
    pub fn timestamp(&self) -> u64 {
        // top 48 bits
        (self.0 >> 80) as u64
    }

    /// Last eight hex digits, enough to tell records apart on screen
    ///
    /// The leading digits of a UUIDv7 are its timestamp, so records created
    /// together share them; the tail is random.
    pub fn short(&self) -> String {
        let full = self.to_string();
        full[full.len() - 8..].to_string()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Fields a client supplies to create a record
///
/// Everything except the identifier and creation time, which the store
/// assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    /// Display label
    pub title: String,

    /// Password or PIN, kept in cleartext
    pub secret: String,

    /// Kind-specific fields
    pub details: RecordDetails,
}

impl NewRecord {
    /// Create a new record request
    pub fn new(title: impl Into<String>, secret: impl Into<String>, details: RecordDetails) -> Self {
        Self {
            title: title.into(),
            secret: secret.into(),
            details,
        }
    }

    /// The kind of record this request creates
    pub fn kind(&self) -> RecordKind {
        self.details.kind()
    }

    /// Check that the required fields are present
    ///
    /// # Errors
    /// Returns the first empty required field, title before secret
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present(&self.title, &self.secret)
    }
}

fn require_present(title: &str, secret: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::missing(RequiredField::Title));
    }
    if secret.is_empty() {
        return Err(ValidationError::missing(RequiredField::Secret));
    }
    Ok(())
}

/// A stored credential
///
/// Records are never modified once created; the vault only adds and
/// deletes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Unique identifier
    pub id: RecordId,

    /// Display label
    pub title: String,

    /// Password or PIN, kept in cleartext
    pub secret: String,

    /// Kind-specific fields
    pub details: RecordDetails,

    /// Creation time (milliseconds since Unix epoch)
    pub created_at: u64,
}

impl CredentialRecord {
    /// Build a record from a request plus the store-assigned identity
    pub fn from_new(id: RecordId, record: NewRecord, created_at: u64) -> Self {
        Self {
            id,
            title: record.title,
            secret: record.secret,
            details: record.details,
            created_at,
        }
    }

    /// Category of this record
    pub fn kind(&self) -> RecordKind {
        self.details.kind()
    }

    /// Same presence check as [`NewRecord::validate`], for records built
    /// outside the store
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_present(&self.title, &self.secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_ordering() {
        let id1 = RecordId::from_value(1000);
        let id2 = RecordId::from_value(2000);

        assert!(id1 < id2);
        assert!(id2 > id1);
    }

    #[test]
    fn test_record_id_chronological() {
        let id1 = RecordId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = RecordId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should be less than later UUIDv7");
        assert!(id1.timestamp() <= id2.timestamp());
    }

    #[test]
    fn test_record_id_display_and_parse() {
        let id = RecordId::new();
        let id_str = id.to_string();

        assert_eq!(id_str.len(), 36);
        assert_eq!(RecordId::from_string(&id_str).unwrap(), id);
        assert_eq!(RecordId::from_string(&format!("  {}  ", id_str)).unwrap(), id);
        assert_eq!(id.short(), id_str[28..]);
    }

    #[test]
    fn test_record_id_invalid_string() {
        assert!(RecordId::from_string("not-a-valid-uuid").is_err());
        assert!(RecordId::from_string("").is_err());
    }

    #[test]
    fn test_validate_requires_title_and_secret() {
        let ok = NewRecord::new("GitHub", "gh_secure123", RecordDetails::website());
        assert!(ok.validate().is_ok());

        let no_title = NewRecord::new("", "x", RecordDetails::email());
        assert_eq!(
            no_title.validate(),
            Err(ValidationError::missing(RequiredField::Title))
        );

        let no_secret = NewRecord::new("Gmail", "", RecordDetails::email());
        assert_eq!(
            no_secret.validate(),
            Err(ValidationError::missing(RequiredField::Secret))
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let record = NewRecord::new(" ", " ", RecordDetails::card());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_from_new_keeps_fields() {
        let request = NewRecord::new("Gmail", "x", RecordDetails::email());
        let id = RecordId::new();
        let record = CredentialRecord::from_new(id, request, 42);

        assert_eq!(record.id, id);
        assert_eq!(record.title, "Gmail");
        assert_eq!(record.secret, "x");
        assert_eq!(record.kind(), RecordKind::Email);
        assert_eq!(record.created_at, 42);
    }

    #[test]
    fn test_stored_record_validation() {
        let request = NewRecord::new("Gmail", "x", RecordDetails::email());
        let mut record = CredentialRecord::from_new(RecordId::new(), request, 0);
        assert!(record.validate().is_ok());

        record.secret.clear();
        assert_eq!(
            record.validate(),
            Err(ValidationError::missing(RequiredField::Secret))
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: id ordering matches u128 ordering
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = RecordId::from_value(a);
            let id_b = RecordId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        /// Property: string form parses back to the same id
        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = RecordId::from_value(value);

            match RecordId::from_string(&id.to_string()) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e)),
            }
        }

        /// Property: any non-empty title and secret pass validation
        #[test]
        fn test_non_empty_fields_validate(title in ".+", secret in ".+") {
            let record = NewRecord::new(title, secret, RecordDetails::website());
            prop_assert!(record.validate().is_ok());
        }
    }
}
