//! Passvault Domain Layer
//!
//! This crate contains the record model for Passvault, a single-session
//! credential vault. It has no infrastructure dependencies and defines the
//! value objects and the store trait that the other crates build upon.
//!
//! ## Key Concepts
//!
//! - **Record**: one stored credential entry (website, email account or card)
//! - **Kind**: the category discriminator of a record
//! - **Details**: the kind-specific optional fields, one variant per kind
//!
//! ## Architecture
//!
//! - Only `uuid` as an external dependency
//! - Pure data and validation only
//! - Storage implementations live in other crates (see `passvault-store`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod details;
pub mod kind;
pub mod record;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use details::{RecordDetails, CVV_MASK};
pub use kind::RecordKind;
pub use record::{CredentialRecord, NewRecord, RecordId};
pub use traits::{KindSummary, RecordStore};
pub use validation::{RequiredField, ValidationError};
