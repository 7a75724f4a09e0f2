//! Presence checks for new records

use std::fmt;

/// A field every record must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// Display label
    Title,
    /// Password or PIN
    Secret,
}

impl RequiredField {
    /// Field name as shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Secret => "secret",
        }
    }
}

/// A new record is missing a required field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that was empty
    pub field: RequiredField,
}

impl ValidationError {
    /// Create an error for the given missing field
    pub fn missing(field: RequiredField) -> Self {
        Self { field }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required field: {}", self.field.as_str())
    }
}

impl std::error::Error for ValidationError {}
