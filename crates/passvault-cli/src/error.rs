//! Error types for the CLI application.

use passvault_domain::ValidationError;
use passvault_gatekeeper::GateError;
use passvault_store::StoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Gate setup error
    #[error(transparent)]
    Gate(#[from] GateError),

    /// Store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A required field was left empty
    #[error("Missing Information: please fill in all required fields ({})", .0.field.as_str())]
    MissingInformation(ValidationError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wrong master password
    #[error("Access Denied: incorrect master password. Please try again.")]
    AccessDenied,

    /// Record command issued before unlocking
    #[error("Vault is locked. Use 'unlock <master password>' first.")]
    Locked,
}
