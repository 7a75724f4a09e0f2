//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur while setting up the gate
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GateError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
