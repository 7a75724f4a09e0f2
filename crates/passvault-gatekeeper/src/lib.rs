//! Passvault Gatekeeper
//!
//! The master-password check that stands in front of the record view.
//!
//! The Gatekeeper provides:
//! - A single shared-secret comparison
//! - Configuration of the secret and the simulated unlock latency
//!
//! This is a placeholder for real credential verification: the secret is
//! compared in cleartext, with no hashing, lockout or rate limiting.
//!
//! # Examples
//!
//! ```
//! use passvault_gatekeeper::{Gate, GateConfig};
//!
//! let gate = Gate::from_config(GateConfig::default()).unwrap();
//! assert!(gate.authenticate("admin123"));
//! assert!(!gate.authenticate("wrong"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod gate;

pub use config::{GateConfig, DEFAULT_MASTER_PASSWORD, DEMO_DELAY_MS};
pub use error::GateError;
pub use gate::Gate;
