//! Master-password check

use crate::{GateConfig, GateError};
use std::time::Duration;
use tracing::{debug, info};

/// The gate in front of the record view
///
/// Compares a candidate against one configured secret. The gate holds no
/// session state; callers track whether they are unlocked.
#[derive(Debug, Clone)]
pub struct Gate {
    config: GateConfig,
}

impl Gate {
    /// Create a gate from its configuration
    ///
    /// # Errors
    /// Returns an error if the master password is empty, since an empty
    /// candidate would then unlock the vault
    pub fn from_config(config: GateConfig) -> Result<Self, GateError> {
        if config.master_password.is_empty() {
            return Err(GateError::Config(
                "master_password must not be empty".to_string(),
            ));
        }
        Ok(Self { config })
    }

    /// Check a candidate against the master password
    ///
    /// Returns `true` iff the candidate matches exactly.
    pub fn authenticate(&self, candidate: &str) -> bool {
        let granted = candidate == self.config.master_password;
        if granted {
            debug!("Access granted");
        } else {
            info!(candidate_len = candidate.len(), "Access denied");
        }
        granted
    }

    /// How long callers should wait before reporting an attempt
    pub fn unlock_delay(&self) -> Duration {
        Duration::from_millis(self.config.simulated_delay_ms)
    }
}
