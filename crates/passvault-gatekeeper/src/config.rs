//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

/// Master password used when none is configured
pub const DEFAULT_MASTER_PASSWORD: &str = "admin123";

/// Unlock latency of the demo, in milliseconds
pub const DEMO_DELAY_MS: u64 = 1000;

/// Configuration for the master-password gate
///
/// Fields missing from a config file take their values from
/// [`GateConfig::demo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default = "GateConfig::demo")]
pub struct GateConfig {
    /// The shared secret that unlocks the vault
    pub master_password: String,

    /// Artificial latency before an attempt is answered, in milliseconds
    pub simulated_delay_ms: u64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            master_password: DEFAULT_MASTER_PASSWORD.to_string(),
            simulated_delay_ms: 0,
        }
    }
}

impl GateConfig {
    /// Configuration with the one second unlock latency of the demo
    pub fn demo() -> Self {
        Self {
            simulated_delay_ms: DEMO_DELAY_MS,
            ..Self::default()
        }
    }
}
