//! Vault session: the gate plus the records it guards.

use crate::error::{CliError, Result};
use passvault_domain::RecordId;
use passvault_gatekeeper::Gate;
use passvault_store::MemoryStore;

/// One interactive session.
///
/// Owns the store for the lifetime of the process; locking only hides the
/// records, it never discards them.
#[derive(Debug)]
pub struct Session {
    gate: Gate,
    store: MemoryStore,
    unlocked: bool,
}

impl Session {
    /// Create a locked session.
    pub fn new(gate: Gate, store: MemoryStore) -> Self {
        Self {
            gate,
            store,
            unlocked: false,
        }
    }

    /// Try the master password, waiting out the configured delay first.
    ///
    /// A failed attempt leaves the current state as it was.
    pub async fn unlock(&mut self, candidate: &str) -> bool {
        let delay = self.gate.unlock_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let granted = self.gate.authenticate(candidate);
        if granted {
            self.unlocked = true;
        }
        granted
    }

    /// Lock the session.
    pub fn lock(&mut self) {
        self.unlocked = false;
    }

    /// Whether records are currently accessible.
    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// The store, if unlocked.
    pub fn store(&self) -> Result<&MemoryStore> {
        if self.unlocked {
            Ok(&self.store)
        } else {
            Err(CliError::Locked)
        }
    }

    /// The store for mutation, if unlocked.
    pub fn store_mut(&mut self) -> Result<&mut MemoryStore> {
        if self.unlocked {
            Ok(&mut self.store)
        } else {
            Err(CliError::Locked)
        }
    }

    /// Resolve a full id, or the trailing digits of one as shown in record
    /// tables, to a stored record id.
    pub fn resolve_id(&self, input: &str) -> Result<RecordId> {
        let store = self.store()?;
        let input = input.trim();

        if let Ok(id) = RecordId::from_string(input) {
            return Ok(id);
        }

        let suffix = input.to_lowercase();
        if suffix.is_empty() {
            return Err(CliError::InvalidInput("No record id provided".to_string()));
        }

        let matches: Vec<RecordId> = store
            .records()
            .iter()
            .map(|r| r.id)
            .filter(|id| id.to_string().ends_with(&suffix))
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(CliError::InvalidInput(format!("No record matches '{}'", input))),
            _ => Err(CliError::InvalidInput(format!(
                "'{}' matches {} records; use more characters",
                input,
                matches.len()
            ))),
        }
    }
}
