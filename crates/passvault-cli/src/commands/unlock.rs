//! Unlock and lock command implementations.

use crate::cli::UnlockArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;

/// Execute the unlock command.
pub async fn execute_unlock(
    args: UnlockArgs,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    if session.unlock(&args.password).await {
        println!("{}", formatter.access_granted());
        Ok(())
    } else {
        Err(CliError::AccessDenied)
    }
}

/// Execute the lock command.
pub fn execute_lock(session: &mut Session, formatter: &Formatter) -> Result<()> {
    if !session.is_unlocked() {
        println!("{}", formatter.warning("Vault is already locked"));
        return Ok(());
    }

    session.lock();
    println!("{}", formatter.info("Vault locked"));
    Ok(())
}
