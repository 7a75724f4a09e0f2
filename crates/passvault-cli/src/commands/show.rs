//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use passvault_domain::RecordStore;
use passvault_store::StoreError;

/// Execute the show command: print one record with its secret revealed.
pub fn execute_show(args: ShowArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let id = session.resolve_id(&args.id)?;
    let record = session
        .store()?
        .get(id)
        .ok_or(CliError::Store(StoreError::NotFound(id)))?;

    println!("{}", formatter.format_record(&record, true)?);
    Ok(())
}
