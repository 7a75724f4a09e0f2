//! List and stats command implementations.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use passvault_domain::RecordStore;

/// Execute the list command.
pub fn execute_list(args: ListArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let store = session.store()?;
    let records = match args.kind {
        Some(kind) => store.list_by_kind(kind),
        None => store.list(),
    };

    println!("{}", formatter.format_records(&records)?);
    Ok(())
}

/// Execute the stats command.
pub fn execute_stats(session: &Session, formatter: &Formatter) -> Result<()> {
    let summary = session.store()?.summary();
    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}
