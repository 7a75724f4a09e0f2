//! Add command implementation.

use crate::cli::AddArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use passvault_domain::{NewRecord, RecordDetails, RecordStore};
use passvault_store::StoreError;

/// Execute the add command.
pub fn execute_add(args: AddArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let request = build_record(args)?;

    let record = session.store_mut()?.add(request).map_err(|e| match e {
        StoreError::Validation(v) => CliError::MissingInformation(v),
        other => CliError::Store(other),
    })?;

    println!("{}", formatter.record_added(&record));
    Ok(())
}

/// Turn command arguments into a record request.
fn build_record(args: AddArgs) -> Result<NewRecord> {
    let mut details = RecordDetails::empty(args.kind);

    for (name, value) in args.fields {
        if !details.set_field(&name.to_lowercase(), value) {
            return Err(CliError::InvalidInput(format!(
                "Field '{}' does not apply to {} records",
                name, args.kind
            )));
        }
    }

    Ok(NewRecord::new(args.title, args.secret, details))
}
