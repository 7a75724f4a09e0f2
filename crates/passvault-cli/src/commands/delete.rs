//! Delete command implementation.

use crate::cli::DeleteArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;
use passvault_domain::RecordStore;
use std::io::{self, BufRead, Write};

/// Execute the delete command.
pub fn execute_delete(args: DeleteArgs, session: &mut Session, formatter: &Formatter) -> Result<()> {
    let id = session.resolve_id(&args.id)?;

    // Confirm deletion unless --yes is specified
    if !args.yes {
        if let Some(record) = session.store()?.get(id) {
            println!("About to delete '{}' ({})", record.title, record.id.short());
        }
        print!("Are you sure you want to delete this password? [y/N] ");
        io::stdout().flush()?;

        if !confirm(&mut io::stdin().lock())? {
            println!("{}", formatter.info("Operation cancelled"));
            return Ok(());
        }
    }

    let removed = session.store_mut()?.delete(id)?;
    println!("{}", formatter.record_deleted(&removed));

    Ok(())
}

/// Read one line and accept only `y` or `yes`.
fn confirm<R: BufRead>(input: &mut R) -> Result<bool> {
    let mut response = String::new();
    input.read_line(&mut response)?;

    let response = response.trim();
    Ok(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_confirm() {
        assert!(confirm(&mut Cursor::new("y\n")).unwrap());
        assert!(confirm(&mut Cursor::new("  YES \n")).unwrap());
        assert!(!confirm(&mut Cursor::new("n\n")).unwrap());
        assert!(!confirm(&mut Cursor::new("\n")).unwrap());
        assert!(!confirm(&mut Cursor::new("")).unwrap());
    }
}
