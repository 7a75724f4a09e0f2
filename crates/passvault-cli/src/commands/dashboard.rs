//! Dashboard command implementation.

use crate::cli::{DashboardArgs, ListArgs, UnlockArgs};
use crate::commands::{execute_list, execute_stats, execute_unlock};
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the dashboard command: unlock, then print counters and records.
pub async fn execute_dashboard(
    args: DashboardArgs,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    execute_unlock(
        UnlockArgs {
            password: args.master_password,
        },
        session,
        formatter,
    )
    .await?;

    execute_stats(session, formatter)?;
    execute_list(
        ListArgs {
            kind: args.kind.map(Into::into),
        },
        session,
        formatter,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use passvault_gatekeeper::{Gate, GateConfig};
    use passvault_store::MemoryStore;

    fn session() -> Session {
        Session::new(
            Gate::from_config(GateConfig::default()).unwrap(),
            MemoryStore::seeded(),
        )
    }

    #[tokio::test]
    async fn test_dashboard_with_wrong_password() {
        let mut session = session();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = DashboardArgs {
            master_password: "wrong".to_string(),
            kind: None,
        };

        let result = execute_dashboard(args, &mut session, &formatter).await;
        assert!(matches!(result, Err(CliError::AccessDenied)));
        assert!(!session.is_unlocked());
    }

    #[tokio::test]
    async fn test_dashboard_unlocks() {
        let mut session = session();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = DashboardArgs {
            master_password: "admin123".to_string(),
            kind: None,
        };

        execute_dashboard(args, &mut session, &formatter).await.unwrap();
        assert!(session.is_unlocked());
    }
}
