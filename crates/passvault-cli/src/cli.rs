//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use passvault_domain::RecordKind;

/// Passvault - a single-session password vault for the terminal.
#[derive(Debug, Parser)]
#[command(name = "passvault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Start with an empty vault instead of the demo records
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Unlock once and print the dashboard
    Dashboard(DashboardArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the dashboard command.
#[derive(Debug, Parser)]
pub struct DashboardArgs {
    /// Master password
    #[arg(short, long, env = "PASSVAULT_MASTER_PASSWORD", hide_env_values = true)]
    pub master_password: String,

    /// Only list records of this kind
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

/// Record kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Website or app login
    Website,
    /// Email account
    Email,
    /// Credit or debit card
    Card,
}

/// Commands available inside an interactive session.
#[derive(Debug)]
pub enum VaultCommand {
    /// Enter the master password
    Unlock(UnlockArgs),
    /// Hide the records again
    Lock,
    /// List records
    List(ListArgs),
    /// Show per-kind counts
    Stats,
    /// Add a record
    Add(AddArgs),
    /// Reveal one record
    Show(ShowArgs),
    /// Delete a record
    Delete(DeleteArgs),
}

/// Arguments for the unlock command.
#[derive(Debug)]
pub struct UnlockArgs {
    /// Candidate master password
    pub password: String,
}

/// Arguments for the list command.
#[derive(Debug, Default)]
pub struct ListArgs {
    /// Only list records of this kind
    pub kind: Option<RecordKind>,
}

/// Arguments for the add command.
#[derive(Debug)]
pub struct AddArgs {
    /// Kind of record
    pub kind: RecordKind,
    /// Display label
    pub title: String,
    /// Password or PIN
    pub secret: String,
    /// Kind-specific fields as `(name, value)` pairs
    pub fields: Vec<(String, String)>,
}

/// Arguments for the show command.
#[derive(Debug)]
pub struct ShowArgs {
    /// Full record id, or its trailing digits as shown in tables
    pub id: String,
}

/// Arguments for the delete command.
#[derive(Debug)]
pub struct DeleteArgs {
    /// Full record id, or its trailing digits as shown in tables
    pub id: String,
    /// Skip confirmation prompt
    pub yes: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Website => RecordKind::Website,
            KindArg::Email => RecordKind::Email,
            KindArg::Card => RecordKind::Card,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::parse_from(["passvault"]);
        assert!(cli.command.is_none());
        assert!(!cli.empty);
    }

    #[test]
    fn test_dashboard_command() {
        let cli = Cli::parse_from([
            "passvault",
            "--empty",
            "dashboard",
            "--master-password",
            "admin123",
            "--kind",
            "card",
        ]);
        assert!(cli.empty);
        match cli.command {
            Some(Command::Dashboard(args)) => {
                assert_eq!(args.master_password, "admin123");
                assert!(matches!(args.kind, Some(KindArg::Card)));
            }
            _ => panic!("Expected Dashboard command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["passvault", "repl", "--format", "json"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Some(Command::Repl)));
    }

    #[test]
    fn test_kind_conversion() {
        let kind: RecordKind = KindArg::Email.into();
        assert_eq!(kind, RecordKind::Email);
    }
}
