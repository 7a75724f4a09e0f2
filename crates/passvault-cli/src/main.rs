//! Passvault CLI - a single-session password vault for the terminal.

use clap::Parser;
use passvault_cli::commands;
use passvault_cli::repl;
use passvault_cli::{Cli, Command, Config, Formatter, Session};
use passvault_gatekeeper::Gate;
use passvault_store::MemoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so table and JSON output stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> passvault_cli::Result<()> {
    let cli = Cli::parse();

    // An explicit config file must load; the default one may be unreadable
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Using default configuration: {}", e);
            Config::default()
        }),
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let gate = Gate::from_config(config.gate.clone())?;
    let store = if cli.empty || !config.settings.seed_demo_data {
        MemoryStore::new()
    } else {
        MemoryStore::seeded()
    };
    let mut session = Session::new(gate, store);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&mut session, &config, &formatter).await?;
        }
        Some(Command::Dashboard(args)) => {
            commands::execute_dashboard(args, &mut session, &formatter).await?;
        }
    }

    Ok(())
}
