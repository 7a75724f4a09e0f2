//! Passvault CLI library.
//!
//! This library provides the terminal front end for Passvault: argument
//! parsing, configuration, the interactive session and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;
pub mod session;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use session::Session;
