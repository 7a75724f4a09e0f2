//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{AddArgs, DeleteArgs, ListArgs, ShowArgs, UnlockArgs, VaultCommand};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use passvault_domain::RecordKind;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl(session: &mut Session, config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Passvault REPL - Type 'unlock <master password>' to begin, 'help' for commands")
    );
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = if session.is_unlocked() {
            "passvault> "
        } else {
            "passvault (locked)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if !carries_secret(line) {
                    editor.add_history_entry(line).ok();
                }

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) = execute_repl_command(cmd, session, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug)]
enum ReplCommand {
    Exit,
    Help,
    Command(VaultCommand),
}

/// Execute a REPL command.
async fn execute_repl_command(
    cmd: VaultCommand,
    session: &mut Session,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        VaultCommand::Unlock(args) => commands::execute_unlock(args, session, formatter).await,
        VaultCommand::Lock => commands::execute_lock(session, formatter),
        VaultCommand::List(args) => commands::execute_list(args, session, formatter),
        VaultCommand::Stats => commands::execute_stats(session, formatter),
        VaultCommand::Add(args) => commands::execute_add(args, session, formatter),
        VaultCommand::Show(args) => commands::execute_show(args, session, formatter),
        VaultCommand::Delete(args) => commands::execute_delete(args, session, formatter),
    }
}

/// Lines that must not end up in the history file.
///
/// Lines that do not split cleanly are kept out as well.
fn carries_secret(line: &str) -> bool {
    split_args(line)
        .map(|words| matches!(words.first().map(String::as_str), Some("unlock" | "add")))
        .unwrap_or(true)
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts = split_args(line)?;

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    let args = &parts[1..];
    match parts[0].as_str() {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "unlock" => parse_unlock_command(args),
        "lock" => Ok(ReplCommand::Command(VaultCommand::Lock)),
        "list" | "ls" => parse_list_command(args),
        "stats" => Ok(ReplCommand::Command(VaultCommand::Stats)),
        "add" => parse_add_command(args),
        "show" => parse_show_command(args),
        "delete" | "rm" => parse_delete_command(args),
        other => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            other
        ))),
    }
}

fn parse_unlock_command(args: &[String]) -> Result<ReplCommand> {
    match args {
        [password] => Ok(ReplCommand::Command(VaultCommand::Unlock(UnlockArgs {
            password: password.clone(),
        }))),
        _ => Err(CliError::InvalidInput(
            "Usage: unlock <master password> (quote it if it contains spaces)".to_string(),
        )),
    }
}

fn parse_list_command(args: &[String]) -> Result<ReplCommand> {
    let kind = match args.first() {
        None => None,
        Some(s) if s == "all" => None,
        Some(s) => Some(parse_kind(s)?),
    };

    Ok(ReplCommand::Command(VaultCommand::List(ListArgs { kind })))
}

fn parse_add_command(args: &[String]) -> Result<ReplCommand> {
    if args.len() < 3 {
        return Err(CliError::InvalidInput(
            "Usage: add <website|email|card> <title> <secret> [field=value ...]".to_string(),
        ));
    }

    let kind = parse_kind(&args[0])?;
    let fields = args[3..]
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| {
                    CliError::InvalidInput(format!("Expected field=value, got '{}'", pair))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ReplCommand::Command(VaultCommand::Add(AddArgs {
        kind,
        title: args[1].clone(),
        secret: args[2].clone(),
        fields,
    })))
}

fn parse_show_command(args: &[String]) -> Result<ReplCommand> {
    match args {
        [id] => Ok(ReplCommand::Command(VaultCommand::Show(ShowArgs { id: id.clone() }))),
        _ => Err(CliError::InvalidInput("Usage: show <id>".to_string())),
    }
}

fn parse_delete_command(args: &[String]) -> Result<ReplCommand> {
    let yes = args.iter().any(|a| a == "-y" || a == "--yes");
    let ids: Vec<&String> = args.iter().filter(|a| *a != "-y" && *a != "--yes").collect();

    match ids.as_slice() {
        [id] => Ok(ReplCommand::Command(VaultCommand::Delete(DeleteArgs {
            id: (*id).clone(),
            yes,
        }))),
        _ => Err(CliError::InvalidInput("Usage: delete <id> [-y]".to_string())),
    }
}

fn parse_kind(s: &str) -> Result<RecordKind> {
    RecordKind::parse(s).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Unknown kind '{}'. Expected website, email or card.",
            s
        ))
    })
}

/// Split a line into words, honouring single and double quotes.
fn split_args(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CliError::InvalidInput("Unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!(
        "Failed to initialize editor: {}",
        e
    )))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  unlock <master password>          - Unlock the vault");
    println!("  lock                              - Lock the vault again");
    println!("  list [website|email|card]         - List passwords, optionally by kind");
    println!("  stats                             - Count passwords per kind");
    println!("  add <kind> <title> <secret> [f=v] - Add a password");
    println!("    website fields: username, url");
    println!("    email fields:   email");
    println!("    card fields:    holder, number, expiry, cvv (secret is the PIN)");
    println!("  show <id>                         - Reveal a password");
    println!("  delete <id> [-y]                  - Delete a password");
    println!("  help, ?                           - Show this help");
    println!("  exit, quit, q                     - Exit REPL");
    println!();
    println!("  Quote values containing spaces: add email \"Personal Gmail\" pw email=me@x.com");
    println!();
}
