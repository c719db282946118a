//! ticket-desk - IT support ticket manager
//!
//! This is the main entry point for the ticket-desk CLI application.
//! It parses command-line arguments, owns the session's ticket manager and
//! dispatches to the interactive menu or a one-shot command handler.

use clap::Parser;
use std::path::Path;
use std::process;
use ticket_desk::cli::{Cli, Commands, OutputFormatter, handlers};
use ticket_desk::config::Config;
use ticket_desk::core::TicketManager;
use ticket_desk::error::{Result, TicketDeskError};
use ticket_desk::interactive::MenuSession;
use tracing_subscriber::EnvFilter;

/// Main entry point for the ticket-desk CLI
fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let formatter = OutputFormatter::new(cli.json, !cli.no_color);

    if let Err(e) = run(cli, formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Send logs to stderr; `--verbose` forces debug, otherwise `RUST_LOG` applies
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: OutputFormatter) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => Config::load(Some(path))?,
        None => Config::load_or_default()?,
    };
    let formatter = if config.output.color {
        formatter
    } else {
        OutputFormatter::new(formatter.is_json(), false)
    };

    let path = cli
        .file
        .unwrap_or_else(|| config.storage.default_file.clone());

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&config, path, formatter),
        command => dispatch_command(command, &path, &formatter),
    }
}

/// Start an interactive session over a fresh manager
fn run_menu(config: &Config, path: std::path::PathBuf, formatter: OutputFormatter) -> Result<()> {
    let mut manager = TicketManager::new();
    let mut session = MenuSession::new(&mut manager, formatter, path);

    if config.storage.autoload {
        if let Err(e) = session.autoload() {
            handle_error(&e, &formatter);
        }
    }

    session.run()
}

fn dispatch_command(command: Commands, path: &Path, formatter: &OutputFormatter) -> Result<()> {
    match command {
        Commands::Add {
            id,
            description,
            priority,
            status,
        } => handlers::handle_add_command(path, &id, &description, &priority, &status, formatter),
        Commands::Remove { id } => handlers::handle_remove_command(path, &id, formatter),
        Commands::Close { id } => handlers::handle_close_command(path, &id, formatter),
        Commands::Reopen { id } => handlers::handle_reopen_command(path, &id, formatter),
        Commands::Show { id } => handlers::handle_show_command(path, &id, formatter),
        Commands::List => handlers::handle_list_command(path, formatter),
        Commands::Count => handlers::handle_count_command(path, formatter),
        Commands::Menu => unreachable!("menu is dispatched by run"),
    }
}

/// Handle errors and display them to the user
///
/// Shows the main message, any suggestions, and in JSON mode a structured
/// error document.
fn handle_error(error: &TicketDeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() && !formatter.is_json() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
