//! Command-line interface definitions

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ticket-desk",
    version,
    about = "Manage IT support tickets and keep them in a CSV file"
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file to use instead of the per-user one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// CSV file with tickets (defaults to storage.default_file)
    #[arg(short, long, global = true, value_name = "PATH", env = "TICKET_DESK_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Add a ticket
    Add {
        /// Ticket ID, e.g. T1001
        id: String,

        /// What the problem is
        description: String,

        /// Low, Medium or High
        #[arg(short, long, default_value = "Medium")]
        priority: String,

        /// Open, In Progress or Closed
        #[arg(short, long, default_value = "Open")]
        status: String,
    },

    /// Remove a ticket
    Remove {
        id: String,
    },

    /// Close a ticket
    Close {
        id: String,
    },

    /// Reopen a ticket
    Reopen {
        id: String,
    },

    /// Show one ticket
    Show {
        id: String,
    },

    /// List all tickets
    List,

    /// Count tickets by status
    Count,
}
