//! Error types for ticket-desk
//!
//! Every fallible operation in the crate returns [`Result`]. Validation and
//! duplicate-id failures come from the core; I/O failures are surfaced
//! unchanged from the filesystem so callers can inspect their kind.

use std::io;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TicketDeskError>;

/// Errors produced by ticket-desk
#[derive(Error, Debug)]
pub enum TicketDeskError {
    /// A ticket field violates its invariant
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A CSV row violates a ticket field invariant
    #[error("Invalid {field} on line {line}: {reason}")]
    InvalidRecord {
        line: u64,
        field: &'static str,
        reason: String,
    },

    /// A ticket with the same ID already exists
    #[error("A ticket with ID '{id}' already exists")]
    DuplicateTicket { id: String },

    /// The CSV file is structurally broken
    #[error("Malformed CSV on line {line}: {message}")]
    MalformedCsv { line: u64, message: String },

    /// Ticket lookup failed (front ends only; the core returns `None`)
    #[error("Ticket {id} not found")]
    TicketNotFound { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal interaction failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl TicketDeskError {
    /// Build a validation error for `field`
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Attach a CSV line number to a validation error
    #[must_use]
    pub fn at_line(self, line: u64) -> Self {
        match self {
            Self::Validation { field, reason } => Self::InvalidRecord {
                line,
                field,
                reason,
            },
            other => other,
        }
    }

    /// Whether this error reports a field invariant violation
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidRecord { .. })
    }

    /// Whether the session can continue after this error
    ///
    /// Everything the core raises is recoverable; only a broken terminal
    /// ends an interactive session.
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Prompt(_))
    }

    /// Whether this is a configuration error
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Message suitable for showing to the operator
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => match e.kind() {
                io::ErrorKind::PermissionDenied => "Access denied.".to_string(),
                io::ErrorKind::NotFound => "File or folder not found.".to_string(),
                _ => format!("File operation failed: {e}"),
            },
            other => other.to_string(),
        }
    }

    /// Suggestions for fixing the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Io(e) if e.kind() == io::ErrorKind::PermissionDenied => vec![
                "Make sure the path names a file (e.g. tickets.csv), not a folder".to_string(),
                "Choose a location you can write to, such as your home directory".to_string(),
                "Close any program that has the file open".to_string(),
            ],
            Self::Io(e) if e.kind() == io::ErrorKind::NotFound => vec![
                "Check that the folder part of the path exists".to_string(),
            ],
            Self::DuplicateTicket { .. } => vec!["Choose a different ticket ID".to_string()],
            Self::MalformedCsv { .. } => vec![
                "The first line must be the header: id,description,priority,status".to_string(),
            ],
            Self::InvalidRecord { field, .. } | Self::Validation { field, .. } => match *field {
                "priority" => vec!["Priority must be one of: Low, Medium, High".to_string()],
                "status" => vec!["Status must be one of: Open, In Progress, Closed".to_string()],
                _ => Vec::new(),
            },
            Self::Config(_) => vec![
                "Check the configuration file syntax or pass --config explicitly".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

impl From<csv::Error> for TicketDeskError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            _ => Self::MalformedCsv { line, message },
        }
    }
}

impl From<config::ConfigError> for TicketDeskError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
