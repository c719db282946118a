//! ticket-desk - A small IT support ticket manager
//!
//! This crate provides the ticket data model and its in-memory management:
//! - Validated tickets with closed priority and status enumerations
//! - An ordered, id-unique collection with lookup, removal and counts
//! - Lossless CSV persistence with all-or-nothing loading
//! - An interactive menu and one-shot subcommands on top of the core
//!
//! # Example
//!
//! ```rust,no_run
//! use ticket_desk::core::{Priority, Status, Ticket, TicketManager};
//!
//! let mut manager = TicketManager::new();
//! manager.add_ticket(Ticket::new("T1001", "Printer not working", Priority::High, Status::Open)?)?;
//! if let Some(ticket) = manager.find_ticket_mut("T1001") {
//!     ticket.close_ticket();
//! }
//! manager.save_tickets("tickets.csv")?;
//! # Ok::<(), ticket_desk::TicketDeskError>(())
//! ```

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod storage;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{Result, TicketDeskError};
