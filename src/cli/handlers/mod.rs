//! Handlers for one-shot subcommands
//!
//! Each handler loads the ticket file, performs one operation through
//! [`TicketManager`](crate::core::TicketManager), and saves the file again
//! when the collection changed.

mod common;
mod tickets;

pub use common::HandlerContext;
pub use tickets::{
    handle_add_command, handle_close_command, handle_count_command, handle_list_command,
    handle_remove_command, handle_reopen_command, handle_show_command,
};
