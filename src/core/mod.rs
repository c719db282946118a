//! Ticket data model and in-memory management

mod builders;
mod manager;
mod status;
mod ticket;

pub use builders::TicketBuilder;
pub use manager::{StatusCounts, TicketManager};
pub use status::{Priority, Status};
pub use ticket::{Ticket, TicketId, TicketSummary};
