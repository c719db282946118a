use super::{Priority, Status};
use crate::error::{Result, TicketDeskError};
use serde::Serialize;
use std::fmt;

/// Identifier of a ticket
///
/// Never empty or whitespace-only. Comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    /// Validate and wrap a ticket ID
    pub fn parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(TicketDeskError::validation("id", "ticket ID cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for TicketId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A support ticket
///
/// `id` and `description` are fixed at creation. Status only moves through
/// [`Ticket::close_ticket`] and [`Ticket::reopen_ticket`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    description: String,
    priority: Priority,
    status: Status,
}

impl Ticket {
    /// Create a validated ticket
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        status: Status,
    ) -> Result<Self> {
        let id = TicketId::parse(id)?;
        let description = description.into();
        if description.trim().is_empty() {
            return Err(TicketDeskError::validation(
                "description",
                "description cannot be empty",
            ));
        }

        Ok(Self {
            id,
            description,
            priority,
            status,
        })
    }

    pub const fn id(&self) -> &TicketId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn priority(&self) -> Priority {
        self.priority
    }

    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the status is exactly `Open`; `In Progress` does not count
    pub fn is_open(&self) -> bool {
        self.status == Status::Open
    }

    /// Mark the ticket closed. Closing a closed ticket is a no-op.
    pub fn close_ticket(&mut self) {
        self.status = Status::Closed;
    }

    /// Mark the ticket open again, from any status
    pub fn reopen_ticket(&mut self) {
        self.status = Status::Open;
    }

    /// One-line view for listings
    pub fn summary(&self) -> TicketSummary<'_> {
        TicketSummary {
            id: &self.id,
            description: &self.description,
            priority: self.priority,
            status: self.status,
        }
    }
}

/// Borrowed, display-ready view of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TicketSummary<'a> {
    pub id: &'a TicketId,
    pub description: &'a str,
    pub priority: Priority,
    pub status: Status,
}

impl fmt::Display for TicketSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | Priority: {} | Status: {}",
            self.id, self.description, self.priority, self.status
        )
    }
}
