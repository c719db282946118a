use super::{Priority, Status, Ticket};
use crate::error::{Result, TicketDeskError};

/// Builder for creating Ticket instances from raw or typed fields
///
/// Raw priority and status strings are kept until [`TicketBuilder::build`] so
/// that every invariant is checked in one place.
#[derive(Debug, Default)]
pub struct TicketBuilder {
    id: Option<String>,
    description: Option<String>,
    priority: Option<FieldValue<Priority>>,
    status: Option<FieldValue<Status>>,
}

#[derive(Debug)]
enum FieldValue<T> {
    Typed(T),
    Raw(String),
}

impl<T: std::str::FromStr<Err = TicketDeskError>> FieldValue<T> {
    fn resolve(self) -> Result<T> {
        match self {
            Self::Typed(value) => Ok(value),
            Self::Raw(raw) => raw.parse(),
        }
    }
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(FieldValue::Typed(priority));
        self
    }

    /// Set the priority from user or file input, e.g. `"med"`
    #[must_use]
    pub fn priority_str(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(FieldValue::Raw(priority.into()));
        self
    }

    /// Set the status
    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(FieldValue::Typed(status));
        self
    }

    /// Set the status from user or file input, e.g. `"in-progress"`
    #[must_use]
    pub fn status_str(mut self, status: impl Into<String>) -> Self {
        self.status = Some(FieldValue::Raw(status.into()));
        self
    }

    /// Build the ticket
    ///
    /// Priority defaults to `Medium` and status to `Open` when never set.
    pub fn build(self) -> Result<Ticket> {
        let id = self
            .id
            .ok_or_else(|| TicketDeskError::validation("id", "ticket ID is required"))?;
        let description = self.description.ok_or_else(|| {
            TicketDeskError::validation("description", "description is required")
        })?;
        let priority = self
            .priority
            .map_or(Ok(Priority::default()), FieldValue::resolve)?;
        let status = self
            .status
            .map_or(Ok(Status::default()), FieldValue::resolve)?;

        Ticket::new(id, description, priority, status)
    }
}
