//! In-memory ticket collection
//!
//! [`TicketManager`] owns every ticket for a session, keeps insertion order,
//! and enforces unique IDs. Saving and loading go through a
//! [`TicketStore`](crate::storage::TicketStore); loading is all-or-nothing.

use super::{Status, Ticket, TicketSummary};
use crate::error::{Result, TicketDeskError};
use crate::storage::{CsvStore, TicketStore};
use serde::Serialize;
use std::path::Path;

/// Number of tickets in each status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
}

impl StatusCounts {
    pub const fn total(&self) -> usize {
        self.open + self.in_progress + self.closed
    }
}

/// Ordered collection of tickets with unique IDs
#[derive(Debug, Default)]
pub struct TicketManager {
    tickets: Vec<Ticket>,
}

impl TicketManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ticket, rejecting duplicate IDs
    pub fn add_ticket(&mut self, ticket: Ticket) -> Result<()> {
        if self.find_ticket(ticket.id().as_str()).is_some() {
            return Err(TicketDeskError::DuplicateTicket {
                id: ticket.id().to_string(),
            });
        }

        tracing::info!("Added ticket {}", ticket.id());
        self.tickets.push(ticket);
        Ok(())
    }

    /// Look up a ticket by exact ID
    pub fn find_ticket(&self, id: &str) -> Option<&Ticket> {
        let found = self.tickets.iter().find(|t| *t.id() == *id);
        tracing::debug!("Lookup {id}: {}", if found.is_some() { "hit" } else { "miss" });
        found
    }

    /// Look up a ticket by exact ID for closing or reopening
    pub fn find_ticket_mut(&mut self, id: &str) -> Option<&mut Ticket> {
        self.tickets.iter_mut().find(|t| *t.id() == *id)
    }

    /// Remove a ticket, returning whether one was removed
    pub fn remove_ticket(&mut self, id: &str) -> bool {
        match self.tickets.iter().position(|t| *t.id() == *id) {
            Some(index) => {
                self.tickets.remove(index);
                tracing::info!("Removed ticket {id}");
                true
            },
            None => false,
        }
    }

    /// Summaries of every ticket in insertion order
    ///
    /// The iterator is lazy; clone it or call again to start over.
    pub fn display_all_tickets(&self) -> impl Iterator<Item = TicketSummary<'_>> + Clone + '_ {
        self.tickets.iter().map(Ticket::summary)
    }

    /// All tickets in insertion order
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Number of tickets whose status is exactly `Open`
    pub fn get_open_count(&self) -> usize {
        self.tickets.iter().filter(|t| t.is_open()).count()
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.tickets
            .iter()
            .fold(StatusCounts::default(), |mut counts, ticket| {
                match ticket.status() {
                    Status::Open => counts.open += 1,
                    Status::InProgress => counts.in_progress += 1,
                    Status::Closed => counts.closed += 1,
                }
                counts
            })
    }

    /// Write every ticket to the CSV file at `path`, overwriting it
    pub fn save_tickets(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_to(&CsvStore::new(path.as_ref()))
    }

    /// Replace the collection with the contents of the CSV file at `path`
    ///
    /// Returns the number of tickets loaded. On any error the current
    /// collection is left untouched.
    pub fn load_tickets(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        self.load_from(&CsvStore::new(path.as_ref()))
    }

    pub fn save_to<S: TicketStore>(&self, store: &S) -> Result<()> {
        store.save_all(&self.tickets)?;
        tracing::info!("Saved {} tickets", self.tickets.len());
        Ok(())
    }

    pub fn load_from<S: TicketStore>(&mut self, store: &S) -> Result<usize> {
        let staged = store
            .load_all()
            .and_then(Self::from_tickets)
            .inspect_err(|e| tracing::warn!("Load rejected, keeping current tickets: {e}"))?;

        self.tickets = staged.tickets;
        tracing::info!("Loaded {} tickets", self.tickets.len());
        Ok(self.tickets.len())
    }

    /// Build a manager from tickets, rejecting duplicate IDs
    pub fn from_tickets(tickets: Vec<Ticket>) -> Result<Self> {
        let mut manager = Self::new();
        for ticket in tickets {
            manager.add_ticket(ticket)?;
        }
        Ok(manager)
    }
}
