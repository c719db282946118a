use crate::core::Ticket;
use crate::error::Result;

/// Storage trait for whole-collection persistence
///
/// Implementations write and read the full, ordered collection at once.
/// `load_all` must either return every ticket or fail; it never returns a
/// partially read collection.
pub trait TicketStore {
    /// Writes all tickets, replacing whatever the store held before
    fn save_all(&self, tickets: &[Ticket]) -> Result<()>;

    /// Reads all tickets in stored order
    fn load_all(&self) -> Result<Vec<Ticket>>;
}
