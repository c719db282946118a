//! Persistence for ticket collections
//!
//! The [`TicketStore`] trait is the seam between the in-memory manager and a
//! storage format. [`CsvStore`] is the only implementation.

mod csv_store;
mod repository;

pub use csv_store::{CSV_HEADER, CsvStore};
pub use repository::TicketStore;
