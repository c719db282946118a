//! Test utilities for ticket-desk
//!
//! Shared fixtures so unit tests across modules build tickets the same way.

use crate::core::{Priority, Status, Ticket, TicketManager};

/// Create a test ticket whose description is derived from its ID
pub fn create_test_ticket(id: &str, priority: Priority, status: Status) -> Ticket {
    Ticket::new(id, format!("Description for {id}"), priority, status)
        .expect("Failed to create test ticket")
}

/// Manager with two Open tickets, one In Progress and one Closed
///
/// IDs are `T1`..`T4` in insertion order.
pub fn sample_manager() -> TicketManager {
    TicketManager::from_tickets(vec![
        create_test_ticket("T1", Priority::High, Status::Open),
        create_test_ticket("T2", Priority::Medium, Status::InProgress),
        create_test_ticket("T3", Priority::Low, Status::Closed),
        create_test_ticket("T4", Priority::Low, Status::Open),
    ])
    .expect("Failed to build sample manager")
}

/// Assert that two collections hold the same tickets in the same order
pub fn assert_same_tickets(left: &[Ticket], right: &[Ticket]) {
    assert_eq!(left.len(), right.len(), "Ticket counts don't match");
    for (l, r) in left.iter().zip(right) {
        assert_eq!(l.id(), r.id(), "Ticket IDs don't match");
        assert_eq!(l.description(), r.description(), "Ticket descriptions don't match");
        assert_eq!(l.priority(), r.priority(), "Ticket priorities don't match");
        assert_eq!(l.status(), r.status(), "Ticket statuses don't match");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_manager() {
        let manager = sample_manager();
        assert_eq!(manager.len(), 4);
        assert_eq!(manager.get_open_count(), 2);
    }

    #[test]
    fn test_assert_same_tickets_accepts_clone() {
        let manager = sample_manager();
        let copy = manager.tickets().to_vec();
        assert_same_tickets(manager.tickets(), &copy);
    }
}
