//! Ticket priority and status
//!
//! Both are closed enumerations. Free-form input is mapped onto them through
//! explicit alias tables, so the accepted spellings live in one place.

use crate::error::{Result, TicketDeskError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Accepted spellings for each priority, compared case-insensitively
const PRIORITY_ALIASES: &[(&str, Priority)] = &[
    ("low", Priority::Low),
    ("medium", Priority::Medium),
    ("med", Priority::Medium),
    ("high", Priority::High),
];

/// Accepted spellings for each status, compared case-insensitively
const STATUS_ALIASES: &[(&str, Status)] = &[
    ("open", Status::Open),
    ("in progress", Status::InProgress),
    ("in-progress", Status::InProgress),
    ("in_progress", Status::InProgress),
    ("progress", Status::InProgress),
    ("closed", Status::Closed),
    ("close", Status::Closed),
];

/// Look up `input` in an alias table after trimming and lowercasing
fn normalize<T: Copy>(table: &[(&str, T)], input: &str) -> Option<T> {
    let key = input.trim().to_lowercase();
    table
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, value)| *value)
}

/// Ticket priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Canonical display name, also used in CSV files
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self> {
        normalize(PRIORITY_ALIASES, s).ok_or_else(|| {
            TicketDeskError::validation(
                "priority",
                format!("'{}' is not one of Low, Medium, High", s.trim()),
            )
        })
    }
}

/// Ticket status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Status {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Closed,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProgress, Self::Closed];

    /// Canonical display name, also used in CSV files
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TicketDeskError;

    fn from_str(s: &str) -> Result<Self> {
        normalize(STATUS_ALIASES, s).ok_or_else(|| {
            TicketDeskError::validation(
                "status",
                format!("'{}' is not one of Open, In Progress, Closed", s.trim()),
            )
        })
    }
}
