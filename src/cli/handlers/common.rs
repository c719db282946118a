use crate::core::{Ticket, TicketManager};
use crate::error::{Result, TicketDeskError};
use std::path::{Path, PathBuf};

/// Ticket file plus the manager loaded from it
pub struct HandlerContext {
    pub path: PathBuf,
    pub manager: TicketManager,
}

impl HandlerContext {
    /// Load the ticket file at `path`
    ///
    /// A missing file yields an empty collection when `allow_missing` is set
    /// (used by `add`, which creates the file).
    pub fn open(path: &Path, allow_missing: bool) -> Result<Self> {
        let mut manager = TicketManager::new();

        if allow_missing && !path.exists() {
            tracing::debug!("{} does not exist yet, starting empty", path.display());
        } else {
            manager.load_tickets(path)?;
        }

        Ok(Self {
            path: path.to_path_buf(),
            manager,
        })
    }

    /// Write the collection back to the ticket file
    pub fn persist(&self) -> Result<()> {
        self.manager.save_tickets(&self.path)
    }

    pub fn ticket(&self, id: &str) -> Result<&Ticket> {
        self.manager
            .find_ticket(id)
            .ok_or_else(|| TicketDeskError::TicketNotFound { id: id.to_string() })
    }

    pub fn ticket_mut(&mut self, id: &str) -> Result<&mut Ticket> {
        self.manager
            .find_ticket_mut(id)
            .ok_or_else(|| TicketDeskError::TicketNotFound { id: id.to_string() })
    }
}
