//! Interactive menu for ticket-desk
//!
//! The menu borrows the session's [`TicketManager`] and drives it with
//! dialoguer prompts. All prompting, input trimming, cancel handling and
//! error rendering happen here; the manager never talks to the terminal.

use crate::cli::OutputFormatter;
use crate::core::{Priority, Status, TicketBuilder, TicketManager};
use crate::error::{Result, TicketDeskError};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::path::{Path, PathBuf};

/// Word that abandons the current prompt sequence
const CANCEL: &str = "cancel";

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Remove,
    Display,
    Close,
    Reopen,
    Save,
    Load,
    OpenCount,
    Exit,
}

impl MenuAction {
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Remove,
        Self::Display,
        Self::Close,
        Self::Reopen,
        Self::Save,
        Self::Load,
        Self::OpenCount,
        Self::Exit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Ticket",
            Self::Remove => "Remove Ticket",
            Self::Display => "Display All Tickets",
            Self::Close => "Close Ticket",
            Self::Reopen => "Reopen Ticket",
            Self::Save => "Save Tickets to File",
            Self::Load => "Load Tickets from File",
            Self::OpenCount => "Show Open Ticket Count",
            Self::Exit => "Exit",
        }
    }
}

fn is_cancel(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(CANCEL)
}

/// Reject paths that name a folder rather than a file
pub fn validate_save_path(path: &str) -> std::result::Result<(), String> {
    if path.is_empty() {
        return Err("No path entered".to_string());
    }
    if path.ends_with('/') || path.ends_with('\\') || Path::new(path).extension().is_none() {
        return Err(
            "Please include a file name with an extension (e.g. tickets.csv)".to_string(),
        );
    }
    Ok(())
}

fn require_non_empty(what: &str, input: &str) -> std::result::Result<(), String> {
    if input.is_empty() {
        Err(format!("{what} cannot be empty. Try again."))
    } else {
        Ok(())
    }
}

/// Interactive session over one ticket manager
pub struct MenuSession<'a> {
    manager: &'a mut TicketManager,
    formatter: OutputFormatter,
    default_file: PathBuf,
    theme: ColorfulTheme,
}

impl<'a> MenuSession<'a> {
    pub fn new(
        manager: &'a mut TicketManager,
        formatter: OutputFormatter,
        default_file: PathBuf,
    ) -> Self {
        Self {
            manager,
            formatter,
            default_file,
            theme: ColorfulTheme::default(),
        }
    }

    /// Load the default file before the first menu, if it exists
    pub fn autoload(&mut self) -> Result<()> {
        if self.default_file.exists() {
            let count = self.manager.load_tickets(&self.default_file)?;
            self.formatter.info(&format!(
                "Loaded {count} tickets from {}",
                self.default_file.display()
            ));
        }
        Ok(())
    }

    /// Run the menu until the operator exits
    ///
    /// Errors from individual actions are reported and the loop continues.
    /// Only a failing terminal ends the session early.
    pub fn run(&mut self) -> Result<()> {
        self.formatter.info("=== IT Support Ticket Manager ===");
        self.formatter
            .info("Welcome! Manage your support tickets below.\n");

        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

        loop {
            let selection = Select::with_theme(&self.theme)
                .with_prompt("Menu")
                .items(&labels)
                .default(0)
                .interact_opt()?;

            let action = selection.map_or(MenuAction::Exit, |index| MenuAction::ALL[index]);
            if action == MenuAction::Exit {
                break;
            }

            if let Err(e) = self.perform(action) {
                if !e.is_recoverable() {
                    return Err(e);
                }
                self.report(&e);
            }
        }

        self.formatter
            .info("\nThank you for using the IT Support Ticket Manager. Goodbye!");
        Ok(())
    }

    fn report(&self, error: &TicketDeskError) {
        self.formatter.error(&error.user_message());
        for suggestion in error.suggestions() {
            self.formatter.info(&format!("  • {suggestion}"));
        }
    }

    fn perform(&mut self, action: MenuAction) -> Result<()> {
        tracing::debug!("Menu action: {action:?}");
        match action {
            MenuAction::Add => self.add_ticket(),
            MenuAction::Remove => self.remove_ticket(),
            MenuAction::Display => {
                self.display_tickets();
                Ok(())
            },
            MenuAction::Close => self.change_status(true),
            MenuAction::Reopen => self.change_status(false),
            MenuAction::Save => self.save(),
            MenuAction::Load => self.load(),
            MenuAction::OpenCount => {
                self.formatter
                    .info(&format!("Open tickets: {}", self.manager.get_open_count()));
                Ok(())
            },
            MenuAction::Exit => Ok(()),
        }
    }

    /// Prompt for one value; `None` when the operator typed `cancel`
    fn prompt<V>(&self, label: &str, validate: V) -> Result<Option<String>>
    where
        V: Fn(&str) -> std::result::Result<(), String>,
    {
        let input = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                if is_cancel(input) {
                    Ok(())
                } else {
                    validate(input.trim())
                }
            })
            .interact_text()?;

        if is_cancel(&input) {
            Ok(None)
        } else {
            Ok(Some(input.trim().to_string()))
        }
    }

    fn add_ticket(&mut self) -> Result<()> {
        self.formatter.info("\n--- Add New Ticket ---");
        self.formatter
            .info("(Enter 'cancel' at any prompt to return to menu)\n");

        let manager: &TicketManager = self.manager;
        let Some(id) = self.prompt("Ticket ID (e.g., T1001)", |id| {
            require_non_empty("ID", id)?;
            if manager.find_ticket(id).is_some() {
                return Err(format!(
                    "A ticket with ID '{id}' already exists. Choose a different ID."
                ));
            }
            Ok(())
        })?
        else {
            return Ok(());
        };

        let Some(description) =
            self.prompt("Description", |d| require_non_empty("Description", d))?
        else {
            return Ok(());
        };

        let Some(priority) = self.prompt("Priority (Low / Medium / High)", |p| {
            p.parse::<Priority>()
                .map(|_| ())
                .map_err(|_| "Priority must be one of: Low, Medium, High. Try again.".to_string())
        })?
        else {
            return Ok(());
        };

        let Some(status) = self.prompt("Status (Open / In Progress / Closed)", |s| {
            s.parse::<Status>().map(|_| ()).map_err(|_| {
                "Status must be one of: Open, In Progress, Closed. Try again.".to_string()
            })
        })?
        else {
            return Ok(());
        };

        let ticket = TicketBuilder::new()
            .id(id)
            .description(description)
            .priority_str(priority)
            .status_str(status)
            .build()?;
        self.manager.add_ticket(ticket)?;
        self.formatter.success("\nTicket added successfully!");
        Ok(())
    }

    fn remove_ticket(&mut self) -> Result<()> {
        let Some(id) = self.prompt("Ticket ID to remove", |id| require_non_empty("ID", id))? else {
            return Ok(());
        };

        if self.manager.remove_ticket(&id) {
            self.formatter
                .success(&format!("Ticket {id} removed successfully."));
        } else {
            self.formatter.warning(&format!("Ticket {id} not found."));
        }
        Ok(())
    }

    fn display_tickets(&self) {
        if self.manager.is_empty() {
            self.formatter.warning("No tickets to display.");
            return;
        }
        for summary in self.manager.display_all_tickets() {
            self.formatter.info(&summary.to_string());
        }
    }

    fn change_status(&mut self, close: bool) -> Result<()> {
        let verb = if close { "close" } else { "reopen" };
        let manager: &TicketManager = self.manager;
        let Some(id) = self.prompt(&format!("Ticket ID to {verb}"), |id| {
            if manager.find_ticket(id).is_none() {
                return Err(format!("Ticket {id} not found."));
            }
            Ok(())
        })?
        else {
            return Ok(());
        };

        let ticket = self
            .manager
            .find_ticket_mut(&id)
            .ok_or_else(|| TicketDeskError::TicketNotFound { id: id.clone() })?;
        if close {
            ticket.close_ticket();
            self.formatter.success(&format!("Ticket {id} closed."));
        } else {
            ticket.reopen_ticket();
            self.formatter.success(&format!("Ticket {id} reopened."));
        }
        Ok(())
    }

    fn prompt_path(&self, label: &str) -> Result<String> {
        let path = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .default(self.default_file.display().to_string())
            .interact_text()?;
        Ok(path.trim().to_string())
    }

    fn save(&mut self) -> Result<()> {
        let path = self.prompt_path("Path to save CSV")?;
        if let Err(message) = validate_save_path(&path) {
            self.formatter.warning(&format!("{message}. Save cancelled."));
            return Ok(());
        }

        self.manager.save_tickets(&path)?;
        let shown = std::path::absolute(&path).unwrap_or_else(|_| PathBuf::from(&path));
        self.formatter
            .success(&format!("Saved to {}", shown.display()));
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let path = self.prompt_path("Path to load CSV")?;
        if path.is_empty() {
            return Ok(());
        }
        if !Path::new(&path).exists() {
            self.formatter.warning("File not found.");
            return Ok(());
        }

        let count = self.manager.load_tickets(&path)?;
        self.formatter
            .success(&format!("Load successful: {count} tickets."));
        Ok(())
    }
}
