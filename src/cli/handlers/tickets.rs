use super::HandlerContext;
use crate::cli::output::OutputFormatter;
use crate::core::TicketBuilder;
use crate::error::{Result, TicketDeskError};
use std::path::Path;

/// Handle the `add` command
pub fn handle_add_command(
    path: &Path,
    id: &str,
    description: &str,
    priority: &str,
    status: &str,
    formatter: &OutputFormatter,
) -> Result<()> {
    let id = id.trim();
    let mut context = HandlerContext::open(path, true)?;

    let ticket = TicketBuilder::new()
        .id(id)
        .description(description.trim())
        .priority_str(priority)
        .status_str(status)
        .build()?;
    context.manager.add_ticket(ticket)?;
    context.persist()?;

    if formatter.is_json() {
        let ticket = context.ticket(id)?;
        formatter.json(&serde_json::json!({ "status": "success", "ticket": ticket }))?;
    } else {
        formatter.success(&format!("Ticket {id} added"));
    }
    Ok(())
}

/// Handle the `remove` command
pub fn handle_remove_command(path: &Path, id: &str, formatter: &OutputFormatter) -> Result<()> {
    let id = id.trim();
    let mut context = HandlerContext::open(path, false)?;

    if !context.manager.remove_ticket(id) {
        return Err(TicketDeskError::TicketNotFound { id: id.to_string() });
    }
    context.persist()?;

    if formatter.is_json() {
        formatter.json(&serde_json::json!({ "status": "success", "removed": id }))?;
    } else {
        formatter.success(&format!("Ticket {id} removed"));
    }
    Ok(())
}

/// Handle the `close` command
pub fn handle_close_command(path: &Path, id: &str, formatter: &OutputFormatter) -> Result<()> {
    change_status(path, id, true, formatter)
}

/// Handle the `reopen` command
pub fn handle_reopen_command(path: &Path, id: &str, formatter: &OutputFormatter) -> Result<()> {
    change_status(path, id, false, formatter)
}

fn change_status(path: &Path, id: &str, close: bool, formatter: &OutputFormatter) -> Result<()> {
    let id = id.trim();
    let mut context = HandlerContext::open(path, false)?;

    let ticket = context.ticket_mut(id)?;
    if close {
        ticket.close_ticket();
    } else {
        ticket.reopen_ticket();
    }
    context.persist()?;

    if formatter.is_json() {
        let ticket = context.ticket(id)?;
        formatter.json(&serde_json::json!({ "status": "success", "ticket": ticket }))?;
    } else {
        let verb = if close { "closed" } else { "reopened" };
        formatter.success(&format!("Ticket {id} {verb}"));
    }
    Ok(())
}

/// Handle the `show` command
pub fn handle_show_command(path: &Path, id: &str, formatter: &OutputFormatter) -> Result<()> {
    let id = id.trim();
    let context = HandlerContext::open(path, false)?;
    let ticket = context.ticket(id)?;

    if formatter.is_json() {
        formatter.json(ticket)?;
    } else {
        formatter.info(&format!("ID:          {}", ticket.id()));
        formatter.info(&format!("Description: {}", ticket.description()));
        formatter.info(&format!("Priority:    {}", ticket.priority()));
        formatter.info(&format!("Status:      {}", ticket.status()));
    }
    Ok(())
}

/// Handle the `list` command
pub fn handle_list_command(path: &Path, formatter: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::open(path, false)?;

    if formatter.is_json() {
        let summaries: Vec<_> = context.manager.display_all_tickets().collect();
        return formatter.json(&summaries);
    }

    if context.manager.is_empty() {
        formatter.warning("No tickets to display");
        return Ok(());
    }
    for summary in context.manager.display_all_tickets() {
        formatter.info(&summary.to_string());
    }
    Ok(())
}

/// Handle the `count` command
pub fn handle_count_command(path: &Path, formatter: &OutputFormatter) -> Result<()> {
    let context = HandlerContext::open(path, false)?;
    let counts = context.manager.status_counts();

    if formatter.is_json() {
        return formatter.json(&counts);
    }

    formatter.info(&format!("Open tickets: {}", counts.open));
    formatter.info(&format!("In progress:  {}", counts.in_progress));
    formatter.info(&format!("Closed:       {}", counts.closed));
    Ok(())
}
