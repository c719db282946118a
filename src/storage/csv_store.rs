use super::TicketStore;
use crate::core::{Ticket, TicketBuilder};
use crate::error::{Result, TicketDeskError};
use csv::{ReaderBuilder, WriterBuilder};
use serde::Deserialize;
use std::io;
use std::path::PathBuf;

/// Header row written to, and required in, every ticket file
pub const CSV_HEADER: [&str; 4] = ["id", "description", "priority", "status"];

/// One unvalidated CSV row
#[derive(Debug, Deserialize)]
struct TicketRecord {
    id: String,
    description: String,
    priority: String,
    status: String,
}

impl TicketRecord {
    fn into_ticket(self) -> Result<Ticket> {
        TicketBuilder::new()
            .id(self.id)
            .description(self.description)
            .priority_str(self.priority)
            .status_str(self.status)
            .build()
    }
}

/// CSV file holding a ticket collection
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the header and one record per ticket to `writer`
    pub fn write_to<W: io::Write>(writer: W, tickets: &[Ticket]) -> Result<()> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

        writer.write_record(CSV_HEADER)?;
        for ticket in tickets {
            writer.write_record([
                ticket.id().as_str(),
                ticket.description(),
                ticket.priority().as_str(),
                ticket.status().as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Read and validate every record from `reader`
    ///
    /// An empty input is an empty collection. Otherwise the first row must be
    /// exactly [`CSV_HEADER`].
    pub fn read_from<R: io::Read>(reader: R) -> Result<Vec<Ticket>> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        if headers.iter().ne(CSV_HEADER) {
            return Err(TicketDeskError::MalformedCsv {
                line: 1,
                message: format!(
                    "expected header '{}', found '{}'",
                    CSV_HEADER.join(","),
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            });
        }

        let mut tickets = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, csv::Position::line);
            let row: TicketRecord = record.deserialize(Some(&headers))?;
            tickets.push(row.into_ticket().map_err(|e| e.at_line(line))?);
        }

        Ok(tickets)
    }
}

impl TicketStore for CsvStore {
    fn save_all(&self, tickets: &[Ticket]) -> Result<()> {
        let file = std::fs::File::create(&self.path)?;
        Self::write_to(io::BufWriter::new(file), tickets)?;
        tracing::debug!("Wrote {} tickets to {}", tickets.len(), self.path.display());
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Ticket>> {
        let file = std::fs::File::open(&self.path)?;
        let tickets = Self::read_from(io::BufReader::new(file))?;
        tracing::debug!("Read {} tickets from {}", tickets.len(), self.path.display());
        Ok(tickets)
    }
}
