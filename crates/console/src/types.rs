//! View models rendered by the console.

use chrono::{DateTime, Utc};
use serde::Serialize;

use shelfkeep_catalog::{BookRecord, CatalogEnvelope, CatalogEvent};
use shelfkeep_events::Event;

/// One table row, with the availability text already derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub quantity: u64,
    pub status: &'static str,
}

impl From<&BookRecord> for BookRow {
    fn from(book: &BookRecord) -> Self {
        Self {
            id: book.book_id().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            quantity: book.quantity(),
            status: book.status().as_str(),
        }
    }
}

/// Table layout for `list`/`search` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text columns.
    #[default]
    Table,
    /// A JSON array of rows.
    Json,
}

/// A catalog change observed during this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub sequence: u64,
    pub event_type: &'static str,
    pub book_id: String,
    pub summary: String,
    pub occurred_at: DateTime<Utc>,
}

impl From<&CatalogEnvelope> for ActivityEntry {
    fn from(envelope: &CatalogEnvelope) -> Self {
        let event = envelope.payload();
        let summary = match event {
            CatalogEvent::BookAdded(e) => {
                format!("added '{}' by {} ({} copies)", e.title, e.author, e.quantity)
            }
            CatalogEvent::BookIssued(e) => format!("issued '{}' to {}", e.title, e.borrower),
            CatalogEvent::BookReturned(e) => format!("returned '{}'", e.title),
            CatalogEvent::BookDeleted(e) => format!("deleted '{}'", e.title),
        };

        Self {
            sequence: envelope.sequence_number(),
            event_type: event.event_type(),
            book_id: event.book_id().to_string(),
            summary,
            occurred_at: event.occurred_at(),
        }
    }
}
