use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shelfkeep_core::{Aggregate, AggregateRoot, BookId, CatalogError, CatalogResult};
use shelfkeep_events::Event;

use crate::book::BookRecord;

const CATALOG_AGGREGATE: &str = "catalog";

/// Aggregate root: the ordered list of book records.
///
/// Insertion order is preserved for the lifetime of the catalog; no command
/// re-sorts it, and deletion closes the gap without reordering the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<BookRecord>,
    version: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog by adding `records` in order.
    ///
    /// Goes through the same duplicate check as [`AddBook`], so a seed list
    /// with a repeated id is rejected.
    pub fn from_records(records: impl IntoIterator<Item = BookRecord>) -> CatalogResult<Self> {
        let mut catalog = Self::new();
        for record in records {
            let command = CatalogCommand::AddBook(AddBook {
                book_id: record.book_id().clone(),
                title: record.title().to_string(),
                author: record.author().to_string(),
                quantity: record.quantity(),
                occurred_at: Utc::now(),
            });
            catalog.execute(&command)?;
        }
        Ok(catalog)
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn get(&self, id: &str) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.book_id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Records whose id, title or author contains `query`, ignoring case, in
    /// catalog order. An empty query matches everything.
    pub fn search(&self, query: &str) -> Matches<'_> {
        Matches {
            records: self.books.iter(),
            needle: query.to_lowercase(),
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.book_id() == id)
    }

    fn find(&self, id: &BookId) -> CatalogResult<&BookRecord> {
        self.get(id.as_str()).ok_or_else(|| CatalogError::not_found(id))
    }
}

/// Iterator returned by [`Catalog::search`].
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    records: core::slice::Iter<'a, BookRecord>,
    needle: String,
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a BookRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let needle = self.needle.as_str();
        self.records.find(|book| book.matches(needle))
    }
}

impl AggregateRoot for Catalog {
    type Id = &'static str;

    fn id(&self) -> &Self::Id {
        &CATALOG_AGGREGATE
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBook {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: IssueBook.
///
/// `borrower` is carried onto the emitted event for display only; the catalog
/// keeps no ledger of who holds which copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueBook {
    pub book_id: BookId,
    pub borrower: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReturnBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeleteBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBook {
    pub book_id: BookId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogCommand {
    AddBook(AddBook),
    IssueBook(IssueBook),
    ReturnBook(ReturnBook),
    DeleteBook(DeleteBook),
}

/// Event: BookAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub quantity: u64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookIssued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIssued {
    pub book_id: BookId,
    pub title: String,
    pub borrower: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookReturned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BookDeleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDeleted {
    pub book_id: BookId,
    pub title: String,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    BookAdded(BookAdded),
    BookIssued(BookIssued),
    BookReturned(BookReturned),
    BookDeleted(BookDeleted),
}

impl CatalogEvent {
    pub fn book_id(&self) -> &BookId {
        match self {
            CatalogEvent::BookAdded(e) => &e.book_id,
            CatalogEvent::BookIssued(e) => &e.book_id,
            CatalogEvent::BookReturned(e) => &e.book_id,
            CatalogEvent::BookDeleted(e) => &e.book_id,
        }
    }
}

impl Event for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::BookAdded(_) => "catalog.book.added",
            CatalogEvent::BookIssued(_) => "catalog.book.issued",
            CatalogEvent::BookReturned(_) => "catalog.book.returned",
            CatalogEvent::BookDeleted(_) => "catalog.book.deleted",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::BookAdded(e) => e.occurred_at,
            CatalogEvent::BookIssued(e) => e.occurred_at,
            CatalogEvent::BookReturned(e) => e.occurred_at,
            CatalogEvent::BookDeleted(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Catalog {
    type Command = CatalogCommand;
    type Event = CatalogEvent;
    type Error = CatalogError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            CatalogEvent::BookAdded(e) => {
                self.books.push(BookRecord::new(
                    e.book_id.clone(),
                    e.title.clone(),
                    e.author.clone(),
                    e.quantity,
                ));
            }
            CatalogEvent::BookIssued(e) => {
                if let Some(i) = self.position(e.book_id.as_str()) {
                    self.books[i].take_copy();
                }
            }
            CatalogEvent::BookReturned(e) => {
                if let Some(i) = self.position(e.book_id.as_str()) {
                    self.books[i].put_back_copy();
                }
            }
            CatalogEvent::BookDeleted(e) => {
                if let Some(i) = self.position(e.book_id.as_str()) {
                    self.books.remove(i);
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CatalogCommand::AddBook(cmd) => self.handle_add(cmd),
            CatalogCommand::IssueBook(cmd) => self.handle_issue(cmd),
            CatalogCommand::ReturnBook(cmd) => self.handle_return(cmd),
            CatalogCommand::DeleteBook(cmd) => self.handle_delete(cmd),
        }
    }
}

impl Catalog {
    fn handle_add(&self, cmd: &AddBook) -> CatalogResult<Vec<CatalogEvent>> {
        if self.contains(cmd.book_id.as_str()) {
            return Err(CatalogError::duplicate_id(&cmd.book_id));
        }
        Ok(vec![CatalogEvent::BookAdded(BookAdded {
            book_id: cmd.book_id.clone(),
            title: cmd.title.clone(),
            author: cmd.author.clone(),
            quantity: cmd.quantity,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_issue(&self, cmd: &IssueBook) -> CatalogResult<Vec<CatalogEvent>> {
        let book = self.find(&cmd.book_id)?;
        if book.quantity() == 0 {
            return Err(CatalogError::out_of_stock(&cmd.book_id));
        }
        Ok(vec![CatalogEvent::BookIssued(BookIssued {
            book_id: cmd.book_id.clone(),
            title: book.title().to_string(),
            borrower: cmd.borrower.clone(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_return(&self, cmd: &ReturnBook) -> CatalogResult<Vec<CatalogEvent>> {
        let book = self.find(&cmd.book_id)?;
        Ok(vec![CatalogEvent::BookReturned(BookReturned {
            book_id: cmd.book_id.clone(),
            title: book.title().to_string(),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_delete(&self, cmd: &DeleteBook) -> CatalogResult<Vec<CatalogEvent>> {
        let book = self.find(&cmd.book_id)?;
        Ok(vec![CatalogEvent::BookDeleted(BookDeleted {
            book_id: cmd.book_id.clone(),
            title: book.title().to_string(),
            occurred_at: cmd.occurred_at,
        })])
    }
}
