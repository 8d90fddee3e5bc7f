//! Catalog store: the single owner of the catalog for a session.
//!
//! The store turns plain arguments into commands, runs them through the
//! [`Catalog`] aggregate (decide, then apply) and publishes every applied event
//! on its bus. There is no ambient instance: whoever needs the catalog is
//! handed the store, and independent stores never share state.

use chrono::Utc;

use shelfkeep_core::{Aggregate, AggregateRoot, BookId, CatalogError, CatalogResult};
use shelfkeep_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};

use crate::book::BookRecord;
use crate::catalog::{
    AddBook, Catalog, CatalogCommand, CatalogEvent, DeleteBook, IssueBook, Matches, ReturnBook,
};

/// Envelope type published by [`CatalogStore`].
pub type CatalogEnvelope = EventEnvelope<CatalogEvent>;

#[derive(Debug)]
pub struct CatalogStore<B = InMemoryEventBus<CatalogEnvelope>> {
    catalog: Catalog,
    bus: B,
    sequence: u64,
}

impl CatalogStore {
    /// An empty store with its own in-memory bus.
    pub fn new() -> Self {
        Self::with_bus(Catalog::new(), InMemoryEventBus::new())
    }

    /// A store pre-loaded with the seed records.
    pub fn seeded() -> CatalogResult<Self> {
        Ok(Self::with_bus(Catalog::seeded()?, InMemoryEventBus::new()))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> CatalogStore<B>
where
    B: EventBus<CatalogEnvelope>,
{
    pub fn with_bus(catalog: Catalog, bus: B) -> Self {
        Self {
            catalog,
            bus,
            sequence: 0,
        }
    }

    /// Receive every event published from now on.
    pub fn subscribe(&self) -> Subscription<CatalogEnvelope> {
        self.bus.subscribe()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn add_book(
        &mut self,
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u32,
    ) -> CatalogResult<()> {
        self.execute(CatalogCommand::AddBook(AddBook {
            book_id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity: u64::from(quantity),
            occurred_at: Utc::now(),
        }))?;
        Ok(())
    }

    /// Take one copy off the shelf and return the updated record.
    pub fn issue_book(&mut self, id: &str, borrower: &str) -> CatalogResult<BookRecord> {
        self.execute(CatalogCommand::IssueBook(IssueBook {
            book_id: BookId::new(id),
            borrower: borrower.to_string(),
            occurred_at: Utc::now(),
        }))?;
        self.snapshot(id)
    }

    /// Put one copy back on the shelf and return the updated record.
    ///
    /// No ceiling is enforced: returning more copies than were issued is
    /// accepted.
    pub fn return_book(&mut self, id: &str) -> CatalogResult<BookRecord> {
        self.execute(CatalogCommand::ReturnBook(ReturnBook {
            book_id: BookId::new(id),
            occurred_at: Utc::now(),
        }))?;
        self.snapshot(id)
    }

    pub fn delete_book(&mut self, id: &str) -> CatalogResult<()> {
        self.execute(CatalogCommand::DeleteBook(DeleteBook {
            book_id: BookId::new(id),
            occurred_at: Utc::now(),
        }))?;
        Ok(())
    }

    pub fn search(&self, query: &str) -> Matches<'_> {
        self.catalog.search(query)
    }

    pub fn list_all(&self) -> &[BookRecord] {
        self.catalog.records()
    }

    pub fn get(&self, id: &str) -> Option<&BookRecord> {
        self.catalog.get(id)
    }

    fn snapshot(&self, id: &str) -> CatalogResult<BookRecord> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(id))
    }

    fn execute(&mut self, command: CatalogCommand) -> CatalogResult<Vec<CatalogEvent>> {
        let events = match self.catalog.execute(&command) {
            Ok(events) => events,
            Err(err) => {
                tracing::info!(
                    book_id = %err.book_id(),
                    reason = err.reason(),
                    "catalog command rejected"
                );
                return Err(err);
            }
        };

        for event in &events {
            self.sequence += 1;
            let envelope = EventEnvelope::next(self.sequence, event.clone());
            tracing::debug!(
                aggregate = *self.catalog.id(),
                version = self.catalog.version(),
                event_id = %envelope.event_id(),
                book_id = %event.book_id(),
                event_type = shelfkeep_events::Event::event_type(event),
                sequence = self.sequence,
                "catalog event applied"
            );

            // The catalog has already changed; a lost notification must not
            // turn a successful operation into a failed one.
            if let Err(err) = self.bus.publish(envelope) {
                tracing::warn!(?err, sequence = self.sequence, "failed to publish catalog event");
            }
        }

        Ok(events)
    }
}
