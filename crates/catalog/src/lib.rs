//! Catalog domain module.
//!
//! Business rules for the book inventory, implemented as deterministic
//! in-memory logic (no IO, no terminal, no storage).

pub mod book;
pub mod catalog;
pub mod seed;
pub mod store;

pub use book::{Availability, BookRecord};
pub use catalog::{
    AddBook, BookAdded, BookDeleted, BookIssued, BookReturned, Catalog, CatalogCommand,
    CatalogEvent, DeleteBook, IssueBook, Matches, ReturnBook,
};
pub use seed::seed_records;
pub use store::{CatalogEnvelope, CatalogStore};
