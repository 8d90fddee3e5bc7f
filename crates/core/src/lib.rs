//! `shelfkeep-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal, no
//! logging setup).

pub mod aggregate;
pub mod error;
pub mod id;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{CatalogError, CatalogResult};
pub use id::BookId;
