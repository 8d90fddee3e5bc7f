use serde::{Deserialize, Serialize};

use shelfkeep_core::BookId;

/// Availability of a book, derived from its quantity on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Available,
    OutOfStock,
}

impl Availability {
    pub fn from_quantity(quantity: u64) -> Self {
        if quantity > 0 {
            Availability::Available
        } else {
            Availability::OutOfStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::OutOfStock => "Out of Stock",
        }
    }
}

impl core::fmt::Display for Availability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry.
///
/// `quantity` counts the copies currently on the shelf. There is no separate
/// "copies owned" figure, so a return is never checked against an upper bound.
/// Stock is added as `u32` but held as `u64`: one-at-a-time returns on top of
/// any starting stock cannot reach the `u64` ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    id: BookId,
    title: String,
    author: String,
    quantity: u64,
}

impl BookRecord {
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            quantity,
        }
    }

    pub fn book_id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn status(&self) -> Availability {
        Availability::from_quantity(self.quantity)
    }

    pub fn is_available(&self) -> bool {
        self.status() == Availability::Available
    }

    /// Whether `needle` (already lowercased) occurs in the id, title or author,
    /// ignoring case.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.id.as_str().to_lowercase().contains(needle)
    }

    pub(crate) fn take_copy(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }

    pub(crate) fn put_back_copy(&mut self) {
        self.quantity += 1;
    }
}
