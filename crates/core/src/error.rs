//! Domain error model.

use thiserror::Error;

use crate::id::BookId;

/// Result type used across the domain layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// Every variant is an expected business outcome, not a system fault: the
/// catalog is left untouched whenever one of these is returned, so callers can
/// branch on the variant and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A record with this identifier is already in the catalog.
    #[error("book id already exists: {0}")]
    DuplicateId(BookId),

    /// No record matches the identifier.
    #[error("book not found: {0}")]
    NotFound(BookId),

    /// The record exists but has no copies left to issue.
    #[error("book is out of stock: {0}")]
    OutOfStock(BookId),
}

impl CatalogError {
    pub fn duplicate_id(id: impl Into<BookId>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn not_found(id: impl Into<BookId>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn out_of_stock(id: impl Into<BookId>) -> Self {
        Self::OutOfStock(id.into())
    }

    /// The identifier the failed operation was addressed to.
    pub fn book_id(&self) -> &BookId {
        match self {
            CatalogError::DuplicateId(id)
            | CatalogError::NotFound(id)
            | CatalogError::OutOfStock(id) => id,
        }
    }

    /// Stable short name, used as a structured log field.
    pub fn reason(&self) -> &'static str {
        match self {
            CatalogError::DuplicateId(_) => "duplicate_id",
            CatalogError::NotFound(_) => "not_found",
            CatalogError::OutOfStock(_) => "out_of_stock",
        }
    }
}
