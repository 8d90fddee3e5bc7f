//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use serde::{Deserialize, Serialize};

/// Identifier of a book record.
///
/// Caller-supplied text, compared case-sensitively and stored exactly as
/// given (no trimming or normalisation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&BookId> for BookId {
    fn from(value: &BookId) -> Self {
        value.clone()
    }
}

impl From<BookId> for String {
    fn from(value: BookId) -> Self {
        value.0
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BookId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BookId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_is_case_sensitive() {
        assert_ne!(BookId::new("b-101"), BookId::new("B-101"));
        assert_eq!(BookId::new("B-101"), "B-101");
    }

    #[test]
    fn whitespace_is_preserved() {
        let id = BookId::new(" B-101 ");
        assert_eq!(id.as_str(), " B-101 ");
        assert_ne!(id, BookId::new("B-101"));
    }
}
