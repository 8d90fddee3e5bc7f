//! Adapter-level errors (terminal and form handling).
//!
//! Catalog outcomes are never represented here: they are turned into
//! notifications by [`crate::commands`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    /// A form field was left blank or could not be parsed.
    #[error("{field} {problem}")]
    InvalidField {
        field: &'static str,
        problem: &'static str,
    },

    /// More inline values were given than the form has fields.
    #[error("{form} takes at most {expected} values, got {given}")]
    TooManyValues {
        form: &'static str,
        expected: usize,
        given: usize,
    },
}

impl ConsoleError {
    pub fn invalid_field(field: &'static str, problem: &'static str) -> Self {
        Self::InvalidField { field, problem }
    }
}
