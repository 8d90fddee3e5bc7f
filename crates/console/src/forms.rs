//! Input forms: which fields each catalog operation collects, and how raw
//! text becomes a validated submission.

use std::num::IntErrorKind;

use crate::error::ConsoleError;

/// Typed at any prompt to close the open form without submitting.
pub const CANCEL: &str = ":cancel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// A whole number of copies, 0 or more.
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    const fn text(label: &'static str) -> Self {
        Self {
            label,
            kind: FieldKind::Text,
        }
    }

    /// Check a raw entry; returns the trimmed value on success.
    ///
    /// Every field is required, mirroring a form that refuses to submit
    /// while a field is blank.
    pub fn validate(&self, raw: &str) -> Result<String, ConsoleError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ConsoleError::invalid_field(self.label, "is required"));
        }
        if self.kind == FieldKind::Quantity {
            parse_quantity(self.label, value)?;
        }
        Ok(value.to_string())
    }
}

fn parse_quantity(label: &'static str, value: &str) -> Result<u32, ConsoleError> {
    value.trim().parse::<u32>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => ConsoleError::invalid_field(label, "must be at most 4294967295"),
        _ => ConsoleError::invalid_field(label, "must be a whole number of 0 or more"),
    })
}

const BOOK_ID: Field = Field::text("Book ID");

const ADD_FIELDS: [Field; 4] = [
    BOOK_ID,
    Field::text("Title"),
    Field::text("Author"),
    Field {
        label: "Quantity",
        kind: FieldKind::Quantity,
    },
];
const ISSUE_FIELDS: [Field; 2] = [BOOK_ID, Field::text("Student Name")];
const ID_ONLY: [Field; 1] = [BOOK_ID];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    AddBook,
    IssueBook,
    ReturnBook,
    DeleteBook,
}

impl FormKind {
    pub fn title(&self) -> &'static str {
        match self {
            FormKind::AddBook => "Add New Book",
            FormKind::IssueBook => "Issue Book",
            FormKind::ReturnBook => "Return Book",
            FormKind::DeleteBook => "Delete Book",
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormKind::AddBook => &ADD_FIELDS,
            FormKind::IssueBook => &ISSUE_FIELDS,
            FormKind::ReturnBook | FormKind::DeleteBook => &ID_ONLY,
        }
    }

    /// Refuse inline values beyond the form's last field.
    pub fn check_inline(&self, inline: &[String]) -> Result<(), ConsoleError> {
        let expected = self.fields().len();
        if inline.len() > expected {
            return Err(ConsoleError::TooManyValues {
                form: self.title(),
                expected,
                given: inline.len(),
            });
        }
        Ok(())
    }
}

/// A completed, validated form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    AddBook {
        id: String,
        title: String,
        author: String,
        quantity: u32,
    },
    IssueBook {
        id: String,
        student: String,
    },
    ReturnBook {
        id: String,
    },
    DeleteBook {
        id: String,
    },
}

impl Submission {
    /// Build a submission from raw values given in field order.
    ///
    /// Each value goes through [`Field::validate`]; a missing value counts as
    /// blank.
    pub fn from_values(kind: FormKind, values: &[String]) -> Result<Self, ConsoleError> {
        let mut checked = Vec::with_capacity(kind.fields().len());
        for (i, field) in kind.fields().iter().enumerate() {
            let raw = values.get(i).map(String::as_str).unwrap_or("");
            checked.push(field.validate(raw)?);
        }
        let mut values = checked.into_iter();
        let mut next = || values.next().unwrap_or_default();

        let submission = match kind {
            FormKind::AddBook => {
                let id = next();
                let title = next();
                let author = next();
                let quantity = parse_quantity("Quantity", &next())?;
                Submission::AddBook {
                    id,
                    title,
                    author,
                    quantity,
                }
            }
            FormKind::IssueBook => Submission::IssueBook {
                id: next(),
                student: next(),
            },
            FormKind::ReturnBook => Submission::ReturnBook { id: next() },
            FormKind::DeleteBook => Submission::DeleteBook { id: next() },
        };
        Ok(submission)
    }
}

/// Split inline form values (`add B-1 | Dune | Frank Herbert | 3`).
pub fn split_inline(rest: &str) -> Vec<String> {
    if rest.trim().is_empty() {
        return Vec::new();
    }
    rest.split('|').map(|part| part.trim().to_string()).collect()
}
