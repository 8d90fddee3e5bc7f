//! Form submissions dispatched against the catalog store.
//!
//! Every outcome, good or bad, comes back as a [`Toast`]; a catalog error is
//! an expected result here, not a failure of the console.

use shelfkeep_catalog::{BookRecord, CatalogEnvelope, CatalogStore, Matches};
use shelfkeep_core::CatalogError;
use shelfkeep_events::Subscription;

use crate::forms::Submission;
use crate::notify::Toast;
use crate::types::ActivityEntry;

/// Session state: the store plus the activity observed on its event stream.
#[derive(Debug)]
pub struct AppState {
    store: CatalogStore,
    events: Subscription<CatalogEnvelope>,
    activity: Vec<ActivityEntry>,
}

impl AppState {
    pub fn new(store: CatalogStore) -> Self {
        let events = store.subscribe();
        Self {
            store,
            events,
            activity: Vec::new(),
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn list_all(&self) -> &[BookRecord] {
        self.store.list_all()
    }

    pub fn search(&self, query: &str) -> Matches<'_> {
        self.store.search(query)
    }

    /// Catalog changes made during this session, oldest first.
    pub fn activity(&mut self) -> &[ActivityEntry] {
        self.collect_activity();
        &self.activity
    }

    pub fn submit(&mut self, submission: Submission) -> Toast {
        let toast = match submission {
            Submission::AddBook {
                id,
                title,
                author,
                quantity,
            } => self.add_book(id, title, author, quantity),
            Submission::IssueBook { id, student } => self.issue_book(&id, &student),
            Submission::ReturnBook { id } => self.return_book(&id),
            Submission::DeleteBook { id } => self.delete_book(&id),
        };
        self.collect_activity();
        toast
    }

    fn add_book(&mut self, id: String, title: String, author: String, quantity: u32) -> Toast {
        match self.store.add_book(id, title, author, quantity) {
            Ok(()) => Toast::success("Success: New book added to library."),
            Err(CatalogError::DuplicateId(_)) => Toast::error("Error: Book ID already exists!"),
            Err(err) => unexpected(err),
        }
    }

    fn issue_book(&mut self, id: &str, student: &str) -> Toast {
        match self.store.issue_book(id, student) {
            Ok(book) => Toast::success(format!(
                "Success: Issued '{}' to {}.",
                book.title(),
                student
            )),
            Err(CatalogError::NotFound(_)) => Toast::error("Error: Book ID not found."),
            Err(CatalogError::OutOfStock(_)) => {
                Toast::error("Error: Book is currently out of stock.")
            }
            Err(err) => unexpected(err),
        }
    }

    fn return_book(&mut self, id: &str) -> Toast {
        match self.store.return_book(id) {
            Ok(_) => Toast::success("Success: Book returned safely."),
            Err(CatalogError::NotFound(_)) => Toast::error("Error: Book ID not found."),
            Err(err) => unexpected(err),
        }
    }

    fn delete_book(&mut self, id: &str) -> Toast {
        match self.store.delete_book(id) {
            Ok(()) => Toast::success("Success: Book entry deleted."),
            Err(CatalogError::NotFound(_)) => Toast::error("Error: Could not find book to delete."),
            Err(err) => unexpected(err),
        }
    }

    fn collect_activity(&mut self) {
        let received = self.events.drain();
        self.activity.extend(received.iter().map(ActivityEntry::from));
    }
}

// The store only returns the variants matched above for each operation; this
// keeps the match total without panicking if that ever changes.
fn unexpected(err: CatalogError) -> Toast {
    tracing::warn!(%err, "unexpected catalog outcome");
    Toast::error(format!("Error: {err}."))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(CatalogStore::seeded().unwrap())
    }

    #[test]
    fn issue_toast_names_title_and_student() {
        let mut state = state();
        let toast = state.submit(Submission::IssueBook {
            id: "B-102".to_string(),
            student: "Alice".to_string(),
        });
        assert!(toast.is_success());
        assert_eq!(toast.message, "Success: Issued 'Clean Code' to Alice.");
    }

    #[test]
    fn out_of_stock_and_missing_ids_map_to_distinct_messages() {
        let mut state = state();

        let out = state.submit(Submission::IssueBook {
            id: "B-103".to_string(),
            student: "Alice".to_string(),
        });
        assert_eq!(out, Toast::error("Error: Book is currently out of stock."));

        let missing = state.submit(Submission::ReturnBook {
            id: "Z-1".to_string(),
        });
        assert_eq!(missing, Toast::error("Error: Book ID not found."));

        let delete = state.submit(Submission::DeleteBook {
            id: "Z-1".to_string(),
        });
        assert_eq!(delete, Toast::error("Error: Could not find book to delete."));
    }

    #[test]
    fn duplicate_add_is_reported() {
        let mut state = state();
        let toast = state.submit(Submission::AddBook {
            id: "B-101".to_string(),
            title: "Copy".to_string(),
            author: "Someone".to_string(),
            quantity: 1,
        });
        assert_eq!(toast, Toast::error("Error: Book ID already exists!"));
        assert_eq!(state.list_all().len(), 4);
    }

    #[test]
    fn activity_records_only_successful_changes() {
        let mut state = state();
        state.submit(Submission::ReturnBook {
            id: "B-103".to_string(),
        });
        state.submit(Submission::DeleteBook {
            id: "nope".to_string(),
        });
        state.submit(Submission::IssueBook {
            id: "B-103".to_string(),
            student: "Bob".to_string(),
        });

        let activity = state.activity();
        assert_eq!(activity.len(), 2);
        assert_eq!(activity[0].event_type, "catalog.book.returned");
        assert_eq!(activity[1].summary, "issued 'Introduction to Algorithms' to Bob");
        assert_eq!(activity[1].sequence, 2);
    }
}
