//! Drives whole console sessions over in-memory input and output.

use std::io::Cursor;

use shelfkeep_catalog::CatalogStore;
use shelfkeep_console::{AppState, OutputFormat, Session};

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

fn run_session(store: CatalogStore, script: &str, format: OutputFormat) -> (String, TestSession) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut session = Session::new(AppState::new(store), input, Vec::new(), format);
    session.run().expect("session should not fail");
    let output = String::from_utf8(session.output().clone()).unwrap();
    (output, session)
}

fn seeded() -> CatalogStore {
    CatalogStore::seeded().unwrap()
}

fn quantity_of(session: &TestSession, id: &str) -> Option<u64> {
    session.state().store().get(id).map(|b| b.quantity())
}

#[test]
fn startup_renders_the_seed_table() {
    let (output, _) = run_session(seeded(), "quit\n", OutputFormat::Table);

    assert!(output.starts_with("ID    | Title"));
    assert!(output.contains("B-103 | Introduction to Algorithms | Thomas H. Cormen    | 0   | Out of Stock"));
    assert!(output.contains("B-101 | The Great Gatsby"));
}

#[test]
fn seed_scenario_through_the_console() {
    let script = "\
issue B-103 | Alice
return B-103
issue B-103 | Alice
delete B-102
list
quit
";
    let (output, session) = run_session(seeded(), script, OutputFormat::Table);

    assert!(output.contains("[!!] Error: Book is currently out of stock."));
    assert!(output.contains("[ok] Success: Book returned safely."));
    assert!(output.contains("[ok] Success: Issued 'Introduction to Algorithms' to Alice."));
    assert!(output.contains("[ok] Success: Book entry deleted."));

    assert_eq!(quantity_of(&session, "B-103"), Some(0));
    assert_eq!(session.state().list_all().len(), 3);
    assert!(quantity_of(&session, "B-102").is_none());
}

#[test]
fn add_form_prompts_for_missing_fields_and_revalidates() {
    let script = "\
add B-105 | Dune
Frank Herbert
-2
3
quit
";
    let (output, session) = run_session(seeded(), script, OutputFormat::Table);

    assert!(output.contains("Author: "));
    assert!(output.contains("Quantity: "));
    assert!(output.contains("[!!] Error: Quantity must be a whole number of 0 or more."));
    assert!(output.contains("[ok] Success: New book added to library."));
    assert_eq!(quantity_of(&session, "B-105"), Some(3));

    // New records go to the end of the table.
    let last = session.state().list_all().last().unwrap();
    assert_eq!(last.title(), "Dune");
}

#[test]
fn duplicate_id_is_reported_and_catalog_unchanged() {
    let (output, session) = run_session(
        seeded(),
        "add B-101 | Another | Someone | 1\nquit\n",
        OutputFormat::Table,
    );

    assert!(output.contains("[!!] Error: Book ID already exists!"));
    assert_eq!(session.state().list_all().len(), 4);
    assert_eq!(session.state().store().get("B-101").unwrap().title(), "The Great Gatsby");
}

#[test]
fn cancel_closes_the_form_without_submitting() {
    let (output, session) = run_session(seeded(), "issue\nB-101\n:cancel\nquit\n", OutputFormat::Table);

    assert!(output.contains("Issue Book cancelled."));
    assert_eq!(quantity_of(&session, "B-101"), Some(5));
}

#[test]
fn end_of_input_inside_a_form_closes_it() {
    let (output, session) = run_session(seeded(), "delete\n", OutputFormat::Table);

    assert!(output.contains("Delete Book cancelled."));
    assert_eq!(session.state().list_all().len(), 4);
}

#[test]
fn search_filters_case_insensitively_and_reports_no_results() {
    let (output, _) = run_session(
        CatalogStore::seeded().unwrap(),
        "search GAMMA\nsearch nothing-matches\nquit\n",
        OutputFormat::Table,
    );

    assert!(output.contains("B-104 | Design Patterns | Erich Gamma | 3   | Available"));
    assert!(output.contains("No books found in records."));
}

#[test]
fn empty_catalog_shows_placeholder_and_unknown_ids_fail() {
    let (output, _) = run_session(
        CatalogStore::new(),
        "return B-1\ndelete B-1\nquit\n",
        OutputFormat::Table,
    );

    assert!(output.starts_with("No books found in records."));
    assert!(output.contains("[!!] Error: Book ID not found."));
    assert!(output.contains("[!!] Error: Could not find book to delete."));
}

#[test]
fn json_output_and_activity_log() {
    let (output, _) = run_session(
        seeded(),
        "issue B-101 | Bob\nsearch clean\nactivity\nquit\n",
        OutputFormat::Json,
    );

    assert!(output.contains("\"title\": \"Clean Code\""));
    assert!(output.contains("\"event_type\": \"catalog.book.issued\""));
    assert!(output.contains("\"summary\": \"issued 'The Great Gatsby' to Bob\""));
}

#[test]
fn unknown_commands_point_to_help() {
    let (output, _) = run_session(seeded(), "borrow B-101\nhelp\nquit\n", OutputFormat::Table);

    assert!(output.contains("[!!] Error: Unknown command 'borrow'. Type help."));
    assert!(output.contains("Commands:"));
}

#[test]
fn search_query_keeps_its_trailing_space() {
    let (output, _) = run_session(seeded(), "search t \nquit\n", OutputFormat::Table);
    let search = output.split("> ").nth(1).unwrap();

    assert!(search.contains("B-101 | The Great Gatsby"));
    assert!(search.contains("B-102 | Clean Code"));
    assert!(!search.contains("B-103"));
    assert!(!search.contains("B-104"));
}

#[test]
fn extra_inline_values_reject_the_form() {
    let (output, session) = run_session(
        seeded(),
        "issue B-101 | Alice | junk\nquit\n",
        OutputFormat::Table,
    );

    assert!(output.contains("[!!] Error: Issue Book takes at most 2 values, got 3."));
    assert!(!output.contains("Success"));
    assert_eq!(quantity_of(&session, "B-101"), Some(5));
    assert_eq!(session.state().list_all().len(), 4);
}

#[test]
fn oversized_quantity_is_reprompted_with_its_own_message() {
    let (output, session) = run_session(
        seeded(),
        "add B-106 | Dune | Frank Herbert | 4294967296\n2\nquit\n",
        OutputFormat::Table,
    );

    assert!(output.contains("[!!] Error: Quantity must be at most 4294967295."));
    assert!(output.contains("[ok] Success: New book added to library."));
    assert_eq!(quantity_of(&session, "B-106"), Some(2));
}
