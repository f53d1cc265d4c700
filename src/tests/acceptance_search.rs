//! Substring search from the full-screen interface.

use crate::state::{Display, Mode};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

fn search(harness: &mut AcceptanceTestHarness, term: &str) {
    harness.send_char('f');
    harness.type_text(term);
    harness.send_key(KeyCode::Enter);
}

#[test]
fn test_search_lists_matches_in_order() {
    // GIVEN: Three notes, two containing "am"
    let mut harness = AcceptanceTestHarness::with_notes(&["Sam", "Tim", "Pam"]);

    // WHEN: User searches for "am"
    search(&mut harness, "am");

    // THEN: Sam and Pam are listed in ascending order, Tim is not
    assert_eq!(harness.row(0), "Search \"am\": 2 found");
    let screen = harness.render_to_string();
    let sam = screen.find("Message: Sam").expect("Sam listed");
    let pam = screen.find("Message: Pam").expect("Pam listed");
    assert!(sam < pam);
    assert!(!screen.contains("Message: Tim"));
    assert!(screen.contains("NoteNum: 1"));
    assert!(screen.contains("NoteNum: 3"));
}

#[test]
fn test_search_is_case_sensitive() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Sam", "Pam"]);
    search(&mut harness, "sam");
    assert_eq!(harness.session().status(), Some("Nothing found."));
}

#[test]
fn test_search_without_match_keeps_current_view() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Sam", "Tim", "Pam"]);
    harness.send_char('d');

    search(&mut harness, "zz");

    assert_eq!(harness.row(23), "Nothing found.");
    assert_eq!(*harness.session().display(), Display::Note);
    assert_eq!(harness.row(1), "Sam");
}

#[test]
fn test_search_on_empty_store_does_not_prompt() {
    let mut harness = AcceptanceTestHarness::with_notes(&[]);
    harness.send_char('f');

    assert!(!matches!(harness.session().mode(), Mode::Prompt(_)));
    assert_eq!(harness.session().status(), Some("Nothing to search."));
}

#[test]
fn test_repeated_search_starts_fresh() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Sam", "Tim", "Pam"]);

    search(&mut harness, "am");
    search(&mut harness, "am");

    assert_eq!(harness.row(0), "Search \"am\": 2 found");
}
