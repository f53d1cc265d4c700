//! Browsing: the root summary, note headers and clamped navigation.

use crate::model::SequenceNumber;
use crate::store::Cursor;
use crate::test_harness::{AcceptanceTestHarness, FIXTURE_TIME};
use crate::view::title;
use crossterm::event::{KeyCode, KeyModifiers};

fn note(n: usize) -> Cursor {
    Cursor::Note(SequenceNumber::from_index(n - 1))
}

#[test]
fn test_root_shows_title_and_note_count() {
    // GIVEN: Two stored notes
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk", "Call Sam"]);

    // WHEN: The first frame is drawn
    let screen = harness.render_to_string();

    // THEN: Header carries the title, body the summary, footer the menu
    assert_eq!(harness.row(0), title());
    assert!(screen.contains("You have 2 notes stored."), "screen:\n{screen}");
    let footer = harness.row(23);
    for label in ["New", "Browse", "Edit", "Search", "Quit", "Help"] {
        assert!(footer.contains(label), "footer missing {label}: {footer:?}");
    }
}

#[test]
fn test_empty_store_summary() {
    let mut harness = AcceptanceTestHarness::with_notes(&[]);
    let screen = harness.render_to_string();
    assert!(screen.contains("You have 0 notes stored."));
}

#[test]
fn test_next_shows_note_with_header() {
    // GIVEN: Two notes, cursor at the root
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk", "Call Sam"]);

    // WHEN: User presses 'd'
    harness.send_char('d');

    // THEN: Note #1 is shown with origin, number and time in the header
    assert_eq!(harness.session().cursor(), note(1));
    let header = harness.row(0);
    assert!(header.starts_with("/home/test"), "header: {header:?}");
    assert!(header.contains("Note #1"), "header: {header:?}");
    assert!(header.ends_with(FIXTURE_TIME), "header: {header:?}");
    assert_eq!(harness.row(1), "Buy milk");
}

#[test]
fn test_next_clamps_at_last_note() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk", "Call Sam"]);

    harness.send_char('d');
    harness.send_char('d');
    harness.send_char('d');

    assert_eq!(harness.session().cursor(), note(2));
    assert_eq!(harness.row(1), "Call Sam");
}

#[test]
fn test_previous_returns_to_root_and_stays() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk", "Call Sam"]);
    harness.send_char('d');

    harness.send_char('a');
    assert_eq!(harness.session().cursor(), Cursor::Root);

    harness.send_char('a');
    assert_eq!(harness.session().cursor(), Cursor::Root);
    assert_eq!(harness.row(0), title());
}

#[test]
fn test_navigation_on_empty_store_stays_at_root() {
    let mut harness = AcceptanceTestHarness::with_notes(&[]);

    harness.send_char('d');
    harness.send_char('a');

    assert_eq!(harness.session().cursor(), Cursor::Root);
    assert!(harness.render_to_string().contains("You have 0 notes stored."));
}

#[test]
fn test_print_all_lists_every_note() {
    // GIVEN: Two notes
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk", "Call Sam"]);

    // WHEN: User presses 'e'
    harness.send_char('e');

    // THEN: Both records are listed in order under a listing title
    assert_eq!(harness.row(0), "All notes (2)");
    let screen = harness.render_to_string();
    let first = screen.find("Message: Buy milk").expect("first note listed");
    let second = screen.find("Message: Call Sam").expect("second note listed");
    assert!(first < second);
    assert!(screen.contains("NoteNum: 2"));
}

#[test]
fn test_print_all_on_empty_store_reports() {
    let mut harness = AcceptanceTestHarness::with_notes(&[]);
    harness.send_char('e');
    assert_eq!(harness.session().status(), Some("Nothing to print."));
    assert_eq!(harness.row(23), "Nothing to print.");
}

#[test]
fn test_navigating_from_listing_shows_a_note_again() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk", "Call Sam"]);
    harness.send_char('e');

    harness.send_char('d');

    assert_eq!(harness.session().cursor(), note(1));
    assert!(harness.row(0).contains("Note #1"));
}

#[test]
fn test_status_clears_on_next_key() {
    let mut harness = AcceptanceTestHarness::with_notes(&[]);
    harness.send_char('e');
    assert!(harness.session().status().is_some());

    harness.send_char('d');

    assert_eq!(harness.session().status(), None);
}

#[test]
fn test_q_quits() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk"]);
    assert!(harness.send_char('q'));
    assert!(!harness.is_running());
}

#[test]
fn test_ctrl_c_quits() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk"]);
    assert!(harness.send_key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!harness.is_running());
}

#[test]
fn test_unbound_key_is_ignored() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk"]);
    assert!(!harness.send_char('z'));
    assert_eq!(harness.session().cursor(), Cursor::Root);
}
