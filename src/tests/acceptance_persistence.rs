//! Saving the store from the full-screen interface.

use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::io;

fn write_note(harness: &mut AcceptanceTestHarness, text: &str) {
    harness.send_char('w');
    harness.type_text(text);
    harness.send_key(KeyCode::Enter);
}

#[test]
fn test_changes_are_saved_on_exit() {
    // GIVEN: A session that appended a note
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk"]);
    write_note(&mut harness, "Call Sam");
    assert_eq!(harness.saved_bodies(), None, "nothing saved before exit");

    // WHEN: The user quits
    assert!(harness.send_char('q'));
    harness.finish();

    // THEN: Both notes are on disk in order
    assert_eq!(
        harness.saved_bodies(),
        Some(vec!["Buy milk".to_string(), "Call Sam".to_string()])
    );
}

fn typed(text: &str) -> Vec<io::Result<Event>> {
    text.chars()
        .map(|ch| Ok(Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))))
        .collect()
}

fn enter() -> io::Result<Event> {
    Ok(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
}

#[test]
fn test_unsaved_note_is_written_when_the_event_loop_fails() {
    // GIVEN: A session that saves only on the way out
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk"]);

    // WHEN: A note is written and then the terminal stops delivering events
    let mut events = typed("w");
    events.extend(typed("Call Sam"));
    events.push(enter());
    events.push(Err(io::Error::other("terminal lost")));
    let result = harness.run_events(events);

    // THEN: The failure is reported and the note still reached the disk
    assert!(result.is_err());
    assert_eq!(
        harness.saved_bodies(),
        Some(vec!["Buy milk".to_string(), "Call Sam".to_string()])
    );
}

#[test]
fn test_event_loop_saves_on_quit() {
    let mut harness = AcceptanceTestHarness::with_notes(&[]);

    let mut events = typed("w");
    events.extend(typed("Call Sam"));
    events.push(enter());
    events.extend(typed("q"));

    assert!(harness.run_events(events).is_ok());
    assert_eq!(harness.saved_bodies(), Some(vec!["Call Sam".to_string()]));
}

#[test]
fn test_unchanged_session_does_not_write() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk"]);
    harness.send_char('d');
    harness.send_char('e');
    harness.send_char('q');

    harness.finish();

    assert!(!harness.data_path().exists());
}

#[test]
fn test_deletions_are_saved() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk", "Call Sam"]);
    harness.send_char('d');
    harness.send_char('c');
    harness.send_char('y');
    harness.send_char('q');

    harness.finish();

    assert_eq!(harness.saved_bodies(), Some(vec!["Call Sam".to_string()]));
}

#[test]
fn test_delete_all_saves_an_empty_store() {
    let mut harness = AcceptanceTestHarness::with_notes(&["Buy milk", "Call Sam"]);
    harness.send_char('g');
    harness.send_char('y');

    harness.finish();

    assert_eq!(harness.saved_bodies(), Some(Vec::new()));
}

#[test]
fn test_save_on_change_writes_immediately() {
    // GIVEN: A session configured to save after every change
    let mut harness = AcceptanceTestHarness::saving_on_change(&[]);

    // WHEN: A note is written, without quitting
    write_note(&mut harness, "Buy milk");

    // THEN: It is already on disk
    assert_eq!(harness.saved_bodies(), Some(vec!["Buy milk".to_string()]));
    assert!(harness.is_running());
}

#[test]
fn test_cancelled_prompt_is_not_a_change() {
    let mut harness = AcceptanceTestHarness::saving_on_change(&["Buy milk"]);
    harness.send_char('w');
    harness.type_text("draft");
    harness.send_key(KeyCode::Esc);

    harness.finish();

    assert!(!harness.data_path().exists());
}

#[test]
fn test_skipped_records_are_announced_on_the_first_frame() {
    // GIVEN: A data file that had a record skipped while loading
    let notice = "Skipped malformed record at line 1: expected value.";
    let mut harness = AcceptanceTestHarness::with_notice(&["Buy milk"], notice);

    // THEN: The first frame says so in the status line
    assert_eq!(harness.row(23), notice);

    // WHEN: The user presses a key, the notice goes away
    harness.send_char('d');
    assert_eq!(harness.session().status(), None);
}
