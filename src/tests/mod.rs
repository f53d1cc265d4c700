//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive `TuiApp<TestBackend>` with key
//! events and assert on session state and the rendered buffer.

mod acceptance_browse;
mod acceptance_persistence;
mod acceptance_search;
