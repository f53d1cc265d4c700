//! Terminote
//!
//! Note taking from the terminal: one-shot pipe commands, or a full-screen
//! interface for browsing, writing, searching and deleting notes.
//!
//! Pure Core / Impure Shell: `model`, `store`, `view_state` and `state` are
//! plain data and transitions; `view`, `cli`, `config` and `logging` touch
//! the terminal, stdio, environment and filesystem.

pub mod cli;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
