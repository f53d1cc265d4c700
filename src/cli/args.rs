//! Command-line arguments and the validated command model.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// Terminote - take notes from the terminal
#[derive(Parser, Debug)]
#[command(name = "terminote")]
#[command(version)]
#[command(about = "Take notes from the terminal, in a pipe or full screen")]
#[command(group(
    ArgGroup::new("action")
        .multiple(false)
        .args(["pop", "pop_number", "delete", "delete_all", "show", "print_all", "find", "append"])
))]
pub struct Args {
    /// Print and delete the last note
    #[arg(short = 'p', long = "pop")]
    pub pop: bool,

    /// Print and delete note N
    #[arg(short = 'n', long = "pop-number", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub pop_number: Option<u32>,

    /// Delete note N
    #[arg(short = 'd', long = "delete", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub delete: Option<u32>,

    /// Delete all notes
    #[arg(short = 'r', long = "delete-all")]
    pub delete_all: bool,

    /// Print note N
    #[arg(short = 's', long = "show", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub show: Option<u32>,

    /// Print all notes
    #[arg(short = 'c', long = "print-all")]
    pub print_all: bool,

    /// Print every note containing TEXT
    #[arg(short = 'f', long = "find", value_name = "TEXT")]
    pub find: Option<String>,

    /// Append TEXT as a new note
    #[arg(short = 'a', long = "append", value_name = "TEXT")]
    pub append: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to the data file (overrides config and TERMINOTE_DATA)
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,
}

/// One validated action per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print and delete the last note.
    Pop,
    /// Print and delete a note by number.
    PopNumber(usize),
    /// Delete a note by number.
    Delete(usize),
    /// Delete every note.
    DeleteAll,
    /// Print a note by number.
    Show(usize),
    /// Print every note.
    PrintAll,
    /// Print notes containing a substring.
    Find(String),
    /// Append the given text.
    Append(String),
    /// Append one line read from stdin.
    AppendStdin,
    /// Start the full-screen interface.
    Interactive,
}

impl Command {
    /// True for commands that may change the store.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Pop
                | Command::PopNumber(_)
                | Command::Delete(_)
                | Command::DeleteAll
                | Command::Append(_)
                | Command::AppendStdin
        )
    }
}

impl Args {
    /// The selected action.
    ///
    /// Without an action flag the choice depends on stdin: a terminal starts
    /// the full-screen interface, anything else is read as a note.
    pub fn command(&self, stdin_is_terminal: bool) -> Command {
        let number = |n: u32| n as usize;

        if self.pop {
            Command::Pop
        } else if let Some(n) = self.pop_number {
            Command::PopNumber(number(n))
        } else if let Some(n) = self.delete {
            Command::Delete(number(n))
        } else if self.delete_all {
            Command::DeleteAll
        } else if let Some(n) = self.show {
            Command::Show(number(n))
        } else if self.print_all {
            Command::PrintAll
        } else if let Some(term) = &self.find {
            Command::Find(term.clone())
        } else if let Some(text) = &self.append {
            Command::Append(text.clone())
        } else if stdin_is_terminal {
            Command::Interactive
        } else {
            Command::AppendStdin
        }
    }
}
