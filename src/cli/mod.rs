//! Command-line surface.
//!
//! - `args`: clap arguments and the [`Command`] they select
//! - `pipe`: one-shot commands against the data file

pub mod args;
pub mod pipe;

pub use args::{Args, Command};
pub use pipe::{run_pipe, Outcome, PipeOptions};

use crate::config::ResolvedConfig;
use crate::model::{current_origin, AppError, MalformedRecord};
use crate::store::codec;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

/// Load the data file, run `command`, and save if anything changed.
///
/// Malformed records are skipped. Pipe commands list them on stderr; the
/// full-screen interface summarizes them in its first status line.
///
/// # Errors
///
/// I/O failures on the data file, the terminal or stdio.
pub fn execute(
    command: Command,
    config: &ResolvedConfig,
    data_path: &Path,
) -> Result<ExitCode, AppError> {
    let loaded = codec::load(data_path)?;
    let mut store = loaded.store;

    if command == Command::Interactive {
        let notice = malformed_notice(&loaded.malformed);
        crate::view::run_interactive(store, config, data_path.to_path_buf(), notice)?;
        return Ok(ExitCode::SUCCESS);
    }

    if !loaded.malformed.is_empty() {
        let mut stderr = io::stderr().lock();
        for record in &loaded.malformed {
            writeln!(stderr, "{record}")?;
        }
    }

    debug!(?command, mutating = command.mutates(), "Running pipe command");
    let options = PipeOptions {
        max_note_len: config.max_note_len,
        origin: current_origin(),
    };
    let outcome = run_pipe(
        &command,
        &mut store,
        &options,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if outcome.modified {
        codec::save(data_path, &store)?;
        info!(path = %data_path.display(), notes = store.count(), "Saved");
    }

    Ok(outcome.exit_code())
}

/// One status line summing up skipped records, or `None` if there were none.
fn malformed_notice(malformed: &[MalformedRecord]) -> Option<String> {
    match malformed {
        [] => None,
        [record] => Some(format!("{record}.")),
        [first, ..] => Some(format!(
            "Skipped {} malformed records, the first at line {}.",
            malformed.len(),
            first.line
        )),
    }
}
