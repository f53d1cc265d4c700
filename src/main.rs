//! Terminote - Entry Point

use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use terminote::cli::{self, Args};
use terminote::config::{self, ResolvedConfig};
use terminote::model::AppError;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Fatal");
            eprintln!("terminote: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = resolve_config(&args)?;

    // Initialize tracing with configured log file path. Notes matter more
    // than logs, so a log file that cannot be opened is only a warning.
    if let Err(e) = terminote::logging::init(&config.log_file_path) {
        eprintln!("terminote: warning: {e}; continuing without a log file");
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let data_path = config.data_path()?;
    let command = args.command(std::io::stdin().is_terminal());

    cli::execute(command, &config, &data_path)
}

fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let merged = config::merge_config(config_file);
    let with_env = config::apply_env_overrides(merged);
    Ok(config::apply_cli_overrides(with_env, args.data_file.clone()))
}
