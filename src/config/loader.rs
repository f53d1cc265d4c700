//! Config file, environment and CLI settings, merged in a fixed order.
//!
//! Defaults < config file < `TERMINOTE_DATA` < `--data-file`.

use crate::model::DEFAULT_MAX_NOTE_LEN;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "TERMINOTE_CONFIG";

/// Environment variable overriding the data file path.
pub const DATA_ENV_VAR: &str = "TERMINOTE_DATA";

/// File name of the data file inside the home directory.
pub const DATA_FILE_NAME: &str = "terminote.data";

/// Why the config file could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Config file path.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// Bad TOML, a wrong value type, or an unknown key.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Config file path.
        path: PathBuf,
        /// What toml reported.
        reason: String,
    },

    /// No data file was configured and the home directory is unknown.
    #[error("Cannot locate the home directory; set {DATA_ENV_VAR} or pass --data-file")]
    HomeDirectoryUnavailable,
}

/// Contents of `config.toml`. Every key may be left out.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Where notes are stored.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Longest accepted note body, in characters.
    #[serde(default)]
    pub max_note_len: Option<usize>,

    /// Where tracing output goes.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Save after every change in the interactive interface.
    #[serde(default)]
    pub save_on_change: Option<bool>,
}

/// Settings after every source has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Data file path. `None` means "derive from the home directory".
    pub data_file: Option<PathBuf>,
    /// Longest accepted note body, in characters.
    pub max_note_len: usize,
    /// Where tracing output goes.
    pub log_file_path: PathBuf,
    /// Save after every change in the interactive interface.
    pub save_on_change: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            max_note_len: DEFAULT_MAX_NOTE_LEN,
            log_file_path: default_log_path(),
            save_on_change: true,
        }
    }
}

impl ResolvedConfig {
    /// The data file to read and write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HomeDirectoryUnavailable`] when nothing set a
    /// path explicitly and the home directory cannot be determined.
    pub fn data_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => default_data_path().ok_or(ConfigError::HomeDirectoryUnavailable),
        }
    }
}

/// `$HOME/terminote.data`, or `None` without a home directory.
pub fn default_data_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_FILE_NAME))
}

/// `<state_dir>/terminote/terminote.log`.
///
/// Platforms without a state directory use the local data directory, and
/// failing that a file in the working directory.
pub fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("terminote").join("terminote.log"))
        .unwrap_or_else(|| PathBuf::from("terminote.log"))
}

/// Read and parse one config file. A file that does not exist is `Ok(None)`.
///
/// # Errors
///
/// [`ConfigError::ReadError`] or [`ConfigError::ParseError`] for a file that
/// exists but cannot be used.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ReadError {
                path,
                reason: e.to_string(),
            })
        }
    };

    toml::from_str(&contents)
        .map(Some)
        .map_err(|e| ConfigError::ParseError {
            path,
            reason: e.to_string(),
        })
}

/// `<config_dir>/terminote/config.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("terminote").join("config.toml"))
}

/// Find and load the config file.
///
/// The first of `--config`, `TERMINOTE_CONFIG` and the default path wins;
/// later candidates are not consulted even if the chosen file is missing.
///
/// # Errors
///
/// Only for a chosen file that exists and cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Fill every key the file left out with its default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        data_file: config.data_file.or(defaults.data_file),
        max_note_len: config.max_note_len.unwrap_or(defaults.max_note_len),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        save_on_change: config.save_on_change.unwrap_or(defaults.save_on_change),
    }
}

/// `TERMINOTE_DATA`, when set and non-empty, replaces the data file path.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(path) = std::env::var_os(DATA_ENV_VAR).filter(|p| !p.is_empty()) {
        config.data_file = Some(PathBuf::from(path));
    }

    config
}

/// `--data-file` beats every other source.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(path) = data_file_override {
        config.data_file = Some(path);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
