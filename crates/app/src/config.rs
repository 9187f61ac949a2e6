use std::path::PathBuf;
use std::time::Duration;

use services::DEFAULT_SETTLE_DELAY;
use storage::DEFAULT_DATA_PATH;
use thiserror::Error;

pub const DATA_PATH_VAR: &str = "QUIZ_DATA_PATH";
pub const SETTLE_MS_VAR: &str = "QUIZ_SETTLE_MS";

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("QUIZ_DATA_PATH must not be empty")]
    EmptyDataPath,

    #[error("invalid QUIZ_SETTLE_MS value: {raw}")]
    InvalidSettleMs { raw: String },

    #[error("unknown argument: {0}")]
    UnknownArg(String),
}

/// Startup settings, read once from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub settle_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyDataPath` for a blank path and
    /// `ConfigError::InvalidSettleMs` when the delay is not a whole number of
    /// milliseconds.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DATA_PATH_VAR) {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyDataPath);
            }
            config.data_path = PathBuf::from(trimmed);
        }

        if let Some(raw) = lookup(SETTLE_MS_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSettleMs { raw: raw.clone() })?;
            config.settle_delay = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

/// What the command line asked for. Only `--help` is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Launch,
    Help,
}

/// # Errors
///
/// Returns `ConfigError::UnknownArg` for anything other than `--help`/`-h`.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, ConfigError> {
    let mut command = Command::Launch;
    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => command = Command::Help,
            _ => return Err(ConfigError::UnknownArg(arg)),
        }
    }
    Ok(command)
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app [-- --help]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DATA_PATH_VAR}   question file (default {DEFAULT_DATA_PATH})");
    eprintln!(
        "  {SETTLE_MS_VAR}   pause after scoring, in ms (default {})",
        DEFAULT_SETTLE_DELAY.as_millis()
    );
    eprintln!("  RUST_LOG         log filter");
}
