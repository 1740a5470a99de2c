//! Environment-driven configuration.
//!
//! Options are read from process environment variables, after loading a
//! `.env` file from the working directory (or any parent) when one exists.

use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("environment variable `{name}` holds malformed value {value:?}")]
    Malformed { name: &'static str, value: String },
}

/// Loads the `.env` file, if any. A missing file is not an error.
pub(crate) fn load() {
    if let Ok(path) = dotenv::dotenv() {
        log::debug!("Loaded environment from {}", path.display());
    }
}

/// Parses the variable `name`, returning `None` when it is unset.
pub(crate) fn read<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Malformed { name, value }),
        Err(_) => Ok(None),
    }
}
