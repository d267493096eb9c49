//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the services that
//! need it. Nothing below the CLI reads process-wide environment variables, which keeps tests
//! independent of the environment they run in.

use crate::constants::DEFAULT_DATA_FILE;
use crate::error::{BookError, BookResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    data_file: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidInput` if `data_file` is empty or names an existing
    /// directory.
    pub fn new(data_file: PathBuf) -> BookResult<Self> {
        if data_file.as_os_str().is_empty() {
            return Err(BookError::InvalidInput("data file path cannot be empty".into()));
        }
        if data_file.is_dir() {
            return Err(BookError::InvalidInput(format!(
                "data file path {} is a directory",
                data_file.display()
            )));
        }

        Ok(Self { data_file })
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

/// Pick the data file from an explicit override, then an environment value, then the default.
///
/// Blank environment values are treated as unset.
pub fn resolve_data_file(override_path: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}
