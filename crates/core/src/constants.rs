//! Constants used throughout the MedBook crates.

/// Data file used when neither the command line nor the environment names one.
pub const DEFAULT_DATA_FILE: &str = "data/medbook.yaml";

/// Environment variable that overrides the data file location.
pub const DATA_FILE_ENV: &str = "MEDBOOK_DATA_FILE";
