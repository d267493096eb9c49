//! YAML persistence for MedBook.
//!
//! This crate provides the **wire model** of the on-disk address book and the file-backed
//! [`YamlAddressBookStorage`] that the logic layer saves through:
//! - [`document`] translates between the domain [`AddressBook`] and YAML text;
//! - [`file`] reads and writes that text at a configured path.
//!
//! Loading is strict. Unknown keys, wrong types, invalid field values and duplicate records
//! are all reported with the record and field they were found in; nothing is defaulted.
//!
//! [`AddressBook`]: medbook_core::AddressBook

pub mod document;
pub mod file;

pub use document::AddressBookDocument;
pub use file::YamlAddressBookStorage;

use medbook_core::BookError;
use medbook_types::FieldError;
use std::path::PathBuf;

/// Errors returned by the storage crate.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create data directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("address book schema mismatch at {path}: {message}")]
    Schema { path: String, message: String },

    #[error("invalid value at records[{index}].{field}: {source}")]
    InvalidField {
        index: usize,
        field: &'static str,
        source: FieldError,
    },

    #[error("invalid shortcut '{alias}': {source}")]
    InvalidShortcut { alias: String, source: BookError },

    #[error("records[{index}] duplicates an earlier record (same name and phone)")]
    DuplicateRecord { index: usize },

    #[error("failed to serialise address book: {0}")]
    Serialise(#[from] serde_yaml::Error),
}

/// Type alias for Results that can fail with a [`StorageError`].
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for BookError {
    fn from(err: StorageError) -> Self {
        BookError::Storage(err.to_string())
    }
}
