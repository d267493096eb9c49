//! File-backed storage.

use crate::document::AddressBookDocument;
use crate::{StorageError, StorageResult};
use medbook_core::{AddressBook, AddressBookStorage, BookResult, CoreConfig};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores the address book as one YAML document at a fixed path.
#[derive(Clone, Debug)]
pub struct YamlAddressBookStorage {
    path: PathBuf,
}

impl YamlAddressBookStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(cfg: &CoreConfig) -> Self {
        Self::new(cfg.data_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the data file. A missing file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] for I/O failures other than a missing file, or any
    /// parse error from [`AddressBookDocument::parse`].
    pub fn read_book(&self) -> StorageResult<Option<AddressBook>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        AddressBookDocument::parse(&text).map(Some)
    }

    /// Renders and writes the book, creating parent directories as needed.
    ///
    /// The document is written to a sibling temporary file first and then renamed over the
    /// data file, so a failed write never leaves a truncated document behind.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::CreateDir`] or [`StorageError::Write`] for I/O failures.
    pub fn save_book(&self, book: &AddressBook) -> StorageResult<()> {
        let yaml = AddressBookDocument::render(book)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let staging = self.path.with_extension("yaml.tmp");
        let write_err = |source: std::io::Error| StorageError::Write {
            path: self.path.clone(),
            source,
        };
        fs::write(&staging, yaml).map_err(write_err)?;
        fs::rename(&staging, &self.path).map_err(write_err)?;

        tracing::debug!(
            path = %self.path.display(),
            records = book.records().len(),
            "saved address book"
        );
        Ok(())
    }
}

impl AddressBookStorage for YamlAddressBookStorage {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> BookResult<Option<AddressBook>> {
        Ok(self.read_book()?)
    }

    fn save(&self, book: &AddressBook) -> BookResult<()> {
        Ok(self.save_book(book)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medbook_core::{BookError, LogicManager, Model};
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let storage = YamlAddressBookStorage::new(dir.path().join("absent.yaml"));
        assert!(storage.read_book().unwrap().is_none());
    }

    #[test]
    fn save_creates_parent_directories_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("book.yaml");
        let storage = YamlAddressBookStorage::new(&path);

        let mut logic = LogicManager::load(storage.clone()).unwrap();
        logic
            .execute("add -pa n/Amy Bee p/85355255 e/amy@example.com a/30 m/Asthma t/vip")
            .unwrap();
        logic
            .execute("add -sp n/Bob Choo p/22222222 e/bob@example.com l/Clementi s/Dentist")
            .unwrap();
        logic.execute("addsc al/ls cw/list").unwrap();

        assert!(path.is_file());
        let reloaded = storage.read_book().unwrap().expect("file should exist");
        assert_eq!(&reloaded, logic.model().address_book());
    }

    #[test]
    fn corrupt_file_is_an_error_and_left_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.yaml");
        fs::write(&path, "records: not-a-list\n").unwrap();

        let storage = YamlAddressBookStorage::new(&path);
        let err = LogicManager::load(storage).err().expect("load should fail");
        assert!(matches!(err, BookError::Storage(msg) if msg.contains("schema mismatch")));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "records: not-a-list\n"
        );
    }

    #[test]
    fn staging_file_does_not_linger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.yaml");
        let storage = YamlAddressBookStorage::new(&path);
        storage.save_book(&AddressBook::new()).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("book.yaml")]);
    }
}
