//! Command execution entry point.
//!
//! [`LogicManager`] ties the parser, the model and persistence together: it parses one line of
//! text, runs the resulting command against the model and then saves the live collection.

use crate::address_book::AddressBook;
use crate::commands::CommandResult;
use crate::error::BookResult;
use crate::model::{Model, ModelManager};
use crate::parser::parse_command;
use crate::record::Record;
use std::path::Path;

/// Where the address book is loaded from and saved to.
pub trait AddressBookStorage {
    /// Location of the backing data, for diagnostics.
    fn location(&self) -> &Path;

    /// Loads the stored book. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> BookResult<Option<AddressBook>>;

    fn save(&self, book: &AddressBook) -> BookResult<()>;
}

pub struct LogicManager<S> {
    model: ModelManager,
    storage: S,
}

impl<S: AddressBookStorage> LogicManager<S> {
    pub fn new(model: ModelManager, storage: S) -> Self {
        Self { model, storage }
    }

    /// Builds a manager from whatever `storage` holds, starting empty if it holds nothing.
    ///
    /// # Errors
    ///
    /// Propagates read failures; a corrupt store is never replaced by an empty book.
    pub fn load(storage: S) -> BookResult<Self> {
        let book = match storage.read()? {
            Some(book) => {
                tracing::info!(
                    path = %storage.location().display(),
                    records = book.records().len(),
                    "loaded address book"
                );
                book
            }
            None => {
                tracing::info!(
                    path = %storage.location().display(),
                    "no data file found, starting with an empty address book"
                );
                AddressBook::new()
            }
        };
        Ok(Self::new(ModelManager::new(book), storage))
    }

    /// Parses and runs one command, then persists the collection.
    ///
    /// A save failure does not undo the command: the model has already changed, so the result
    /// is still returned, with [`CommandResult::save_error`] describing the failure.
    ///
    /// # Errors
    ///
    /// Returns the parse or execution error unchanged. Nothing is saved in that case.
    pub fn execute(&mut self, text: &str) -> BookResult<CommandResult> {
        let command = parse_command(text, self.model.shortcuts())?;
        tracing::debug!(command = command.word(), "executing command");

        let mut result = command.execute(&mut self.model)?;
        if let Err(err) = self.storage.save(self.model.address_book()) {
            tracing::warn!(
                path = %self.storage.location().display(),
                error = %err,
                "command applied but the address book could not be saved"
            );
            result.save_error = Some(err.to_string());
        }
        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn displayed_records(&self) -> Vec<&Record> {
        self.model.displayed_records()
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.model.selected_record()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
