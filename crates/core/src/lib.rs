//! # MedBook Core
//!
//! The record engine behind MedBook: patient and specialist records, sparse edit
//! descriptors, composed search predicates, the record collection with its shortcut aliases,
//! snapshot-based undo/redo and the command layer that drives them from text.
//!
//! **No I/O concerns**: persistence lives in `medbook-storage` behind
//! [`logic::AddressBookStorage`], and the terminal front end in `medbook-cli`.

pub mod address_book;
pub mod commands;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod error;
pub mod history;
pub mod logic;
pub mod model;
pub mod parser;
pub mod predicate;
pub mod record;
pub mod shortcuts;

#[cfg(test)]
mod test_support;

pub use address_book::AddressBook;
pub use commands::{Command, CommandResult};
pub use config::CoreConfig;
pub use error::{BookError, BookResult};
pub use history::TrackedAddressBook;
pub use logic::{AddressBookStorage, LogicManager};
pub use model::{Model, ModelManager, RecordFilter};
pub use record::{Patient, PersonDetails, Record, RecordKind, Specialist};
pub use shortcuts::ShortcutSettings;

pub use medbook_types::FieldError;
