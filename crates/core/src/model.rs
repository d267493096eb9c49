//! The state commands operate on.
//!
//! [`Model`] is the seam between the command layer and the versioned collection. Commands only
//! ever see `&mut dyn Model`; [`ModelManager`] is the implementation used by the logic layer.
//!
//! Besides the tracked [`AddressBook`], the model holds two pieces of presentation state that
//! are not part of history:
//!
//! - the display filter, from which the displayed record list is recomputed on every read;
//! - the selected record, shown in full by the `view` command.

use crate::address_book::AddressBook;
use crate::error::BookResult;
use crate::history::TrackedAddressBook;
use crate::predicate::FindPredicate;
use crate::record::{Record, RecordKind};
use crate::shortcuts::ShortcutSettings;
use medbook_types::NonEmptyText;

/// Which records the displayed list shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RecordFilter {
    #[default]
    All,
    Kind(RecordKind),
    Matching(FindPredicate),
}

impl RecordFilter {
    pub fn test(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => record.kind() == *kind,
            Self::Matching(predicate) => predicate.test(record),
        }
    }
}

pub trait Model {
    /// The live collection.
    fn address_book(&self) -> &AddressBook;

    /// Records passing the current filter, in collection order. Command indices are 1-based
    /// positions in this list.
    fn displayed_records(&self) -> Vec<&Record>;

    fn filter(&self) -> &RecordFilter;

    fn update_filter(&mut self, filter: RecordFilter);

    fn has_record(&self, record: &Record) -> bool {
        self.address_book().has(record)
    }

    fn add_record(&mut self, record: Record) -> BookResult<()>;

    fn set_record(&mut self, target: &Record, edited: Record) -> BookResult<()>;

    fn remove_record(&mut self, record: &Record) -> BookResult<Record>;

    /// Removes every record. Shortcuts are kept.
    fn clear_records(&mut self);

    fn shortcuts(&self) -> &ShortcutSettings {
        self.address_book().shortcuts()
    }

    fn add_shortcut(&mut self, alias: &str, expansion: NonEmptyText) -> BookResult<()>;

    fn remove_shortcut(&mut self, alias: &str) -> BookResult<()>;

    fn select_record(&mut self, record: Option<Record>);

    /// The selected record, if one is selected and it is still in the collection.
    fn selected_record(&self) -> Option<&Record>;

    /// Snapshots the live collection into history.
    fn commit_history(&mut self);

    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    fn undo(&mut self) -> BookResult<()>;

    fn redo(&mut self) -> BookResult<()>;
}

/// [`Model`] backed by a [`TrackedAddressBook`].
#[derive(Clone, Debug)]
pub struct ModelManager {
    book: TrackedAddressBook,
    filter: RecordFilter,
    selected: Option<Record>,
}

impl ModelManager {
    pub fn new(initial: AddressBook) -> Self {
        tracing::debug!(
            records = initial.records().len(),
            shortcuts = initial.shortcuts().len(),
            "initialising model"
        );
        Self {
            book: TrackedAddressBook::new(initial),
            filter: RecordFilter::All,
            selected: None,
        }
    }

    /// Read access to the undo/redo history.
    pub fn history(&self) -> &TrackedAddressBook {
        &self.book
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.book
    }

    fn displayed_records(&self) -> Vec<&Record> {
        self.book
            .records()
            .iter()
            .filter(|r| self.filter.test(r))
            .collect()
    }

    fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    fn update_filter(&mut self, filter: RecordFilter) {
        self.filter = filter;
    }

    fn add_record(&mut self, record: Record) -> BookResult<()> {
        self.book.current_mut().add(record)
    }

    fn set_record(&mut self, target: &Record, edited: Record) -> BookResult<()> {
        self.book.current_mut().set_record(target, edited.clone())?;
        if self.selected.as_ref() == Some(target) {
            self.selected = Some(edited);
        }
        Ok(())
    }

    fn remove_record(&mut self, record: &Record) -> BookResult<Record> {
        let removed = self.book.current_mut().remove(record)?;
        if self.selected.as_ref() == Some(&removed) {
            self.selected = None;
        }
        Ok(removed)
    }

    fn clear_records(&mut self) {
        self.book.current_mut().clear_records();
        self.selected = None;
    }

    fn add_shortcut(&mut self, alias: &str, expansion: NonEmptyText) -> BookResult<()> {
        self.book.current_mut().add_shortcut(alias, expansion)
    }

    fn remove_shortcut(&mut self, alias: &str) -> BookResult<()> {
        self.book.current_mut().remove_shortcut(alias)
    }

    fn select_record(&mut self, record: Option<Record>) {
        self.selected = record;
    }

    fn selected_record(&self) -> Option<&Record> {
        self.selected
            .as_ref()
            .filter(|r| self.book.records().contains(r))
    }

    fn commit_history(&mut self) {
        self.book.commit();
    }

    fn can_undo(&self) -> bool {
        self.book.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.book.can_redo()
    }

    fn undo(&mut self) -> BookResult<()> {
        self.book.undo()
    }

    fn redo(&mut self) -> BookResult<()> {
        self.book.redo()
    }
}
