//! The live record collection.
//!
//! [`AddressBook`] keeps records in insertion order and guarantees that no two of them are
//! identity-equal (see [`Record::is_same_record`]). It also owns the shortcut mapping so that
//! a snapshot of the book captures both.

use crate::error::{BookError, BookResult};
use crate::record::Record;
use crate::shortcuts::ShortcutSettings;
use medbook_types::NonEmptyText;

/// Ordered, duplicate-free records plus shortcut aliases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    shortcuts: ShortcutSettings,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn shortcuts(&self) -> &ShortcutSettings {
        &self.shortcuts
    }

    pub fn has(&self, record: &Record) -> bool {
        self.records.iter().any(|r| r.is_same_record(record))
    }

    /// # Errors
    ///
    /// Returns `BookError::DuplicateRecord` if an identity-equal record is already present.
    pub fn add(&mut self, record: Record) -> BookResult<()> {
        if self.has(&record) {
            return Err(BookError::DuplicateRecord);
        }
        self.records.push(record);
        Ok(())
    }

    /// Replaces `target` with `edited`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `BookError::RecordNotFound` if `target` is not in the book.
    /// - `BookError::DuplicateRecord` if `edited` is a different person from `target` and that
    ///   person is already in the book.
    pub fn set_record(&mut self, target: &Record, edited: Record) -> BookResult<()> {
        let position = self.position(target).ok_or(BookError::RecordNotFound)?;

        if !target.is_same_record(&edited) && self.has(&edited) {
            return Err(BookError::DuplicateRecord);
        }

        self.records[position] = edited;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if `record` is not in the book.
    pub fn remove(&mut self, record: &Record) -> BookResult<Record> {
        let position = self.position(record).ok_or(BookError::RecordNotFound)?;
        Ok(self.records.remove(position))
    }

    /// Replaces every record, leaving shortcuts untouched.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateRecord` (and leaves the book unchanged) if `records`
    /// contains identity-equal entries.
    pub fn set_records(&mut self, records: Vec<Record>) -> BookResult<()> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.is_same_record(record)) {
                return Err(BookError::DuplicateRecord);
            }
        }
        self.records = records;
        Ok(())
    }

    pub fn clear_records(&mut self) {
        self.records.clear();
    }

    /// Restores records and shortcuts wholesale from a previously captured state.
    ///
    /// The source was itself a valid book, so no duplicate check is repeated.
    pub fn reset_data(&mut self, source: &AddressBook) {
        self.records.clone_from(&source.records);
        self.shortcuts.clone_from(&source.shortcuts);
    }

    /// # Errors
    ///
    /// Returns `BookError::DuplicateAlias` if `alias` is already mapped.
    pub fn add_shortcut(&mut self, alias: &str, expansion: NonEmptyText) -> BookResult<()> {
        self.shortcuts.add(alias, expansion)
    }

    /// # Errors
    ///
    /// Returns `BookError::UnknownAlias` if `alias` is not mapped.
    pub fn remove_shortcut(&mut self, alias: &str) -> BookResult<()> {
        self.shortcuts.remove(alias).map(|_| ())
    }

    /// Position of the record structurally equal to `record`.
    fn position(&self, record: &Record) -> Option<usize> {
        self.records.iter().position(|r| r == record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{typical_book, PatientBuilder, SpecialistBuilder};

    #[test]
    fn add_rejects_identity_duplicates() {
        let mut book = AddressBook::new();
        book.add(PatientBuilder::new().build()).unwrap();

        let same = PatientBuilder::new().build();
        assert_eq!(book.add(same), Err(BookError::DuplicateRecord));

        let different_email = PatientBuilder::new().with_email("x@example.com").build();
        assert_eq!(book.add(different_email), Err(BookError::DuplicateRecord));
        assert_eq!(book.records().len(), 1);
    }

    #[test]
    fn set_record_keeps_position() {
        let mut book = typical_book();
        let target = book.records()[1].clone();
        let edited = SpecialistBuilder::from_record(&target)
            .with_specialty("Dentist")
            .build();

        book.set_record(&target, edited.clone()).unwrap();
        assert_eq!(book.records()[1], edited);
    }

    #[test]
    fn set_record_missing_target() {
        let mut book = AddressBook::new();
        let record = PatientBuilder::new().build();
        assert_eq!(
            book.set_record(&record, record.clone()),
            Err(BookError::RecordNotFound)
        );
    }

    #[test]
    fn set_record_into_other_identity_is_duplicate() {
        let mut book = typical_book();
        let first = book.records()[0].clone();
        let second = book.records()[1].clone();

        let clash = PatientBuilder::from_record(&first)
            .with_name(second.name().as_str())
            .with_phone(second.phone().as_str())
            .build();

        assert_eq!(book.set_record(&first, clash), Err(BookError::DuplicateRecord));
        assert_eq!(book.records()[0], first);
    }

    #[test]
    fn set_record_same_identity_other_fields_is_allowed() {
        let mut book = typical_book();
        let first = book.records()[0].clone();
        let edited = PatientBuilder::from_record(&first)
            .with_email("new@example.com")
            .build();
        book.set_record(&first, edited.clone()).unwrap();
        assert!(book.records().contains(&edited));
    }

    #[test]
    fn remove_missing_record_fails() {
        let mut book = typical_book();
        let stranger = PatientBuilder::new().with_name("Nobody Here").build();
        assert_eq!(book.remove(&stranger), Err(BookError::RecordNotFound));
    }

    #[test]
    fn remove_then_has_is_false() {
        let mut book = typical_book();
        let first = book.records()[0].clone();
        book.remove(&first).unwrap();
        assert!(!book.has(&first));
    }

    #[test]
    fn set_records_rejects_internal_duplicates() {
        let mut book = typical_book();
        let before = book.clone();
        let dup = vec![PatientBuilder::new().build(), PatientBuilder::new().build()];
        assert_eq!(book.set_records(dup), Err(BookError::DuplicateRecord));
        assert_eq!(book, before);
    }

    #[test]
    fn reset_data_restores_records_and_shortcuts() {
        let source = typical_book();
        let mut book = AddressBook::new();
        book.add_shortcut("ls", NonEmptyText::new("list").unwrap())
            .expect("fresh alias");

        book.reset_data(&source);
        assert_eq!(book, source);
    }

    #[test]
    fn shortcut_errors_surface() {
        let mut book = AddressBook::new();
        book.add_shortcut("ls", NonEmptyText::new("list").unwrap())
            .expect("fresh alias");
        assert_eq!(
            book.add_shortcut("ls", NonEmptyText::new("list").unwrap()),
            Err(BookError::DuplicateAlias("ls".into()))
        );
        assert_eq!(
            book.remove_shortcut("xx"),
            Err(BookError::UnknownAlias("xx".into()))
        );
    }
}
