use super::CommandResult;
use crate::error::{BookError, BookResult};
use crate::model::{Model, RecordFilter};
use crate::record::Record;

/// Adds a new patient or specialist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddCommand {
    record: Record,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds a person to the address book.\n\
        Patient: add -pa n/NAME p/PHONE e/EMAIL a/AGE m/MEDICAL_HISTORY [t/TAG]...\n\
        Specialist: add -sp n/NAME p/PHONE e/EMAIL l/LOCATION s/SPECIALTY [t/TAG]...\n\
        Example: add -pa n/John Doe p/98765432 e/johnd@example.com a/30 m/Osteoporosis t/friends";

    pub fn new(record: Record) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        if model.has_record(&self.record) {
            return Err(BookError::DuplicateRecord);
        }

        model.add_record(self.record.clone())?;
        model.update_filter(RecordFilter::All);
        model.commit_history();
        tracing::debug!(kind = %self.record.kind(), "record added");

        Ok(CommandResult::message(format!(
            "New person added: {}",
            self.record
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelManager;
    use crate::record::RecordKind;
    use crate::test_support::{typical_book, PatientBuilder, SpecialistBuilder};

    #[test]
    fn adds_and_commits() {
        let mut model = ModelManager::default();
        let amy = PatientBuilder::new().build();

        let result = AddCommand::new(amy.clone()).execute(&mut model).unwrap();
        assert!(result.feedback.starts_with("New person added: Amy Bee"));
        assert_eq!(model.address_book().records(), &[amy]);
        assert_eq!(model.history().len(), 2);
    }

    #[test]
    fn duplicate_is_rejected_without_commit() {
        let mut model = ModelManager::new(typical_book());
        let existing = model.address_book().records()[0].clone();
        let same_person = PatientBuilder::from_record(&existing)
            .with_email("someone.else@example.com")
            .build();

        assert_eq!(
            AddCommand::new(same_person).execute(&mut model),
            Err(BookError::DuplicateRecord)
        );
        assert_eq!(model.history().len(), 1);
        assert_eq!(*model.address_book(), typical_book());
    }

    #[test]
    fn duplicate_check_ignores_kind() {
        let mut model = ModelManager::new(typical_book());
        let existing = model.address_book().records()[0].clone();
        let as_specialist = SpecialistBuilder::new()
            .with_name(existing.name().as_str())
            .with_phone(existing.phone().as_str())
            .build();

        assert_eq!(
            AddCommand::new(as_specialist).execute(&mut model),
            Err(BookError::DuplicateRecord)
        );
    }

    #[test]
    fn adding_resets_the_display_filter() {
        let mut model = ModelManager::new(typical_book());
        model.update_filter(RecordFilter::Kind(RecordKind::Patient));

        AddCommand::new(SpecialistBuilder::new().with_name("Zed").build())
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.filter(), &RecordFilter::All);
        assert_eq!(model.displayed_records().len(), 6);
    }
}
