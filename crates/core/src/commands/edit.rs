use super::{CommandResult, Index};
use crate::descriptor::EditDescriptor;
use crate::error::{BookError, BookResult};
use crate::model::Model;
use crate::record::Record;

/// Edits the displayed record at an index using a sparse descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditDescriptor,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const USAGE: &'static str = "edit: Edits the person at INDEX in the displayed list. \
        Existing values are overwritten by the input values; a lone t/ clears all tags.\n\
        Patient: edit -pa INDEX [n/NAME] [p/PHONE] [e/EMAIL] [a/AGE] [m/MEDICAL_HISTORY] [t/TAG]...\n\
        Specialist: edit -sp INDEX [n/NAME] [p/PHONE] [e/EMAIL] [l/LOCATION] [s/SPECIALTY] [t/TAG]...\n\
        Example: edit -pa 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: Index, descriptor: EditDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        let target = self.index.resolve(&*model)?;

        let edited: Record = match (&target, &self.descriptor) {
            (Record::Patient(p), EditDescriptor::Patient(d)) => {
                if !d.is_any_field_edited() {
                    return Err(BookError::NoFieldsEdited);
                }
                d.apply(p).into()
            }
            (Record::Specialist(s), EditDescriptor::Specialist(d)) => {
                if !d.is_any_field_edited() {
                    return Err(BookError::NoFieldsEdited);
                }
                d.apply(s).into()
            }
            _ => return Err(BookError::KindMismatch),
        };

        if !target.is_same_record(&edited) && model.has_record(&edited) {
            return Err(BookError::DuplicateRecord);
        }

        model.set_record(&target, edited.clone())?;
        model.commit_history();
        tracing::debug!(index = self.index.one_based(), "record edited");

        Ok(CommandResult::message(format!("Edited Person: {edited}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address_book::AddressBook;
    use crate::descriptor::{EditPatientDescriptor, EditSpecialistDescriptor};
    use crate::model::{ModelManager, RecordFilter};
    use crate::record::RecordKind;
    use crate::test_support::{typical_book, PatientBuilder};
    use medbook_types::{Phone, Specialty};

    fn index(n: usize) -> Index {
        Index::from_one_based(n).unwrap()
    }

    fn phone_edit(phone: &str) -> EditDescriptor {
        let mut d = EditPatientDescriptor::default();
        d.person.phone = Some(Phone::parse(phone).unwrap());
        d.into()
    }

    #[test]
    fn edit_then_undo_then_redo() {
        let amy = PatientBuilder::new().with_name("Amy").with_phone("123").build();
        let mut book = AddressBook::new();
        book.add(amy.clone()).unwrap();
        let mut model = ModelManager::new(book);

        EditCommand::new(index(1), phone_edit("456"))
            .execute(&mut model)
            .unwrap();

        let amy_edited = PatientBuilder::from_record(&amy).with_phone("456").build();
        assert_eq!(model.address_book().records(), &[amy_edited.clone()]);
        assert_eq!(model.history().len(), 2);
        assert_eq!(model.history().pointer(), 1);

        model.undo().unwrap();
        assert_eq!(model.address_book().records(), &[amy]);
        assert_eq!(model.history().pointer(), 0);

        model.redo().unwrap();
        assert_eq!(model.address_book().records(), &[amy_edited]);
        assert_eq!(model.history().pointer(), 1);
    }

    #[test]
    fn index_is_resolved_against_displayed_list() {
        let mut model = ModelManager::new(typical_book());
        model.update_filter(RecordFilter::Kind(RecordKind::Specialist));

        let mut d = EditSpecialistDescriptor::default();
        d.specialty = Some(Specialty::parse("Dentist").unwrap());
        EditCommand::new(index(2), d.into())
            .execute(&mut model)
            .unwrap();

        let daniel = &model.address_book().records()[3];
        assert_eq!(daniel.name().as_str(), "Daniel Meier");
        assert!(daniel.to_string().contains("Specialty: Dentist"));
    }

    #[test]
    fn index_past_displayed_list_is_invalid() {
        let mut model = ModelManager::new(typical_book());
        model.update_filter(RecordFilter::Kind(RecordKind::Specialist));
        assert_eq!(
            EditCommand::new(index(3), phone_edit("999")).execute(&mut model),
            Err(BookError::InvalidIndex)
        );
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let mut model = ModelManager::new(typical_book());
        // index 2 is a specialist
        assert_eq!(
            EditCommand::new(index(2), phone_edit("999")).execute(&mut model),
            Err(BookError::KindMismatch)
        );
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn empty_descriptor_is_rejected() {
        let mut model = ModelManager::new(typical_book());
        assert_eq!(
            EditCommand::new(index(1), EditPatientDescriptor::default().into())
                .execute(&mut model),
            Err(BookError::NoFieldsEdited)
        );
    }

    #[test]
    fn editing_into_another_person_is_duplicate() {
        let mut model = ModelManager::new(typical_book());
        let carl = model.address_book().records()[2].clone();

        let mut d = EditPatientDescriptor::default();
        d.person.name = Some(carl.name().clone());
        d.person.phone = Some(carl.phone().clone());

        assert_eq!(
            EditCommand::new(index(1), d.into()).execute(&mut model),
            Err(BookError::DuplicateRecord)
        );
        assert_eq!(*model.address_book(), typical_book());
        assert_eq!(model.history().len(), 1);
    }

    #[test]
    fn unchanged_identity_is_not_a_duplicate() {
        let mut model = ModelManager::new(typical_book());
        let alice = model.address_book().records()[0].clone();
        let result = EditCommand::new(index(1), phone_edit(alice.phone().as_str()))
            .execute(&mut model)
            .unwrap();
        assert!(result.feedback.starts_with("Edited Person: Alice Pauline"));
        assert_eq!(model.history().len(), 2);
    }
}
