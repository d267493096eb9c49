//! Sparse edit descriptors.
//!
//! A descriptor names the fields of a record that an edit replaces. Every field is optional;
//! unset fields keep the existing record's value. There is one descriptor type per record
//! kind and [`EditDescriptor`] tags which one a command carries.
//!
//! Descriptors own their tag set. Building one moves the set in, and [`Clone`] produces a
//! fully independent copy, so nothing a caller does afterwards can reach descriptor state.

use crate::record::{Patient, PersonDetails, RecordKind, Specialist};
use medbook_types::{Age, Email, Location, MedicalHistory, Name, Phone, Specialty, Tag};
use std::collections::BTreeSet;

/// Edits to the fields every record kind shares.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.email.is_some() || self.tags.is_some()
    }

    fn apply(&self, existing: &PersonDetails) -> PersonDetails {
        PersonDetails {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| existing.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| existing.email.clone()),
            tags: self.tags.clone().unwrap_or_else(|| existing.tags.clone()),
        }
    }
}

/// Edits to a patient.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditPatientDescriptor {
    pub person: EditPersonDescriptor,
    pub age: Option<Age>,
    pub medical_history: Option<MedicalHistory>,
}

impl EditPatientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.person.is_any_field_edited() || self.age.is_some() || self.medical_history.is_some()
    }

    /// Builds a new patient from `existing` with every set field replaced.
    pub fn apply(&self, existing: &Patient) -> Patient {
        Patient::new(
            self.person.apply(existing.person()),
            self.age.unwrap_or_else(|| existing.age()),
            self.medical_history
                .clone()
                .unwrap_or_else(|| existing.medical_history().clone()),
        )
    }
}

/// Edits to a specialist.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSpecialistDescriptor {
    pub person: EditPersonDescriptor,
    pub location: Option<Location>,
    pub specialty: Option<Specialty>,
}

impl EditSpecialistDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.person.is_any_field_edited() || self.location.is_some() || self.specialty.is_some()
    }

    /// Builds a new specialist from `existing` with every set field replaced.
    pub fn apply(&self, existing: &Specialist) -> Specialist {
        Specialist::new(
            self.person.apply(existing.person()),
            self.location
                .clone()
                .unwrap_or_else(|| existing.location().clone()),
            self.specialty
                .clone()
                .unwrap_or_else(|| existing.specialty().clone()),
        )
    }
}

/// A descriptor for one specific record kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditDescriptor {
    Patient(EditPatientDescriptor),
    Specialist(EditSpecialistDescriptor),
}

impl EditDescriptor {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Patient(_) => RecordKind::Patient,
            Self::Specialist(_) => RecordKind::Specialist,
        }
    }

    pub fn is_any_field_edited(&self) -> bool {
        match self {
            Self::Patient(d) => d.is_any_field_edited(),
            Self::Specialist(d) => d.is_any_field_edited(),
        }
    }

    pub fn person(&self) -> &EditPersonDescriptor {
        match self {
            Self::Patient(d) => &d.person,
            Self::Specialist(d) => &d.person,
        }
    }

    pub fn person_mut(&mut self) -> &mut EditPersonDescriptor {
        match self {
            Self::Patient(d) => &mut d.person,
            Self::Specialist(d) => &mut d.person,
        }
    }
}

impl From<EditPatientDescriptor> for EditDescriptor {
    fn from(descriptor: EditPatientDescriptor) -> Self {
        Self::Patient(descriptor)
    }
}

impl From<EditSpecialistDescriptor> for EditDescriptor {
    fn from(descriptor: EditSpecialistDescriptor) -> Self {
        Self::Specialist(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::test_support::{PatientBuilder, SpecialistBuilder};

    fn as_patient(record: Record) -> Patient {
        match record {
            Record::Patient(p) => p,
            other => panic!("expected a patient, got {other:?}"),
        }
    }

    fn as_specialist(record: Record) -> Specialist {
        match record {
            Record::Specialist(s) => s,
            other => panic!("expected a specialist, got {other:?}"),
        }
    }

    #[test]
    fn empty_descriptor_edits_nothing() {
        assert!(!EditPatientDescriptor::default().is_any_field_edited());
        assert!(!EditSpecialistDescriptor::default().is_any_field_edited());
        assert!(!EditDescriptor::from(EditPatientDescriptor::default()).is_any_field_edited());
    }

    #[test]
    fn empty_descriptor_apply_is_identity() {
        let patient = as_patient(PatientBuilder::new().with_tags(&["a", "b"]).build());
        assert_eq!(EditPatientDescriptor::default().apply(&patient), patient);

        let specialist = as_specialist(SpecialistBuilder::new().build());
        assert_eq!(EditSpecialistDescriptor::default().apply(&specialist), specialist);
    }

    #[test]
    fn every_single_field_counts_as_edited() {
        let mut d = EditSpecialistDescriptor::default();
        d.location = Some(Location::parse("Jurong").unwrap());
        assert!(d.is_any_field_edited());

        let mut d = EditPatientDescriptor::default();
        d.person.tags = Some(BTreeSet::new());
        assert!(d.is_any_field_edited());

        let mut d = EditPatientDescriptor::default();
        d.age = Some(Age::new(3).unwrap());
        assert!(d.is_any_field_edited());
    }

    #[test]
    fn apply_replaces_only_set_fields() {
        let patient = as_patient(
            PatientBuilder::new()
                .with_name("Amy")
                .with_phone("123")
                .with_tags(&["vip"])
                .build(),
        );

        let mut d = EditPatientDescriptor::default();
        d.person.phone = Some(Phone::parse("456").unwrap());
        d.medical_history = Some(MedicalHistory::parse("Diabetes").unwrap());

        let edited = d.apply(&patient);
        assert_eq!(edited.person().name.as_str(), "Amy");
        assert_eq!(edited.person().phone.as_str(), "456");
        assert_eq!(edited.person().tags, patient.person().tags);
        assert_eq!(edited.medical_history().as_str(), "Diabetes");
        assert_eq!(edited.age(), patient.age());
    }

    #[test]
    fn empty_tag_set_clears_tags() {
        let specialist = as_specialist(SpecialistBuilder::new().with_tags(&["x"]).build());
        let mut d = EditSpecialistDescriptor::default();
        d.person.tags = Some(BTreeSet::new());
        assert!(d.apply(&specialist).person().tags.is_empty());
    }

    #[test]
    fn clone_is_independent() {
        let mut original = EditDescriptor::from(EditPatientDescriptor::default());
        original.person_mut().tags = Some(BTreeSet::from([Tag::parse("one").unwrap()]));

        let mut copy = original.clone();
        assert_eq!(copy, original);

        if let Some(tags) = copy.person_mut().tags.as_mut() {
            tags.insert(Tag::parse("two").unwrap());
        }
        assert_ne!(copy, original);
        assert_eq!(original.person().tags.as_ref().map(BTreeSet::len), Some(1));
    }

    #[test]
    fn descriptor_kind_follows_variant() {
        assert_eq!(
            EditDescriptor::from(EditSpecialistDescriptor::default()).kind(),
            RecordKind::Specialist
        );
    }
}
