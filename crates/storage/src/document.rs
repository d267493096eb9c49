//! Wire model of the address book document.
//!
//! ```yaml
//! records:
//!   - kind: patient
//!     name: Amy Bee
//!     phone: '85355255'
//!     email: amy@example.com
//!     tags: [friend]
//!     age: 30
//!     medicalHistory: Osteoporosis
//!   - kind: specialist
//!     name: Bob Choo
//!     phone: '22222222'
//!     email: bob@example.com
//!     location: Clementi Ave 2
//!     specialty: Physiotherapist
//! shortcuts:
//!   ls: list
//! ```

use crate::{StorageError, StorageResult};
use medbook_core::{
    AddressBook, BookError, Patient, PersonDetails, Record, ShortcutSettings, Specialist,
};
use medbook_types::{Age, Email, FieldError, Location, MedicalHistory, Name, Phone, Specialty, Tag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Address book document operations.
///
/// This is a zero-sized type used for namespacing; all methods are associated functions.
pub struct AddressBookDocument;

impl AddressBookDocument {
    /// Parse an address book from YAML text.
    ///
    /// Blank text is an empty book. Schema errors carry the failing path
    /// (e.g. `records[1].age`) as reported by `serde_path_to_error`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if:
    /// - the YAML does not match the document schema (unknown keys, wrong types, a missing
    ///   or unknown `kind`, missing fields),
    /// - a field value fails its format rule,
    /// - two records describe the same person.
    pub fn parse(yaml_text: &str) -> StorageResult<AddressBook> {
        if yaml_text.trim().is_empty() {
            return Ok(AddressBook::new());
        }

        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        let wire = match serde_path_to_error::deserialize::<_, AddressBookWire>(deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let path = if path.is_empty() || path == "." {
                    "<root>".to_string()
                } else {
                    path
                };
                return Err(StorageError::Schema {
                    path,
                    message: err.into_inner().to_string(),
                });
            }
        };

        wire_to_domain(wire)
    }

    /// Render an address book as YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Serialise`] if serialisation fails.
    pub fn render(book: &AddressBook) -> StorageResult<String> {
        Ok(serde_yaml::to_string(&domain_to_wire(book))?)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct AddressBookWire {
    #[serde(default)]
    records: Vec<RecordWire>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    shortcuts: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum RecordWire {
    Patient(PatientWire),
    Specialist(SpecialistWire),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PatientWire {
    name: String,
    phone: String,
    email: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,

    age: u64,

    #[serde(rename = "medicalHistory")]
    medical_history: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct SpecialistWire {
    name: String,
    phone: String,
    email: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,

    location: String,
    specialty: String,
}

// ============================================================================
// Translation (internal)
// ============================================================================

/// Attach the record position and field name to a field validation failure.
fn field<T>(index: usize, field: &'static str, parsed: Result<T, FieldError>) -> StorageResult<T> {
    parsed.map_err(|source| StorageError::InvalidField {
        index,
        field,
        source,
    })
}

fn person_from_wire(
    index: usize,
    name: &str,
    phone: &str,
    email: &str,
    tags: &[String],
) -> StorageResult<PersonDetails> {
    let tags = tags
        .iter()
        .map(|t| field(index, "tags", Tag::parse(t)))
        .collect::<StorageResult<BTreeSet<_>>>()?;

    Ok(PersonDetails::new(
        field(index, "name", Name::parse(name))?,
        field(index, "phone", Phone::parse(phone))?,
        field(index, "email", Email::parse(email))?,
        tags,
    ))
}

fn record_from_wire(index: usize, wire: RecordWire) -> StorageResult<Record> {
    let record = match wire {
        RecordWire::Patient(p) => Patient::new(
            person_from_wire(index, &p.name, &p.phone, &p.email, &p.tags)?,
            field(index, "age", Age::new(p.age))?,
            field(
                index,
                "medicalHistory",
                MedicalHistory::parse(&p.medical_history),
            )?,
        )
        .into(),
        RecordWire::Specialist(s) => Specialist::new(
            person_from_wire(index, &s.name, &s.phone, &s.email, &s.tags)?,
            field(index, "location", Location::parse(&s.location))?,
            field(index, "specialty", Specialty::parse(&s.specialty))?,
        )
        .into(),
    };
    Ok(record)
}

fn wire_to_domain(wire: AddressBookWire) -> StorageResult<AddressBook> {
    let mut book = AddressBook::new();

    for (index, record) in wire.records.into_iter().enumerate() {
        let record = record_from_wire(index, record)?;
        // `add` only fails on an identity clash with an earlier record.
        book.add(record)
            .map_err(|_| StorageError::DuplicateRecord { index })?;
    }

    for (alias, expansion) in wire.shortcuts {
        let invalid = |source: BookError| StorageError::InvalidShortcut {
            alias: alias.clone(),
            source,
        };
        let (checked, expansion) =
            ShortcutSettings::validate(&alias, &expansion).map_err(invalid)?;
        book.add_shortcut(&checked, expansion).map_err(invalid)?;
    }

    Ok(book)
}

fn domain_to_wire(book: &AddressBook) -> AddressBookWire {
    let records = book
        .records()
        .iter()
        .map(|record| {
            let person = record.person();
            let tags = person.tags.iter().map(|t| t.as_str().to_owned()).collect();
            match record {
                Record::Patient(p) => RecordWire::Patient(PatientWire {
                    name: person.name.as_str().to_owned(),
                    phone: person.phone.as_str().to_owned(),
                    email: person.email.as_str().to_owned(),
                    tags,
                    age: u64::from(p.age().years()),
                    medical_history: p.medical_history().as_str().to_owned(),
                }),
                Record::Specialist(s) => RecordWire::Specialist(SpecialistWire {
                    name: person.name.as_str().to_owned(),
                    phone: person.phone.as_str().to_owned(),
                    email: person.email.as_str().to_owned(),
                    tags,
                    location: s.location().as_str().to_owned(),
                    specialty: s.specialty().as_str().to_owned(),
                }),
            }
        })
        .collect();

    let shortcuts = book
        .shortcuts()
        .iter()
        .map(|(alias, expansion)| (alias.to_owned(), expansion.to_owned()))
        .collect();

    AddressBookWire { records, shortcuts }
}
