//! Record builders and fixture data for unit tests.

use crate::address_book::AddressBook;
use crate::record::{Patient, PersonDetails, Record, Specialist};
use medbook_types::{Age, Email, Location, MedicalHistory, Name, Phone, Specialty, Tag};
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
struct PersonFields {
    name: String,
    phone: String,
    email: String,
    tags: Vec<String>,
}

impl PersonFields {
    fn from_details(person: &PersonDetails) -> Self {
        Self {
            name: person.name.as_str().to_owned(),
            phone: person.phone.as_str().to_owned(),
            email: person.email.as_str().to_owned(),
            tags: person.tags.iter().map(|t| t.as_str().to_owned()).collect(),
        }
    }

    fn build(&self) -> PersonDetails {
        PersonDetails::new(
            Name::parse(&self.name).unwrap(),
            Phone::parse(&self.phone).unwrap(),
            Email::parse(&self.email).unwrap(),
            self.tags
                .iter()
                .map(|t| Tag::parse(t).unwrap())
                .collect::<BTreeSet<_>>(),
        )
    }
}

pub struct PatientBuilder {
    person: PersonFields,
    age: u64,
    medical_history: String,
}

impl PatientBuilder {
    pub fn new() -> Self {
        Self {
            person: PersonFields {
                name: "Amy Bee".into(),
                phone: "85355255".into(),
                email: "amy@example.com".into(),
                tags: Vec::new(),
            },
            age: 30,
            medical_history: "Asthma".into(),
        }
    }

    /// Starts from an existing patient record.
    pub fn from_record(record: &Record) -> Self {
        match record {
            Record::Patient(p) => Self {
                person: PersonFields::from_details(p.person()),
                age: u64::from(p.age().years()),
                medical_history: p.medical_history().as_str().to_owned(),
            },
            other => panic!("expected a patient, got {other:?}"),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.person.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.person.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.person.email = email.into();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.person.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_age(mut self, age: u64) -> Self {
        self.age = age;
        self
    }

    pub fn with_medical_history(mut self, history: &str) -> Self {
        self.medical_history = history.into();
        self
    }

    pub fn build(self) -> Record {
        Patient::new(
            self.person.build(),
            Age::new(self.age).unwrap(),
            MedicalHistory::parse(&self.medical_history).unwrap(),
        )
        .into()
    }
}

pub struct SpecialistBuilder {
    person: PersonFields,
    location: String,
    specialty: String,
}

impl SpecialistBuilder {
    pub fn new() -> Self {
        Self {
            person: PersonFields {
                name: "Bob Choo".into(),
                phone: "22222222".into(),
                email: "bob@example.com".into(),
                tags: Vec::new(),
            },
            location: "Clementi Ave 2".into(),
            specialty: "Physiotherapist".into(),
        }
    }

    /// Starts from an existing specialist record.
    pub fn from_record(record: &Record) -> Self {
        match record {
            Record::Specialist(s) => Self {
                person: PersonFields::from_details(s.person()),
                location: s.location().as_str().to_owned(),
                specialty: s.specialty().as_str().to_owned(),
            },
            other => panic!("expected a specialist, got {other:?}"),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.person.name = name.into();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.person.phone = phone.into();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.person.email = email.into();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.person.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_specialty(mut self, specialty: &str) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn build(self) -> Record {
        Specialist::new(
            self.person.build(),
            Location::parse(&self.location).unwrap(),
            Specialty::parse(&self.specialty).unwrap(),
        )
        .into()
    }
}

/// Five records alternating patient / specialist, starting with a patient.
pub fn typical_book() -> AddressBook {
    let records = vec![
        PatientBuilder::new()
            .with_name("Alice Pauline")
            .with_phone("94351253")
            .with_email("alice@example.com")
            .with_tags(&["friends"])
            .with_age(45)
            .with_medical_history("Diabetes")
            .build(),
        SpecialistBuilder::new()
            .with_name("Benson Meier")
            .with_phone("98765432")
            .with_email("johnd@example.com")
            .with_tags(&["owesMoney", "friends"])
            .with_location("311 Clementi Ave 2")
            .with_specialty("Physiotherapist")
            .build(),
        PatientBuilder::new()
            .with_name("Carl Kurz")
            .with_phone("95352563")
            .with_email("heinz@example.com")
            .with_age(67)
            .with_medical_history("Osteoporosis")
            .build(),
        SpecialistBuilder::new()
            .with_name("Daniel Meier")
            .with_phone("87652533")
            .with_email("cornelia@example.com")
            .with_tags(&["friends"])
            .with_location("10th street")
            .with_specialty("Dermatologist")
            .build(),
        PatientBuilder::new()
            .with_name("Elle Meyer")
            .with_phone("9482224")
            .with_email("werner@example.com")
            .with_age(23)
            .with_medical_history("Asthma")
            .build(),
    ];

    let mut book = AddressBook::new();
    for record in records {
        book.add(record).unwrap();
    }
    book
}
