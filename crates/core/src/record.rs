//! Patient and specialist records.
//!
//! A [`Record`] is a tagged union over the two record kinds. Both kinds share the identity
//! and contact fields held in [`PersonDetails`]; each adds its own kind-specific fields.
//!
//! Records have no mutators. Changing a record means building a new one (see
//! [`crate::descriptor`]) and swapping it into the collection.
//!
//! ## Two notions of equality
//!
//! - `==` is full structural equality: kind and every field must match.
//! - [`Record::is_same_record`] is identity equality: name and phone match. It is what the
//!   collection uses to reject duplicates, so two entries for the same person that differ
//!   only in email, tags or kind-specific fields still collide.

use medbook_types::{Age, Email, Location, MedicalHistory, Name, Phone, Specialty, Tag};
use std::collections::BTreeSet;
use std::fmt;

/// Discriminator for the two record kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordKind {
    Patient,
    Specialist,
}

impl RecordKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Specialist => "specialist",
        }
    }

    /// Command-line flag selecting this kind (`-pa` / `-sp`).
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Patient => "-pa",
            Self::Specialist => "-sp",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-pa" => Some(Self::Patient),
            "-sp" => Some(Self::Specialist),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields shared by every record kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonDetails {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub tags: BTreeSet<Tag>,
}

impl PersonDetails {
    pub fn new(name: Name, phone: Phone, email: Email, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            phone,
            email,
            tags,
        }
    }
}

/// A patient record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    person: PersonDetails,
    age: Age,
    medical_history: MedicalHistory,
}

impl Patient {
    pub fn new(person: PersonDetails, age: Age, medical_history: MedicalHistory) -> Self {
        Self {
            person,
            age,
            medical_history,
        }
    }

    pub fn person(&self) -> &PersonDetails {
        &self.person
    }

    pub fn age(&self) -> Age {
        self.age
    }

    pub fn medical_history(&self) -> &MedicalHistory {
        &self.medical_history
    }
}

/// A specialist record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Specialist {
    person: PersonDetails,
    location: Location,
    specialty: Specialty,
}

impl Specialist {
    pub fn new(person: PersonDetails, location: Location, specialty: Specialty) -> Self {
        Self {
            person,
            location,
            specialty,
        }
    }

    pub fn person(&self) -> &PersonDetails {
        &self.person
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn specialty(&self) -> &Specialty {
        &self.specialty
    }
}

/// A record of either kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Record {
    Patient(Patient),
    Specialist(Specialist),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Patient(_) => RecordKind::Patient,
            Self::Specialist(_) => RecordKind::Specialist,
        }
    }

    pub fn person(&self) -> &PersonDetails {
        match self {
            Self::Patient(p) => p.person(),
            Self::Specialist(s) => s.person(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.person().name
    }

    pub fn phone(&self) -> &Phone {
        &self.person().phone
    }

    pub fn email(&self) -> &Email {
        &self.person().email
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.person().tags
    }

    /// Identity equality: true when both records describe the same person (same name and
    /// phone), regardless of kind or any other field.
    pub fn is_same_record(&self, other: &Record) -> bool {
        self.name() == other.name() && self.phone() == other.phone()
    }
}

impl From<Patient> for Record {
    fn from(patient: Patient) -> Self {
        Self::Patient(patient)
    }
}

impl From<Specialist> for Record {
    fn from(specialist: Specialist) -> Self {
        Self::Specialist(specialist)
    }
}

/// One-line summary used in command feedback.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let person = self.person();
        write!(
            f,
            "{}; Phone: {}; Email: {}",
            person.name, person.phone, person.email
        )?;
        match self {
            Self::Patient(p) => {
                write!(f, "; Age: {}; Medical History: {}", p.age, p.medical_history)?
            }
            Self::Specialist(s) => {
                write!(f, "; Location: {}; Specialty: {}", s.location, s.specialty)?
            }
        }
        if !person.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &person.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}
