//! Composed search predicates.
//!
//! [`FindPredicate`] combines per-field keyword lists into a single test over records:
//!
//! - a record must be of the predicate's kind;
//! - every field present in the map must match (conjunction across fields);
//! - a field matches if any one of its keywords matches (disjunction within a field).
//!
//! All comparisons are case-insensitive. How a single keyword matches depends on the field:
//!
//! | Field | Match |
//! |---|---|
//! | name | keyword equals one whitespace-separated word of the name |
//! | tag | keyword equals one tag |
//! | phone, age | keyword equals the value |
//! | email, location, medical history, specialty | keyword is a substring of the value |
//!
//! A predicate is a plain value: it holds no references into the collection and can be
//! evaluated any number of times. Two predicates are equal when their kind and keyword maps
//! are equal.

use crate::error::{BookError, BookResult};
use crate::record::{Record, RecordKind};
use std::collections::BTreeMap;
use std::fmt;

/// A record field that can be searched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchField {
    Name,
    Phone,
    Email,
    Location,
    Tag,
    Age,
    MedicalHistory,
    Specialty,
}

impl SearchField {
    pub const ALL: [SearchField; 8] = [
        Self::Name,
        Self::Phone,
        Self::Email,
        Self::Location,
        Self::Tag,
        Self::Age,
        Self::MedicalHistory,
        Self::Specialty,
    ];

    /// The command-line prefix that introduces this field (`n/`, `p/`, ...).
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Name => "n/",
            Self::Phone => "p/",
            Self::Email => "e/",
            Self::Location => "l/",
            Self::Tag => "t/",
            Self::Age => "a/",
            Self::MedicalHistory => "m/",
            Self::Specialty => "s/",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.prefix() == prefix)
    }

    /// Whether records of `kind` carry this field.
    pub const fn is_supported_by(self, kind: RecordKind) -> bool {
        match self {
            Self::Name | Self::Phone | Self::Email | Self::Tag => true,
            Self::Age | Self::MedicalHistory => matches!(kind, RecordKind::Patient),
            Self::Location | Self::Specialty => matches!(kind, RecordKind::Specialist),
        }
    }

    fn matches(self, record: &Record, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&keyword);

        match (self, record) {
            (Self::Name, _) => record.name().words().any(|w| w.to_lowercase() == keyword),
            (Self::Tag, _) => record
                .tags()
                .iter()
                .any(|t| t.as_str().to_lowercase() == keyword),
            (Self::Phone, _) => record.phone().as_str() == keyword,
            (Self::Email, _) => contains(record.email().as_str()),
            (Self::Age, Record::Patient(p)) => keyword
                .parse::<u64>()
                .is_ok_and(|years| years == u64::from(p.age().years())),
            (Self::MedicalHistory, Record::Patient(p)) => contains(p.medical_history().as_str()),
            (Self::Location, Record::Specialist(s)) => contains(s.location().as_str()),
            (Self::Specialty, Record::Specialist(s)) => contains(s.specialty().as_str()),
            _ => false,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Location => "location",
            Self::Tag => "tag",
            Self::Age => "age",
            Self::MedicalHistory => "medical history",
            Self::Specialty => "specialty",
        };
        f.write_str(label)
    }
}

/// Conjunction of per-field keyword disjunctions, restricted to one record kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindPredicate {
    kind: RecordKind,
    keywords: BTreeMap<SearchField, Vec<String>>,
}

impl FindPredicate {
    /// Composes a predicate for records of `kind`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Parse` if the map is empty, if a field is not carried by `kind`, or
    /// if a field has no non-blank keywords.
    pub fn new(
        kind: RecordKind,
        keywords: BTreeMap<SearchField, Vec<String>>,
    ) -> BookResult<Self> {
        if keywords.is_empty() {
            return Err(BookError::Parse(
                "At least one field to search by must be provided.".into(),
            ));
        }

        let mut cleaned = BTreeMap::new();
        for (field, words) in keywords {
            if !field.is_supported_by(kind) {
                return Err(BookError::Parse(format!(
                    "Cannot search {kind}s by {field} ({})",
                    field.prefix()
                )));
            }

            let words: Vec<String> = words
                .iter()
                .map(|w| w.trim())
                .filter(|w| !w.is_empty())
                .map(str::to_owned)
                .collect();
            if words.is_empty() {
                return Err(BookError::Parse(format!(
                    "Keywords for {field} ({}) cannot be empty",
                    field.prefix()
                )));
            }

            cleaned.insert(field, words);
        }

        Ok(Self {
            kind,
            keywords: cleaned,
        })
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn keywords(&self) -> &BTreeMap<SearchField, Vec<String>> {
        &self.keywords
    }

    pub fn test(&self, record: &Record) -> bool {
        record.kind() == self.kind
            && self
                .keywords
                .iter()
                .all(|(field, words)| words.iter().any(|w| field.matches(record, w)))
    }
}
