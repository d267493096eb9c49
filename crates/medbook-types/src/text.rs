//! Free-text and small value fields: tags, age and the kind-specific text fields.

use crate::{deserialize_parsed, FieldError};
use std::fmt;

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declares a non-blank text field that reports its own constraint message.
macro_rules! non_blank_field {
    ($(#[$meta:meta])* $name:ident, $err:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(NonEmptyText);

        impl $name {
            pub fn parse(input: impl AsRef<str>) -> Result<Self, FieldError> {
                NonEmptyText::new(input).map(Self).map_err(|_| $err)
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserialize_parsed(deserializer, |s| $name::parse(s))
            }
        }
    };
}

non_blank_field!(
    /// Where a specialist practises.
    Location,
    FieldError::Location
);
non_blank_field!(
    /// A patient's medical history summary.
    MedicalHistory,
    FieldError::MedicalHistory
);
non_blank_field!(
    /// A specialist's area of practice.
    Specialty,
    FieldError::Specialty
);

/// A single alphanumeric label attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn parse(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(FieldError::Tag);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

impl serde::Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserialize_parsed(deserializer, |s| Tag::parse(s))
    }
}

/// A patient's age in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Age(u8);

impl Age {
    pub const MAX: u8 = 150;

    pub fn new(years: u64) -> Result<Self, FieldError> {
        u8::try_from(years)
            .ok()
            .filter(|y| *y <= Self::MAX)
            .map(Self)
            .ok_or(FieldError::Age)
    }

    /// Parses a decimal age such as `"42"`. Signs and fractions are rejected.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::Age);
        }
        let years = trimmed.parse::<u64>().map_err(|_| FieldError::Age)?;
        Self::new(years)
    }

    pub fn years(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Age {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Age {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let years = <u64 as serde::Deserialize>::deserialize(deserializer)?;
        Age::new(years).map_err(serde::de::Error::custom)
    }
}
