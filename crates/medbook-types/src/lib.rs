//! Validated field types shared by the MedBook crates.
//!
//! Every type in this crate can only be constructed through a `parse`/`new` function that
//! enforces the field's format rule, so a value that exists is a value that is valid. Records
//! are assembled from these values and never re-validate them.
//!
//! All constructors trim leading and trailing whitespace before validating.

mod contact;
mod text;

pub use contact::{Email, Name, Phone};
pub use text::{Age, Location, MedicalHistory, NonEmptyText, Specialty, Tag};

/// Errors that can occur when creating validated field types.
///
/// The `Display` text of each variant is the user-facing constraint message for that field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    Name,
    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    Phone,
    #[error(
        "Emails should be of the format local-part@domain. The local-part should only contain \
         alphanumeric characters and the special characters +_.- and may not start or end with \
         a special character. The domain is made up of labels separated by periods, each label \
         starts and ends with an alphanumeric character, and the last label is at least 2 \
         characters long"
    )]
    Email,
    #[error("Tag names should be a single alphanumeric word")]
    Tag,
    #[error("Age should be a whole number between 0 and {max}", max = Age::MAX)]
    Age,
    #[error("Locations can take any values, and it should not be blank")]
    Location,
    #[error("Medical history can take any values, and it should not be blank")]
    MedicalHistory,
    #[error("Specialty can take any values, and it should not be blank")]
    Specialty,
}

/// Deserialize a string and run it through a validating constructor.
///
/// Used by the `Deserialize` impls of the string-backed field types so that a stored value
/// failing its format rule is reported as a deserialisation error rather than accepted.
fn deserialize_parsed<'de, D, T>(
    deserializer: D,
    parse: fn(&str) -> Result<T, FieldError>,
) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = <String as serde::Deserialize>::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}
