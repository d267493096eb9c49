//! Identity and contact fields: name, phone number and email address.

use crate::{deserialize_parsed, FieldError};
use std::fmt;

/// A person's name: alphanumeric words separated by spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Parses a name, rejecting blank input and anything other than ASCII letters, digits and
    /// spaces.
    pub fn parse(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FieldError::Name);
        }

        let ok = trimmed
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b' ');
        if !ok {
            return Err(FieldError::Name);
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated words of the name, as used by whole-word search.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// A phone number: at least [`Phone::MIN_DIGITS`] ASCII digits and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MIN_DIGITS: usize = 3;

    pub fn parse(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        if trimmed.len() < Self::MIN_DIGITS || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::Phone);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An email address of the form `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parses an email address.
    ///
    /// - local part: ASCII alphanumerics and `+_.-`; it must start and end with an
    ///   alphanumeric and may not contain two special characters in a row
    /// - domain: labels separated by `.`; each label is alphanumeric with optional internal
    ///   hyphens; the last label is at least two characters long
    pub fn parse(input: impl AsRef<str>) -> Result<Self, FieldError> {
        let trimmed = input.as_ref().trim();
        let (local, domain) = trimmed.split_once('@').ok_or(FieldError::Email)?;

        if !is_valid_local_part(local) || !is_valid_domain(domain) {
            return Err(FieldError::Email);
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_local_part(local: &str) -> bool {
    let special = |b: u8| matches!(b, b'+' | b'_' | b'.' | b'-');
    let bytes = local.as_bytes();

    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };
    if !first.is_ascii_alphanumeric() || !last.is_ascii_alphanumeric() {
        return false;
    }
    if !bytes.iter().all(|&b| b.is_ascii_alphanumeric() || special(b)) {
        return false;
    }

    !bytes.windows(2).any(|w| special(w[0]) && special(w[1]))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();

    let labels_ok = labels.iter().all(|label| {
        let bytes = label.as_bytes();
        match (bytes.first(), bytes.last()) {
            (Some(first), Some(last)) => {
                first.is_ascii_alphanumeric()
                    && last.is_ascii_alphanumeric()
                    && bytes.iter().all(|&b| b.is_ascii_alphanumeric() || b == b'-')
            }
            _ => false,
        }
    });

    labels_ok && labels.last().is_some_and(|last| last.len() >= 2)
}

macro_rules! string_field_impls {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserialize_parsed(deserializer, |s| <$ty>::parse(s))
            }
        }
    };
}

string_field_impls!(Name);
string_field_impls!(Phone);
string_field_impls!(Email);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_alphanumeric_words() {
        assert_eq!(Name::parse("  Amy Bee 2 ").unwrap().as_str(), "Amy Bee 2");
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert_eq!(Name::parse("   "), Err(FieldError::Name));
        assert_eq!(Name::parse("peter*"), Err(FieldError::Name));
    }

    #[test]
    fn name_words_split_on_whitespace() {
        let name = Name::parse("Bob  Lee").unwrap();
        assert_eq!(name.words().collect::<Vec<_>>(), vec!["Bob", "Lee"]);
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("911").is_ok());
        assert_eq!(Phone::parse("91"), Err(FieldError::Phone));
        assert_eq!(Phone::parse("9011p041"), Err(FieldError::Phone));
        assert_eq!(Phone::parse("9312 1534"), Err(FieldError::Phone));
    }

    #[test]
    fn email_accepts_common_forms() {
        for ok in [
            "amy@example.com",
            "a+b_c.d-e@example.com",
            "peter_jack@very-very-long-example.com",
            "a1@example1.co",
            "PeterJack_1190@example.com",
            "e1@e.com.sg",
        ] {
            assert!(Email::parse(ok).is_ok(), "expected {ok} to be valid");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in [
            "",
            "@example.com",
            "peterjack@",
            "peterjackexample.com",
            "peterjack@-example.com",
            "peterjack@example-.com",
            "peterjack@example.c",
            "peterjack@example..com",
            "-peterjack@example.com",
            "peterjack-@example.com",
            "peter..jack@example.com",
            "peter jack@example.com",
            "peterjack@exam_ple.com",
            "peter@jack@example.com",
        ] {
            assert_eq!(Email::parse(bad), Err(FieldError::Email), "{bad}");
        }
    }

    #[test]
    fn deserialize_rejects_invalid_phone() {
        let err = serde_json::from_str::<Phone>("\"12a\"").unwrap_err();
        assert!(err.to_string().contains("Phone numbers"));
    }

    #[test]
    fn serialises_as_plain_string() {
        let email = Email::parse("amy@example.com").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"amy@example.com\"");
    }
}
