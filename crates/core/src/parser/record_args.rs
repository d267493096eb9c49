//! Parsing for the commands that carry record fields: `add`, `edit` and `find`.

use super::parse_index;
use super::syntax::*;
use super::tokenizer::{tokenize, ArgumentMultimap};
use crate::commands::{AddCommand, EditCommand, FindCommand};
use crate::descriptor::{
    EditDescriptor, EditPatientDescriptor, EditPersonDescriptor, EditSpecialistDescriptor,
};
use crate::error::{BookError, BookResult};
use crate::predicate::{FindPredicate, SearchField};
use crate::record::{Patient, PersonDetails, RecordKind, Specialist};
use medbook_types::{Age, Email, Location, MedicalHistory, Name, Phone, Specialty, Tag};
use std::collections::{BTreeMap, BTreeSet};

/// Kind-specific prefixes that records of `kind` do not carry.
fn foreign_prefixes(kind: RecordKind) -> [&'static str; 2] {
    match kind {
        RecordKind::Patient => [PREFIX_LOCATION, PREFIX_SPECIALTY],
        RecordKind::Specialist => [PREFIX_AGE, PREFIX_MEDICAL_HISTORY],
    }
}

/// Every prefix except `t/`, which may repeat.
const SINGLE_VALUED: [&str; 7] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_LOCATION,
    PREFIX_AGE,
    PREFIX_MEDICAL_HISTORY,
    PREFIX_SPECIALTY,
];

fn required<'a>(
    map: &'a ArgumentMultimap,
    prefix: &str,
    usage: &'static str,
) -> BookResult<&'a str> {
    map.value(prefix)
        .ok_or(BookError::InvalidCommandFormat { usage })
}

fn parse_tags(values: &[String]) -> BookResult<BTreeSet<Tag>> {
    values
        .iter()
        .map(|v| Tag::parse(v).map_err(BookError::from))
        .collect()
}

pub(super) fn parse_add(args: &str) -> BookResult<AddCommand> {
    let usage = AddCommand::USAGE;
    let map = tokenize(args, &RECORD_PREFIXES);
    let kind = RecordKind::from_flag(map.preamble())
        .ok_or(BookError::InvalidCommandFormat { usage })?;

    if foreign_prefixes(kind).iter().any(|p| map.contains(p)) {
        return Err(BookError::InvalidCommandFormat { usage });
    }
    map.verify_no_duplicates(&SINGLE_VALUED)?;

    let person = PersonDetails::new(
        Name::parse(required(&map, PREFIX_NAME, usage)?)?,
        Phone::parse(required(&map, PREFIX_PHONE, usage)?)?,
        Email::parse(required(&map, PREFIX_EMAIL, usage)?)?,
        parse_tags(map.all_values(PREFIX_TAG))?,
    );

    let record = match kind {
        RecordKind::Patient => Patient::new(
            person,
            Age::parse(required(&map, PREFIX_AGE, usage)?)?,
            MedicalHistory::parse(required(&map, PREFIX_MEDICAL_HISTORY, usage)?)?,
        )
        .into(),
        RecordKind::Specialist => Specialist::new(
            person,
            Location::parse(required(&map, PREFIX_LOCATION, usage)?)?,
            Specialty::parse(required(&map, PREFIX_SPECIALTY, usage)?)?,
        )
        .into(),
    };

    Ok(AddCommand::new(record))
}

pub(super) fn parse_edit(args: &str) -> BookResult<EditCommand> {
    let usage = EditCommand::USAGE;
    let map = tokenize(args, &RECORD_PREFIXES);

    let mut words = map.preamble().split_whitespace();
    let (Some(flag), Some(index), None) = (words.next(), words.next(), words.next()) else {
        return Err(BookError::InvalidCommandFormat { usage });
    };
    let kind = RecordKind::from_flag(flag).ok_or(BookError::InvalidCommandFormat { usage })?;
    let index = parse_index(index)?;

    if foreign_prefixes(kind).iter().any(|p| map.contains(p)) {
        return Err(BookError::InvalidCommandFormat { usage });
    }
    map.verify_no_duplicates(&SINGLE_VALUED)?;

    let tags = match map.all_values(PREFIX_TAG) {
        [] => None,
        [only] if only.is_empty() => Some(BTreeSet::new()),
        values => Some(parse_tags(values)?),
    };
    let person = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::parse).transpose()?,
        tags,
    };

    let descriptor: EditDescriptor = match kind {
        RecordKind::Patient => EditPatientDescriptor {
            person,
            age: map.value(PREFIX_AGE).map(Age::parse).transpose()?,
            medical_history: map
                .value(PREFIX_MEDICAL_HISTORY)
                .map(MedicalHistory::parse)
                .transpose()?,
        }
        .into(),
        RecordKind::Specialist => EditSpecialistDescriptor {
            person,
            location: map.value(PREFIX_LOCATION).map(Location::parse).transpose()?,
            specialty: map
                .value(PREFIX_SPECIALTY)
                .map(Specialty::parse)
                .transpose()?,
        }
        .into(),
    };

    Ok(EditCommand::new(index, descriptor))
}

pub(super) fn parse_find(args: &str) -> BookResult<FindCommand> {
    let usage = FindCommand::USAGE;
    let map = tokenize(args, &RECORD_PREFIXES);
    let kind = RecordKind::from_flag(map.preamble())
        .ok_or(BookError::InvalidCommandFormat { usage })?;

    let mut keywords = BTreeMap::new();
    for prefix in map.present() {
        let field =
            SearchField::from_prefix(prefix).ok_or(BookError::InvalidCommandFormat { usage })?;
        let words: Vec<String> = map
            .all_values(prefix)
            .iter()
            .flat_map(|v| v.split_whitespace())
            .map(str::to_owned)
            .collect();
        keywords.insert(field, words);
    }
    if keywords.is_empty() {
        return Err(BookError::InvalidCommandFormat { usage });
    }

    Ok(FindCommand::new(FindPredicate::new(kind, keywords)?))
}
