//! Splits argument text into a preamble and prefixed values.
//!
//! Given ` -pa 1 n/Amy Bee t/a t/b` and the prefixes `n/` and `t/`, the result is the preamble
//! `-pa 1` plus `n/ → ["Amy Bee"]` and `t/ → ["a", "b"]`. A prefix only counts when it starts
//! the text or follows whitespace, so `al/` is never mistaken for `l/`. Values are trimmed
//! and run up to the next recognised prefix.

use crate::error::{BookError, BookResult};
use std::collections::BTreeMap;

/// Tokenised arguments of one command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: BTreeMap<&'static str, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.values.contains_key(prefix)
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: &str) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order.
    pub fn all_values(&self, prefix: &str) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Prefixes that occurred at least once.
    pub fn present(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    /// # Errors
    ///
    /// Returns `BookError::Parse` naming every prefix in `prefixes` that occurs more than once.
    pub fn verify_no_duplicates(&self, prefixes: &[&str]) -> BookResult<()> {
        let repeated: Vec<&str> = prefixes
            .iter()
            .copied()
            .filter(|p| self.all_values(p).len() > 1)
            .collect();

        if repeated.is_empty() {
            Ok(())
        } else {
            Err(BookError::Parse(format!(
                "Multiple values specified for the following single-valued field(s): {}",
                repeated.join(" ")
            )))
        }
    }
}

pub fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, &'static str)> = Vec::new();
    for &prefix in prefixes {
        let mut from = 0;
        while let Some(offset) = args[from..].find(prefix) {
            let at = from + offset;
            let boundary = args[..at]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if boundary {
                positions.push((at, prefix));
            }
            from = at + prefix.len();
        }
    }
    positions.sort_unstable_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_owned(),
        values: BTreeMap::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_owned());
    }

    map
}
