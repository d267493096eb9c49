//! User-defined command aliases.

use crate::commands::is_command_word;
use crate::error::{BookError, BookResult};
use medbook_types::NonEmptyText;
use std::collections::BTreeMap;

/// Alias → expansion mapping. Aliases are unique.
///
/// An expansion replaces the alias when it appears as the first word of a command, e.g.
/// `ls` → `list -pa`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortcutSettings {
    aliases: BTreeMap<String, NonEmptyText>,
}

impl ShortcutSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks an alias and its expansion before they are mapped, returning the trimmed
    /// alias and the expansion text.
    ///
    /// The alias must be a single alphanumeric word that is not a built-in command word, so it
    /// can never shadow one. The expansion must start with a built-in command word.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Parse` for a malformed alias or expansion, or
    /// `BookError::Validation` for a blank expansion.
    pub fn validate(alias: &str, expansion: &str) -> BookResult<(String, NonEmptyText)> {
        let alias = alias.trim();
        if alias.is_empty()
            || !alias.chars().all(|c| c.is_ascii_alphanumeric())
            || is_command_word(alias)
        {
            return Err(BookError::Parse(
                "Shortcut aliases should be a single alphanumeric word that is not a command word"
                    .into(),
            ));
        }

        let expansion = NonEmptyText::new(expansion)?;
        let leading = expansion.as_str().split_whitespace().next().unwrap_or_default();
        if !is_command_word(leading) {
            return Err(BookError::Parse(
                "Shortcut expansions must start with a command word".into(),
            ));
        }

        Ok((alias.to_owned(), expansion))
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.aliases.contains_key(alias)
    }

    /// # Errors
    ///
    /// Returns `BookError::DuplicateAlias` if `alias` is already mapped.
    pub fn add(&mut self, alias: impl Into<String>, expansion: NonEmptyText) -> BookResult<()> {
        let alias = alias.into();
        if self.aliases.contains_key(&alias) {
            return Err(BookError::DuplicateAlias(alias));
        }
        self.aliases.insert(alias, expansion);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `BookError::UnknownAlias` if `alias` is not mapped.
    pub fn remove(&mut self, alias: &str) -> BookResult<NonEmptyText> {
        self.aliases
            .remove(alias)
            .ok_or_else(|| BookError::UnknownAlias(alias.to_owned()))
    }

    pub fn expand(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(NonEmptyText::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, e)| (a.as_str(), e.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
