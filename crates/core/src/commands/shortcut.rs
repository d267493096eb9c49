use super::CommandResult;
use crate::error::{BookError, BookResult};
use crate::model::Model;
use crate::shortcuts::ShortcutSettings;
use medbook_types::NonEmptyText;

/// Maps a new alias onto a command expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddShortcutCommand {
    alias: String,
    expansion: NonEmptyText,
}

impl AddShortcutCommand {
    pub const COMMAND_WORD: &'static str = "addsc";
    pub const USAGE: &'static str = "addsc: Adds a shortcut alias for a command.\n\
        Parameters: al/ALIAS cw/COMMAND\n\
        Example: addsc al/lp cw/list -pa";

    /// # Errors
    ///
    /// Returns `BookError::Parse` if the alias is not a single alphanumeric word, if it
    /// shadows a built-in command word, or if the expansion does not start with one.
    pub fn new(alias: &str, expansion: &str) -> BookResult<Self> {
        let (alias, expansion) = ShortcutSettings::validate(alias, expansion)?;
        Ok(Self { alias, expansion })
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        model.add_shortcut(&self.alias, self.expansion.clone())?;
        model.commit_history();
        Ok(CommandResult::message(format!(
            "New shortcut added: {} -> {}",
            self.alias, self.expansion
        )))
    }
}

/// Removes one or more aliases.
///
/// Every alias must exist; otherwise nothing is removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteShortcutCommand {
    aliases: Vec<String>,
}

impl DeleteShortcutCommand {
    pub const COMMAND_WORD: &'static str = "delsc";
    pub const USAGE: &'static str = "delsc: Deletes one or more shortcut aliases.\n\
        Parameters: al/ALIAS [al/ALIAS]...\n\
        Example: delsc al/lp al/ls";

    pub fn new(aliases: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(aliases.len());
        for alias in aliases {
            let alias = alias.trim().to_owned();
            if !unique.contains(&alias) {
                unique.push(alias);
            }
        }
        Self { aliases: unique }
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        if let Some(missing) = self.aliases.iter().find(|a| !model.shortcuts().contains(a)) {
            return Err(BookError::UnknownAlias(missing.clone()));
        }

        for alias in &self.aliases {
            model.remove_shortcut(alias)?;
        }
        model.commit_history();

        Ok(CommandResult::message(format!(
            "Deleted shortcut(s): {}",
            self.aliases.join(", ")
        )))
    }
}
