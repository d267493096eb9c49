use super::{
    AddCommand, AddShortcutCommand, CommandResult, DeleteCommand, DeleteShortcutCommand,
    EditCommand, FindCommand, ListCommand, ViewCommand,
};
use crate::error::BookResult;
use crate::model::Model;

/// Shows the command summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const USAGE: &'static str = "help: Shows the usage of every command.\n\
        Example: help";

    /// One paragraph per command.
    pub fn summary() -> String {
        [
            AddCommand::USAGE,
            EditCommand::USAGE,
            FindCommand::USAGE,
            DeleteCommand::USAGE,
            ListCommand::USAGE,
            ViewCommand::USAGE,
            "clear: Deletes every person. Shortcuts are kept.",
            "undo: Reverts the last change.\nredo: Reapplies the last undone change.",
            AddShortcutCommand::USAGE,
            DeleteShortcutCommand::USAGE,
            "help: Shows this message.\nexit: Exits the program.",
        ]
        .join("\n\n")
    }

    pub fn execute(&self, _model: &mut dyn Model) -> BookResult<CommandResult> {
        Ok(CommandResult {
            show_help: true,
            ..CommandResult::message(Self::summary())
        })
    }
}

/// Ends the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";

    pub fn execute(&self, _model: &mut dyn Model) -> BookResult<CommandResult> {
        Ok(CommandResult {
            exit: true,
            ..CommandResult::message("Exiting MedBook as requested ...")
        })
    }
}
