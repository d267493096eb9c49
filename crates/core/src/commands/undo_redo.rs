use super::CommandResult;
use crate::error::BookResult;
use crate::model::Model;

/// Reverts the most recent committed change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    pub const COMMAND_WORD: &'static str = "undo";

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        model.undo()?;
        Ok(CommandResult::message("Undo success!"))
    }
}

/// Reapplies the most recently undone change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedoCommand;

impl RedoCommand {
    pub const COMMAND_WORD: &'static str = "redo";

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        model.redo()?;
        Ok(CommandResult::message("Redo success!"))
    }
}
