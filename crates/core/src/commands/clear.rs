use super::CommandResult;
use crate::error::BookResult;
use crate::model::{Model, RecordFilter};

/// Removes every record. Shortcuts survive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        model.clear_records();
        model.update_filter(RecordFilter::All);
        model.commit_history();
        Ok(CommandResult::message("Address book has been cleared!"))
    }
}
