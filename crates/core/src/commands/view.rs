use super::{CommandResult, Index};
use crate::error::BookResult;
use crate::model::Model;

/// Selects a displayed record and shows its full details.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewCommand {
    index: Index,
}

impl ViewCommand {
    pub const COMMAND_WORD: &'static str = "view";
    pub const USAGE: &'static str = "view: Shows the full details of the person at INDEX in the \
        displayed list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: view 2";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        let record = self.index.resolve(&*model)?;
        let feedback = format!("Viewing Person: {record}");
        model.select_record(Some(record));
        Ok(CommandResult::message(feedback))
    }
}
