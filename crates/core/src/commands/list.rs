use super::CommandResult;
use crate::error::BookResult;
use crate::model::{Model, RecordFilter};
use crate::record::RecordKind;

/// Shows every record, or every record of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListCommand {
    kind: Option<RecordKind>,
}

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const USAGE: &'static str = "list: Lists all persons, or only patients (-pa) or \
        specialists (-sp).\n\
        Example: list -sp";

    pub fn new(kind: Option<RecordKind>) -> Self {
        Self { kind }
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        let (filter, feedback) = match self.kind {
            None => (RecordFilter::All, "Listed all persons"),
            Some(RecordKind::Patient) => (
                RecordFilter::Kind(RecordKind::Patient),
                "Listed all patients",
            ),
            Some(RecordKind::Specialist) => (
                RecordFilter::Kind(RecordKind::Specialist),
                "Listed all specialists",
            ),
        };
        model.update_filter(filter);
        Ok(CommandResult::message(feedback))
    }
}
