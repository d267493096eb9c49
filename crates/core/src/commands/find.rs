use super::CommandResult;
use crate::error::BookResult;
use crate::model::{Model, RecordFilter};
use crate::predicate::FindPredicate;

/// Narrows the displayed list to records of one kind matching a composed predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FindCommand {
    predicate: FindPredicate,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const USAGE: &'static str = "find: Finds all patients or specialists whose fields match \
        the given keywords (case-insensitive) and lists them with index numbers.\n\
        Every given field must match; within a field any keyword may match.\n\
        Patient: find -pa [n/NAME] [p/PHONE] [e/EMAIL] [a/AGE] [m/MEDICAL_HISTORY] [t/TAG]...\n\
        Specialist: find -sp [n/NAME] [p/PHONE] [e/EMAIL] [l/LOCATION] [s/SPECIALTY] [t/TAG]...\n\
        Example: find -sp n/alice bob s/Physiotherapist";

    pub fn new(predicate: FindPredicate) -> Self {
        Self { predicate }
    }

    pub fn predicate(&self) -> &FindPredicate {
        &self.predicate
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        model.update_filter(RecordFilter::Matching(self.predicate.clone()));
        let shown = model.displayed_records().len();
        Ok(CommandResult::message(format!("{shown} persons listed!")))
    }
}
