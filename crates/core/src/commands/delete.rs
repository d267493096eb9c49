use super::{CommandResult, Index};
use crate::error::BookResult;
use crate::model::Model;
use std::collections::BTreeSet;

/// Deletes one or more displayed records.
///
/// All indices are resolved before anything is removed, so one bad index aborts the whole
/// command. Repeated indices refer to the same record and delete it once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteCommand {
    indices: Vec<Index>,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const USAGE: &'static str = "delete: Deletes the persons identified by the index numbers \
        used in the displayed list.\n\
        Parameters: INDEX [INDEX]... (each a positive integer)\n\
        Example: delete 1 3";

    pub fn new(indices: Vec<Index>) -> Self {
        Self { indices }
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        let unique: BTreeSet<Index> = self.indices.iter().copied().collect();
        let targets = unique
            .into_iter()
            .map(|index| index.resolve(&*model))
            .collect::<BookResult<Vec<_>>>()?;

        let mut lines = Vec::with_capacity(targets.len());
        for target in &targets {
            let removed = model.remove_record(target)?;
            lines.push(removed.to_string());
        }
        model.commit_history();
        tracing::debug!(count = targets.len(), "records deleted");

        Ok(CommandResult::message(format!(
            "Deleted Person(s):\n{}",
            lines.join("\n")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;
    use crate::model::ModelManager;
    use crate::record::Record;
    use crate::test_support::typical_book;

    fn indices(ns: &[usize]) -> Vec<Index> {
        ns.iter()
            .map(|n| Index::from_one_based(*n).unwrap())
            .collect()
    }

    fn three_record_model() -> ModelManager {
        let mut book = typical_book();
        let records: Vec<Record> = book.records()[..3].to_vec();
        book.set_records(records).unwrap();
        ModelManager::new(book)
    }

    #[test]
    fn any_invalid_index_aborts_everything() {
        let mut model = three_record_model();
        let before = model.address_book().clone();

        assert_eq!(
            DeleteCommand::new(indices(&[1, 5])).execute(&mut model),
            Err(BookError::InvalidIndex)
        );
        assert_eq!(*model.address_book(), before);
        assert_eq!(model.history().len(), 1);
        assert!(!model.can_undo());
    }

    #[test]
    fn deletes_several_with_one_commit() {
        let mut model = ModelManager::new(typical_book());
        let result = DeleteCommand::new(indices(&[4, 1, 2]))
            .execute(&mut model)
            .unwrap();

        let names: Vec<_> = model
            .address_book()
            .records()
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["Carl Kurz", "Elle Meyer"]);
        assert_eq!(model.history().len(), 2);
        assert_eq!(result.feedback.lines().count(), 4);

        model.undo().unwrap();
        assert_eq!(*model.address_book(), typical_book());
    }

    #[test]
    fn repeated_indices_delete_once() {
        let mut model = ModelManager::new(typical_book());
        DeleteCommand::new(indices(&[2, 2]))
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.address_book().records().len(), 4);
    }
}
