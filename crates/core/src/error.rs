use medbook_types::FieldError;

/// Every failure the engine reports.
///
/// The `Display` text of each variant is the message shown to the user; callers at the
/// execution boundary print it and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    #[error("{0}")]
    Validation(#[from] FieldError),
    #[error("This person already exists in the address book")]
    DuplicateRecord,
    #[error("The person could not be found in the address book")]
    RecordNotFound,
    #[error("The person type of the index does not match the edit command's person type")]
    KindMismatch,
    #[error("At least one field to edit must be provided.")]
    NoFieldsEdited,
    #[error("The person index provided is invalid")]
    InvalidIndex,
    #[error("No more commands to undo!")]
    NoUndoableState,
    #[error("No more commands to redo!")]
    NoRedoableState,
    #[error("The shortcut alias '{0}' already exists")]
    DuplicateAlias(String),
    #[error("The shortcut alias '{0}' does not exist")]
    UnknownAlias(String),

    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },
    #[error("Unknown command")]
    UnknownCommand,
    #[error("{0}")]
    Parse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("storage error: {0}")]
    Storage(String),
}

pub type BookResult<T> = std::result::Result<T, BookError>;
