//! Executable commands.
//!
//! Each command is a plain value produced by the parser. Executing one takes the model by
//! `&mut dyn Model`, validates against its current contents, mutates it (or only reads it)
//! and reports a [`CommandResult`]. Commands that change the collection commit history exactly
//! once, after the whole change has succeeded; a command that fails leaves both the collection
//! and history untouched.

mod add;
mod clear;
mod delete;
mod edit;
mod find;
mod help;
mod list;
mod shortcut;
mod undo_redo;
mod view;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use find::FindCommand;
pub use help::{ExitCommand, HelpCommand};
pub use list::ListCommand;
pub use shortcut::{AddShortcutCommand, DeleteShortcutCommand};
pub use undo_redo::{RedoCommand, UndoCommand};
pub use view::ViewCommand;

use crate::error::{BookError, BookResult};
use crate::model::Model;
use crate::record::Record;
use std::fmt;
use std::num::NonZeroUsize;

/// Every built-in command word. Shortcut aliases may not shadow these.
pub const COMMAND_WORDS: [&str; 13] = [
    AddCommand::COMMAND_WORD,
    EditCommand::COMMAND_WORD,
    FindCommand::COMMAND_WORD,
    DeleteCommand::COMMAND_WORD,
    ListCommand::COMMAND_WORD,
    ViewCommand::COMMAND_WORD,
    ClearCommand::COMMAND_WORD,
    UndoCommand::COMMAND_WORD,
    RedoCommand::COMMAND_WORD,
    AddShortcutCommand::COMMAND_WORD,
    DeleteShortcutCommand::COMMAND_WORD,
    HelpCommand::COMMAND_WORD,
    ExitCommand::COMMAND_WORD,
];

pub fn is_command_word(word: &str) -> bool {
    COMMAND_WORDS.contains(&word)
}

/// What the presentation layer should show or do after a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
    /// Set when the command took effect but the collection could not be saved afterwards.
    pub save_error: Option<String>,
}

impl CommandResult {
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            save_error: None,
        }
    }
}

/// A 1-based position in the displayed record list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(position: usize) -> Option<Self> {
        NonZeroUsize::new(position).map(Self)
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }

    /// The displayed record at this position.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidIndex` if the position is past the end of the displayed list.
    fn resolve(self, model: &dyn Model) -> BookResult<Record> {
        model
            .displayed_records()
            .get(self.zero_based())
            .map(|r| (*r).clone())
            .ok_or(BookError::InvalidIndex)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A parsed command, ready to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Find(FindCommand),
    Delete(DeleteCommand),
    List(ListCommand),
    View(ViewCommand),
    Clear(ClearCommand),
    Undo(UndoCommand),
    Redo(RedoCommand),
    AddShortcut(AddShortcutCommand),
    DeleteShortcut(DeleteShortcutCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Self::Add(_) => AddCommand::COMMAND_WORD,
            Self::Edit(_) => EditCommand::COMMAND_WORD,
            Self::Find(_) => FindCommand::COMMAND_WORD,
            Self::Delete(_) => DeleteCommand::COMMAND_WORD,
            Self::List(_) => ListCommand::COMMAND_WORD,
            Self::View(_) => ViewCommand::COMMAND_WORD,
            Self::Clear(_) => ClearCommand::COMMAND_WORD,
            Self::Undo(_) => UndoCommand::COMMAND_WORD,
            Self::Redo(_) => RedoCommand::COMMAND_WORD,
            Self::AddShortcut(_) => AddShortcutCommand::COMMAND_WORD,
            Self::DeleteShortcut(_) => DeleteShortcutCommand::COMMAND_WORD,
            Self::Help(_) => HelpCommand::COMMAND_WORD,
            Self::Exit(_) => ExitCommand::COMMAND_WORD,
        }
    }

    pub fn execute(&self, model: &mut dyn Model) -> BookResult<CommandResult> {
        match self {
            Self::Add(c) => c.execute(model),
            Self::Edit(c) => c.execute(model),
            Self::Find(c) => c.execute(model),
            Self::Delete(c) => c.execute(model),
            Self::List(c) => c.execute(model),
            Self::View(c) => c.execute(model),
            Self::Clear(c) => c.execute(model),
            Self::Undo(c) => c.execute(model),
            Self::Redo(c) => c.execute(model),
            Self::AddShortcut(c) => c.execute(model),
            Self::DeleteShortcut(c) => c.execute(model),
            Self::Help(c) => c.execute(model),
            Self::Exit(c) => c.execute(model),
        }
    }
}
