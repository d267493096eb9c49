//! Command-text parsing.
//!
//! [`parse_command`] turns one line of user input into a [`Command`]. The first word selects
//! the command; if it is a shortcut alias it is replaced by the alias's expansion first, with
//! any remaining text appended.

mod record_args;
pub mod syntax;
mod tokenizer;

pub use tokenizer::{tokenize, ArgumentMultimap};

use crate::commands::{
    AddCommand, AddShortcutCommand, ClearCommand, Command, DeleteCommand, DeleteShortcutCommand,
    EditCommand, ExitCommand, FindCommand, HelpCommand, Index, ListCommand, RedoCommand,
    UndoCommand, ViewCommand,
};
use crate::error::{BookError, BookResult};
use crate::record::RecordKind;
use crate::shortcuts::ShortcutSettings;
use syntax::{PREFIX_ALIAS, PREFIX_COMMAND_WORD};

/// Parses a 1-based index.
///
/// # Errors
///
/// Returns `BookError::Parse` unless `text` is a positive integer.
pub fn parse_index(text: &str) -> BookResult<Index> {
    text.trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| BookError::Parse("Index is not a non-zero unsigned integer.".into()))
}

/// Splits off the first word; the remainder keeps its leading whitespace.
fn split_command_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(at) => (&text[..at], &text[at..]),
        None => (text, ""),
    }
}

/// Parses one line of input, expanding a leading shortcut alias.
///
/// # Errors
///
/// - `BookError::InvalidCommandFormat` for blank input or malformed arguments.
/// - `BookError::UnknownCommand` if the first word is neither a command nor an alias.
/// - `BookError::Parse` or `BookError::Validation` for bad argument values.
pub fn parse_command(input: &str, shortcuts: &ShortcutSettings) -> BookResult<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BookError::InvalidCommandFormat {
            usage: HelpCommand::USAGE,
        });
    }

    let expanded;
    let (word, args) = match split_command_word(input) {
        (alias, rest) if shortcuts.contains(alias) => {
            let expansion = shortcuts.expand(alias).unwrap_or(alias);
            tracing::debug!(alias, expansion, "expanding shortcut");
            expanded = format!("{expansion}{rest}");
            split_command_word(&expanded)
        }
        split => split,
    };

    let command = match word {
        AddCommand::COMMAND_WORD => Command::Add(record_args::parse_add(args)?),
        EditCommand::COMMAND_WORD => Command::Edit(record_args::parse_edit(args)?),
        FindCommand::COMMAND_WORD => Command::Find(record_args::parse_find(args)?),
        DeleteCommand::COMMAND_WORD => Command::Delete(parse_delete(args)?),
        ListCommand::COMMAND_WORD => Command::List(parse_list(args)?),
        ViewCommand::COMMAND_WORD => Command::View(parse_view(args)?),
        ClearCommand::COMMAND_WORD => Command::Clear(ClearCommand),
        UndoCommand::COMMAND_WORD => Command::Undo(UndoCommand),
        RedoCommand::COMMAND_WORD => Command::Redo(RedoCommand),
        AddShortcutCommand::COMMAND_WORD => Command::AddShortcut(parse_add_shortcut(args)?),
        DeleteShortcutCommand::COMMAND_WORD => {
            Command::DeleteShortcut(parse_delete_shortcut(args)?)
        }
        HelpCommand::COMMAND_WORD => Command::Help(HelpCommand),
        ExitCommand::COMMAND_WORD => Command::Exit(ExitCommand),
        _ => return Err(BookError::UnknownCommand),
    };
    Ok(command)
}

fn parse_delete(args: &str) -> BookResult<DeleteCommand> {
    let indices = args
        .split_whitespace()
        .map(parse_index)
        .collect::<BookResult<Vec<_>>>()?;
    if indices.is_empty() {
        return Err(BookError::InvalidCommandFormat {
            usage: DeleteCommand::USAGE,
        });
    }
    Ok(DeleteCommand::new(indices))
}

fn parse_list(args: &str) -> BookResult<ListCommand> {
    match args.trim() {
        "" => Ok(ListCommand::new(None)),
        flag => RecordKind::from_flag(flag)
            .map(|kind| ListCommand::new(Some(kind)))
            .ok_or(BookError::InvalidCommandFormat {
                usage: ListCommand::USAGE,
            }),
    }
}

fn parse_view(args: &str) -> BookResult<ViewCommand> {
    let args = args.trim();
    if args.is_empty() || args.contains(char::is_whitespace) {
        return Err(BookError::InvalidCommandFormat {
            usage: ViewCommand::USAGE,
        });
    }
    Ok(ViewCommand::new(parse_index(args)?))
}

fn parse_add_shortcut(args: &str) -> BookResult<AddShortcutCommand> {
    let usage = AddShortcutCommand::USAGE;
    let map = tokenize(args, &[PREFIX_ALIAS, PREFIX_COMMAND_WORD]);
    if !map.preamble().is_empty() {
        return Err(BookError::InvalidCommandFormat { usage });
    }
    map.verify_no_duplicates(&[PREFIX_ALIAS, PREFIX_COMMAND_WORD])?;

    match (map.value(PREFIX_ALIAS), map.value(PREFIX_COMMAND_WORD)) {
        (Some(alias), Some(expansion)) => AddShortcutCommand::new(alias, expansion),
        _ => Err(BookError::InvalidCommandFormat { usage }),
    }
}

fn parse_delete_shortcut(args: &str) -> BookResult<DeleteShortcutCommand> {
    let usage = DeleteShortcutCommand::USAGE;
    let map = tokenize(args, &[PREFIX_ALIAS]);
    let aliases = map.all_values(PREFIX_ALIAS);
    if !map.preamble().is_empty() || aliases.is_empty() || aliases.iter().any(String::is_empty) {
        return Err(BookError::InvalidCommandFormat { usage });
    }
    Ok(DeleteShortcutCommand::new(aliases.to_vec()))
}
