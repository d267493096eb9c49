//! Snapshot-based undo/redo.
//!
//! [`TrackedAddressBook`] wraps the live [`AddressBook`] with an append-only list of
//! snapshots and a pointer to the snapshot that matches the live state:
//!
//! ```text
//! states:  [s0] [s1] [s2] [s3]
//!                      ^
//!                   pointer
//! ```
//!
//! - `commit` drops every snapshot after the pointer, appends a copy of the live book and
//!   moves the pointer onto it. It is the only way the list grows.
//! - `undo` moves the pointer back one and copies that snapshot into the live book.
//! - `redo` moves the pointer forward one and does the same.
//!
//! The pointer is always a valid index and `s0` (the state the history was created with)
//! can never be undone past. Whether the history is at its oldest, newest or somewhere in
//! between is derived from the pointer and length alone.
//!
//! Snapshots are whole copies of the book. That costs memory per commit but makes every
//! restored state exactly the state that was captured.

use crate::address_book::AddressBook;
use crate::error::{BookError, BookResult};
use std::ops::Deref;

/// An [`AddressBook`] that keeps track of its own history.
#[derive(Clone, Debug)]
pub struct TrackedAddressBook {
    current: AddressBook,
    states: Vec<AddressBook>,
    pointer: usize,
}

impl TrackedAddressBook {
    pub fn new(initial: AddressBook) -> Self {
        Self {
            states: vec![initial.clone()],
            current: initial,
            pointer: 0,
        }
    }

    /// Mutable access to the live book. Changes become undoable once committed.
    pub fn current_mut(&mut self) -> &mut AddressBook {
        &mut self.current
    }

    /// Saves a copy of the live book as the newest state, discarding undone states.
    pub fn commit(&mut self) {
        self.states.truncate(self.pointer + 1);
        self.states.push(self.current.clone());
        self.pointer += 1;
        tracing::debug!(pointer = self.pointer, "committed address book state");
    }

    /// Restores the previous state.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NoUndoableState` if the pointer is at the oldest state.
    pub fn undo(&mut self) -> BookResult<()> {
        if !self.can_undo() {
            return Err(BookError::NoUndoableState);
        }
        self.pointer -= 1;
        self.current.reset_data(&self.states[self.pointer]);
        tracing::debug!(pointer = self.pointer, "undo");
        Ok(())
    }

    /// Restores the most recently undone state.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NoRedoableState` if the pointer is at the newest state.
    pub fn redo(&mut self) -> BookResult<()> {
        if !self.can_redo() {
            return Err(BookError::NoRedoableState);
        }
        self.pointer += 1;
        self.current.reset_data(&self.states[self.pointer]);
        tracing::debug!(pointer = self.pointer, "redo");
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.states.len()
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Number of stored snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Deref for TrackedAddressBook {
    type Target = AddressBook;

    fn deref(&self) -> &AddressBook {
        &self.current
    }
}
