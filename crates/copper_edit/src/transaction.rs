//! RAII transaction guard over a shared undo stack

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{Result, UndoCommand, UndoStack};

/// Scoped transaction over a shared [`UndoStack`].
///
/// Wraps the stack's `begin_command` / `append_to_command` / `end_command` /
/// `abort_command` protocol. Dropping the guard without calling
/// [`Transaction::commit`] aborts the transaction, so an early return or a
/// panic in the middle of a multi-step edit never leaves half an edit
/// applied.
pub struct Transaction {
    stack: Arc<Mutex<UndoStack>>,
    finished: bool,
}

impl Transaction {
    /// Opens a transaction on the stack.
    ///
    /// # Panics
    ///
    /// Panics if the stack already has an active transaction.
    pub fn begin(stack: Arc<Mutex<UndoStack>>, description: impl Into<String>) -> Self {
        stack.lock().begin_command(description);
        Self { stack, finished: false }
    }

    /// Executes `command` against the live document and records it.
    ///
    /// # Errors
    ///
    /// A validation error leaves the transaction open with everything
    /// recorded so far; the caller decides whether to retry or abort.
    pub fn append(&mut self, command: Box<dyn UndoCommand>) -> Result<()> {
        self.stack.lock().append_to_command(command)
    }

    /// Folds the transaction into one history entry. Returns whether an
    /// entry was created (an all-no-op transaction is dropped).
    pub fn commit(mut self) -> bool {
        self.finished = true;
        self.stack.lock().end_command()
    }

    /// Unwinds every recorded command in reverse order and discards the
    /// transaction.
    pub fn abort(mut self) {
        self.finished = true;
        self.stack.lock().abort_command();
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        log::warn!("transaction dropped without commit or abort, aborting");
        self.stack.lock().abort_command();
    }
}
