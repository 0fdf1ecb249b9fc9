//! Undo/redo history of one open document

use crate::notify::Listeners;
use crate::{CommandGroup, ListenerId, Result, StackEvent, UndoCommand};

/// An in-progress transaction: commands already executed against the live
/// document, not yet folded into history
struct Session {
    description: String,
    /// Each entry carries whether the command changed anything; no-ops are
    /// elided when the session is committed
    commands: Vec<(Box<dyn UndoCommand>, bool)>,
}

/// The append-only, truncating history of committed commands.
///
/// Entries before the cursor are applied (undoable), entries at and after it
/// are undone (redoable). Pushing while a redo tail exists discards that
/// tail. The document is dirty exactly when the cursor differs from the
/// position recorded by the last [`UndoStack::mark_saved`].
///
/// One stack exists per open document and is only ever used from the thread
/// that owns the document. At most one transaction may be active at a time;
/// violating the transaction protocol is a programming error and panics.
pub struct UndoStack {
    commands: Vec<Box<dyn UndoCommand>>,
    cursor: usize,
    /// Cursor position of the last saved state; `None` after the saved state
    /// was discarded with a redo tail and can no longer be reached
    save_point: Option<usize>,
    session: Option<Session>,
    listeners: Listeners,
    was_dirty: bool,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoStack {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            cursor: 0,
            save_point: Some(0),
            session: None,
            listeners: Listeners::new(),
            was_dirty: false,
        }
    }

    /// Executes `command` and appends it to history if it changed anything.
    ///
    /// Returns whether a history entry was created. No-op commands are
    /// dropped silently: no truncation, no dirty change, no notification.
    ///
    /// # Errors
    ///
    /// Propagates the command's validation error; history and the target
    /// stay untouched.
    ///
    /// # Panics
    ///
    /// Panics if a transaction is active.
    pub fn push(&mut self, mut command: Box<dyn UndoCommand>) -> Result<bool> {
        assert!(self.session.is_none(), "push() while a transaction is active");
        let changed = command.execute()?;
        if !changed {
            log::debug!("dropping no-op command '{}'", command.description());
            return Ok(false);
        }
        self.commit_entry(command);
        Ok(true)
    }

    /// Appends an executed, non-empty command: truncates the redo tail,
    /// advances the cursor and notifies listeners
    fn commit_entry(&mut self, command: Box<dyn UndoCommand>) {
        if self.cursor < self.commands.len() {
            self.commands.truncate(self.cursor);
            // the save point sat inside the discarded redo tail
            if self.save_point.is_some_and(|saved| saved > self.cursor) {
                self.save_point = None;
            }
        }
        self.commands.push(command);
        self.cursor += 1;
        self.listeners.emit(StackEvent::HistoryChanged);
        self.update_dirty();
    }

    /// Reverts the entry before the cursor. Does nothing if there is
    /// nothing to undo.
    ///
    /// # Errors
    ///
    /// An error from the command's `undo` indicates a broken command
    /// implementation; it is logged and propagated with history unchanged.
    ///
    /// # Panics
    ///
    /// Panics if a transaction is active.
    pub fn undo(&mut self) -> Result<()> {
        assert!(self.session.is_none(), "undo() while a transaction is active");
        if self.cursor == 0 {
            log::debug!("nothing to undo");
            return Ok(());
        }
        let command = &mut self.commands[self.cursor - 1];
        if let Err(err) = command.undo() {
            log::error!("undo of '{}' failed: {err}", command.description());
            return Err(err);
        }
        self.cursor -= 1;
        self.listeners.emit(StackEvent::HistoryChanged);
        self.update_dirty();
        Ok(())
    }

    /// Re-applies the entry at the cursor. Does nothing if there is nothing
    /// to redo.
    ///
    /// # Errors
    ///
    /// Same contract as [`UndoStack::undo`].
    ///
    /// # Panics
    ///
    /// Panics if a transaction is active.
    pub fn redo(&mut self) -> Result<()> {
        assert!(self.session.is_none(), "redo() while a transaction is active");
        if self.cursor >= self.commands.len() {
            log::debug!("nothing to redo");
            return Ok(());
        }
        let command = &mut self.commands[self.cursor];
        if let Err(err) = command.redo() {
            log::error!("redo of '{}' failed: {err}", command.description());
            return Err(err);
        }
        self.cursor += 1;
        self.listeners.emit(StackEvent::HistoryChanged);
        self.update_dirty();
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Description of the next undo operation, for UI display
    pub fn undo_description(&self) -> Option<String> {
        self.cursor
            .checked_sub(1)
            .and_then(|idx| self.commands.get(idx))
            .map(|command| command.description())
    }

    /// Description of the next redo operation, for UI display
    pub fn redo_description(&self) -> Option<String> {
        self.commands.get(self.cursor).map(|command| command.description())
    }

    /// Number of committed history entries (applied and undone)
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the document differs from its last saved state
    pub fn is_dirty(&self) -> bool {
        self.save_point != Some(self.cursor)
    }

    /// Records the current position as the clean reference point. Called
    /// after the document was persisted successfully.
    pub fn mark_saved(&mut self) {
        self.save_point = Some(self.cursor);
        self.update_dirty();
    }

    /// Drops all history. Called when the document is closed or reloaded.
    ///
    /// # Panics
    ///
    /// Panics if a transaction is active.
    pub fn clear(&mut self) {
        assert!(self.session.is_none(), "clear() while a transaction is active");
        self.commands.clear();
        self.cursor = 0;
        self.save_point = Some(0);
        self.listeners.emit(StackEvent::HistoryChanged);
        self.update_dirty();
    }

    /// Opens a transaction. Until `end_command` or `abort_command`, appended
    /// commands execute against the live document but are not yet part of
    /// history.
    ///
    /// # Panics
    ///
    /// Panics if a transaction is already active.
    pub fn begin_command(&mut self, description: impl Into<String>) {
        assert!(self.session.is_none(), "begin_command() while a transaction is already active");
        self.session = Some(Session {
            description: description.into(),
            commands: Vec::new(),
        });
    }

    pub fn has_active_command(&self) -> bool {
        self.session.is_some()
    }

    /// Executes `command` and records it in the active transaction.
    ///
    /// # Errors
    ///
    /// A validation error leaves the transaction intact with everything
    /// recorded so far; the caller decides whether to retry or abort.
    ///
    /// # Panics
    ///
    /// Panics if no transaction is active.
    pub fn append_to_command(&mut self, mut command: Box<dyn UndoCommand>) -> Result<()> {
        let session = self
            .session
            .as_mut()
            .expect("append_to_command() without an active transaction");
        let changed = command.execute()?;
        session.commands.push((command, changed));
        Ok(())
    }

    /// Folds the active transaction into one history entry.
    ///
    /// Returns whether an entry was created: transactions whose commands
    /// were all no-ops are dropped without touching history or dirty state.
    ///
    /// # Panics
    ///
    /// Panics if no transaction is active.
    pub fn end_command(&mut self) -> bool {
        let Session { description, commands } = self.session.take().expect("end_command() without an active transaction");
        let commands: Vec<Box<dyn UndoCommand>> = commands
            .into_iter()
            .filter(|(_, changed)| *changed)
            .map(|(command, _)| command)
            .collect();
        if commands.is_empty() {
            log::debug!("dropping empty transaction '{description}'");
            return false;
        }
        let group = CommandGroup::from_executed(description, commands);
        self.commit_entry(Box::new(group));
        true
    }

    /// Unwinds every command of the active transaction in reverse order and
    /// discards it. History and dirty state are untouched.
    ///
    /// # Panics
    ///
    /// Panics if no transaction is active, or if an unwind fails - a
    /// forward mutation that cannot be reversed leaves the document in an
    /// unknown state, which is not recoverable at runtime.
    pub fn abort_command(&mut self) {
        let Session { description, commands } = self.session.take().expect("abort_command() without an active transaction");
        for (mut command, _) in commands.into_iter().rev() {
            if let Err(err) = command.undo() {
                panic!(
                    "failed to unwind '{}' while aborting '{description}': {err}",
                    command.description()
                );
            }
        }
    }

    /// Registers a listener; events fire synchronously from the mutating
    /// call
    pub fn add_listener(&mut self, listener: impl FnMut(StackEvent) + Send + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Returns whether the listener was registered
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn update_dirty(&mut self) {
        let dirty = self.is_dirty();
        if dirty != self.was_dirty {
            self.was_dirty = dirty;
            self.listeners.emit(StackEvent::DirtyChanged(dirty));
        }
    }
}
