//! The command trait all edits implement

use crate::Result;

/// An atomic, reversible mutation of one or more domain objects.
///
/// Commands hold shared handles to their targets (e.g. an `ElementHandle`),
/// never the objects themselves - the object's lifetime is governed by the
/// document, not by the history.
pub trait UndoCommand: Send {
    /// Human-readable label for history/UI display
    fn description(&self) -> String;

    /// Performs the forward mutation once, at push/append time.
    ///
    /// Returns `Ok(true)` if an observable change was made, `Ok(false)` if
    /// the mutation turned out to be a no-op (e.g. setting a field to its
    /// current value). The stack uses this to keep no-ops out of history.
    ///
    /// # Errors
    ///
    /// Returns an error if the new value violates a domain precondition.
    /// On error the target must be left completely unchanged.
    fn execute(&mut self) -> Result<bool>;

    /// Reverses the effect recorded by `execute`.
    ///
    /// # Errors
    ///
    /// Undoing a successfully executed command is expected to always work;
    /// an error here indicates a broken command implementation, not a
    /// recoverable condition.
    fn undo(&mut self) -> Result<()>;

    /// Re-applies the forward mutation from the values captured at execute
    /// time. Implementations must not re-derive computed values.
    ///
    /// # Errors
    ///
    /// Same contract as [`UndoCommand::undo`].
    fn redo(&mut self) -> Result<()>;
}
