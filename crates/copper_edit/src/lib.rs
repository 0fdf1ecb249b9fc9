//! Transactional command/undo engine for copper documents.
//!
//! Every mutation of a document goes through this engine:
//! - Single mutations are pushed onto the [`UndoStack`] as one [`UndoCommand`]
//! - Multi-step edits open a transaction (`begin_command` / `append_to_command`
//!   / `end_command`), which folds all appended commands into one
//!   [`CommandGroup`] history entry - or unwinds them on `abort_command`
//! - Listeners registered on the stack are notified when the history or the
//!   dirty state changes
//!
//! Commands execute immediately when pushed or appended, so open views always
//! show the live state of the edit. No-op commands (setting a field to its
//! current value) are silently elided from history.
//!
//! The engine assumes all calls for one document happen on one thread; the
//! single-active-transaction rule is its only concurrency control. Protocol
//! misuse (nested transactions, appending without one) is a programming
//! error and panics rather than being silently ignored.

mod command;
mod group;
mod notify;
mod stack;
mod transaction;

pub mod commands;

pub use command::UndoCommand;
pub use group::CommandGroup;
pub use notify::{ListenerId, StackEvent};
pub use stack::UndoStack;
pub use transaction::Transaction;

// Re-export the domain error/result types so command implementations only
// need this crate in scope
pub use copper_core::{CoreError, Result};
