//! Composite command grouping an ordered sequence of children

use crate::{Result, UndoCommand};

/// A command composed of an ordered sequence of child commands, applied and
/// reversed as one unit.
///
/// Children execute in append order; undo walks them in strict reverse
/// order. A group is empty when all of its children reported no observable
/// change - the stack never retains empty groups.
pub struct CommandGroup {
    description: String,
    commands: Vec<Box<dyn UndoCommand>>,
    executed: bool,
}

impl CommandGroup {
    /// Create an empty group to be filled with [`CommandGroup::push`] and
    /// executed via the stack
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            commands: Vec::new(),
            executed: false,
        }
    }

    /// Wrap already-executed commands into a group (transaction commit path)
    pub(crate) fn from_executed(description: String, commands: Vec<Box<dyn UndoCommand>>) -> Self {
        Self {
            description,
            commands,
            executed: true,
        }
    }

    /// Append a child command. Only valid before the group was executed.
    pub fn push(&mut self, command: Box<dyn UndoCommand>) {
        assert!(!self.executed, "cannot append to an already executed command group");
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl UndoCommand for CommandGroup {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn execute(&mut self) -> Result<bool> {
        if self.executed {
            // transaction-built groups arrive pre-executed, with no-op
            // children already elided
            return Ok(!self.commands.is_empty());
        }
        let mut changed = false;
        for idx in 0..self.commands.len() {
            match self.commands[idx].execute() {
                Ok(child_changed) => changed |= child_changed,
                Err(err) => {
                    // no partial state escapes the group: unwind everything
                    // this group already applied, in reverse order
                    for command in self.commands[..idx].iter_mut().rev() {
                        if let Err(undo_err) = command.undo() {
                            log::error!("rollback of '{}' failed: {undo_err}", command.description());
                            panic!("command group rollback failed: {undo_err}");
                        }
                    }
                    return Err(err);
                }
            }
        }
        self.executed = true;
        Ok(changed)
    }

    fn undo(&mut self) -> Result<()> {
        for command in self.commands.iter_mut().rev() {
            command.undo()?;
        }
        Ok(())
    }

    fn redo(&mut self) -> Result<()> {
        for command in self.commands.iter_mut() {
            command.redo()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::CoreError;

    struct AddValue {
        target: Arc<Mutex<i32>>,
        amount: i32,
    }

    impl UndoCommand for AddValue {
        fn description(&self) -> String {
            format!("Add {}", self.amount)
        }

        fn execute(&mut self) -> Result<bool> {
            if self.amount == 0 {
                return Ok(false);
            }
            *self.target.lock() += self.amount;
            Ok(true)
        }

        fn undo(&mut self) -> Result<()> {
            *self.target.lock() -= self.amount;
            Ok(())
        }

        fn redo(&mut self) -> Result<()> {
            *self.target.lock() += self.amount;
            Ok(())
        }
    }

    struct AlwaysFails;

    impl UndoCommand for AlwaysFails {
        fn description(&self) -> String {
            "Fail".into()
        }

        fn execute(&mut self) -> Result<bool> {
            Err(CoreError::Generic("rejected".into()))
        }

        fn undo(&mut self) -> Result<()> {
            Ok(())
        }

        fn redo(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn add(target: &Arc<Mutex<i32>>, amount: i32) -> Box<dyn UndoCommand> {
        Box::new(AddValue {
            target: target.clone(),
            amount,
        })
    }

    #[test]
    fn test_execute_runs_children_in_order() {
        let target = Arc::new(Mutex::new(0));
        let mut group = CommandGroup::new("edit");
        group.push(add(&target, 1));
        group.push(add(&target, 2));

        assert!(group.execute().unwrap());
        assert_eq!(*target.lock(), 3);

        group.undo().unwrap();
        assert_eq!(*target.lock(), 0);

        group.redo().unwrap();
        assert_eq!(*target.lock(), 3);
    }

    #[test]
    fn test_all_noop_children_report_empty() {
        let target = Arc::new(Mutex::new(0));
        let mut group = CommandGroup::new("edit");
        group.push(add(&target, 0));
        group.push(add(&target, 0));

        assert!(!group.execute().unwrap());
        assert_eq!(*target.lock(), 0);
    }

    #[test]
    fn test_failed_child_rolls_back_previous_children() {
        let target = Arc::new(Mutex::new(0));
        let mut group = CommandGroup::new("edit");
        group.push(add(&target, 1));
        group.push(add(&target, 2));
        group.push(Box::new(AlwaysFails));
        group.push(add(&target, 4));

        assert!(group.execute().is_err());
        // the two applied children were unwound, the fourth never ran
        assert_eq!(*target.lock(), 0);
    }

    #[test]
    #[should_panic(expected = "already executed")]
    fn test_push_after_execute_panics() {
        let target = Arc::new(Mutex::new(0));
        let mut group = CommandGroup::new("edit");
        group.push(add(&target, 1));
        group.execute().unwrap();
        group.push(add(&target, 2));
    }
}
