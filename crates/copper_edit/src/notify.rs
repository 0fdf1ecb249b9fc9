//! Change notification channel of the undo stack

/// Events broadcast to listeners registered on an [`crate::UndoStack`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackEvent {
    /// History entries or the cursor position changed
    HistoryChanged,
    /// The dirty state flipped; carries the new state
    DirtyChanged(bool),
}

/// Identifier handed out on registration, used to unregister a listener
pub type ListenerId = usize;

/// In-process listener registry. Listeners are plain callbacks; typical
/// consumers are UI widgets updating button state and validators re-running
/// checks after an edit.
pub(crate) struct Listeners {
    next_id: ListenerId,
    entries: Vec<(ListenerId, Box<dyn FnMut(StackEvent) + Send>)>,
}

impl Listeners {
    pub(crate) fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, listener: Box<dyn FnMut(StackEvent) + Send>) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns whether a listener with this id was registered
    pub(crate) fn remove(&mut self, id: ListenerId) -> bool {
        let len = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != len
    }

    pub(crate) fn emit(&mut self, event: StackEvent) {
        for (_, listener) in self.entries.iter_mut() {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn test_emit_reaches_all_listeners() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::new();
        for _ in 0..2 {
            let seen = seen.clone();
            listeners.add(Box::new(move |event| seen.lock().push(event)));
        }

        listeners.emit(StackEvent::HistoryChanged);
        assert_eq!(seen.lock().len(), 2);
    }

    #[test]
    fn test_remove_listener() {
        let seen = Arc::new(Mutex::new(0));
        let mut listeners = Listeners::new();
        let seen_clone = seen.clone();
        let id = listeners.add(Box::new(move |_| *seen_clone.lock() += 1));

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));

        listeners.emit(StackEvent::HistoryChanged);
        assert_eq!(*seen.lock(), 0);
    }
}
