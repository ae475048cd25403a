use std::num::NonZero;

use relata_store::{RelationStore, StoreSnapshot};

use crate::{DEFAULT_MAX_HISTORY_LENGTH, undo_redo_stack::UndoRedoStack};

/// Snapshots of the store taken after every applied mutation.
#[derive(Debug)]
pub(crate) struct History {
    stack: UndoRedoStack<StoreSnapshot>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub const fn default_capacity() -> NonZero<usize> {
        NonZero::new(DEFAULT_MAX_HISTORY_LENGTH).unwrap()
    }

    pub(crate) fn new() -> Self {
        Self::with_capacity(Self::default_capacity())
    }

    pub(crate) fn with_capacity(capacity: NonZero<usize>) -> Self {
        Self {
            stack: UndoRedoStack::new(capacity),
        }
    }

    pub(crate) fn reset(&mut self, store: &RelationStore) {
        self.stack.clear();
        self.stack.push(store.snapshot());
    }

    pub(crate) fn push(&mut self, store: &RelationStore) {
        self.stack.push(store.snapshot());
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    pub(crate) fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    pub(crate) fn undo(&mut self, store: &mut RelationStore) -> bool {
        if self.stack.undo()
            && let Some(snapshot) = self.stack.current()
        {
            store.restore(snapshot);
            return true;
        }
        false
    }

    pub(crate) fn redo(&mut self, store: &mut RelationStore) -> bool {
        if self.stack.redo()
            && let Some(snapshot) = self.stack.current()
        {
            store.restore(snapshot);
            return true;
        }
        false
    }
}
