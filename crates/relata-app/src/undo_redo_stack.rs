use std::{collections::VecDeque, num::NonZero};

/// Bounded linear history with a cursor.
///
/// Pushing after an undo discards the redo tail. When full, the oldest entry is
/// dropped.
#[derive(Debug, Clone)]
pub(crate) struct UndoRedoStack<T> {
    stack: VecDeque<T>,
    capacity: NonZero<usize>,
    cursor: usize,
}

impl<T> UndoRedoStack<T> {
    #[must_use]
    pub(crate) fn new(capacity: NonZero<usize>) -> Self {
        Self {
            stack: VecDeque::new(),
            capacity,
            cursor: 0,
        }
    }

    pub(crate) fn push(&mut self, item: T) {
        if self.stack.is_empty() {
            self.stack.push_back(item);
            self.cursor = 0;
            return;
        }

        self.stack.truncate(self.cursor + 1);

        if self.stack.len() == self.capacity.get() {
            self.stack.pop_front();
            self.cursor = self.cursor.saturating_sub(1);
        }

        self.stack.push_back(item);
        self.cursor = self.stack.len() - 1;
    }

    #[must_use]
    pub(crate) fn can_undo(&self) -> bool {
        !self.stack.is_empty() && self.cursor > 0
    }

    pub(crate) fn undo(&mut self) -> bool {
        if self.can_undo() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub(crate) fn can_redo(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    pub(crate) fn redo(&mut self) -> bool {
        if self.can_redo() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn clear(&mut self) {
        self.stack.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub(crate) fn current(&self) -> Option<&T> {
        self.stack.get(self.cursor)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use super::UndoRedoStack;

    #[test]
    fn undo_redo_walks_the_cursor() {
        let mut history = UndoRedoStack::new(NonZero::new(10).unwrap());
        history.push('a');
        history.push('b');
        history.push('c');

        assert_eq!(history.current(), Some(&'c'));
        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(history.current(), Some(&'a'));
        assert!(!history.undo());
        assert!(history.redo());
        assert_eq!(history.current(), Some(&'b'));
    }

    #[test]
    fn push_after_undo_discards_redo_tail() {
        let mut history = UndoRedoStack::new(NonZero::new(10).unwrap());
        history.push(1);
        history.push(2);
        history.push(3);

        assert!(history.undo());
        assert!(history.undo());
        history.push(4);

        assert_eq!(history.current(), Some(&4));
        assert!(!history.can_redo());
        assert!(history.undo());
        assert_eq!(history.current(), Some(&1));
        assert!(!history.can_undo());
    }

    #[test]
    fn full_stack_drops_oldest_entry() {
        let mut history = UndoRedoStack::new(NonZero::new(2).unwrap());
        history.push(1);
        history.push(2);
        history.push(3);

        assert!(history.undo());
        assert_eq!(history.current(), Some(&2));
        assert!(!history.undo());
    }

    #[test]
    fn empty_and_cleared_stacks_cannot_move() {
        let mut history: UndoRedoStack<u8> = UndoRedoStack::new(NonZero::new(4).unwrap());
        assert_eq!(history.current(), None);
        assert!(!history.undo());
        assert!(!history.redo());

        history.push(7);
        history.push(8);
        history.clear();
        assert_eq!(history.current(), None);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
