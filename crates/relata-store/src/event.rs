use relata_core::{ElementRef, Side};

use crate::{MutationOutcome, RelationStore};

/// A discrete user input consumed by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Event {
    /// Append an element to a set.
    #[display("add element to {_0}")]
    AddElement(Side),
    /// Remove the last element of a set.
    #[display("remove element from {_0}")]
    RemoveElement(Side),
    /// Toggle the pair `(left, right)`.
    #[display("toggle ({left}, {right})")]
    TogglePair {
        /// Index into set A.
        left: usize,
        /// Index into set B.
        right: usize,
    },
    /// A drag started on an element.
    #[display("drag start at {_0}")]
    DragStart(ElementRef),
    /// A drag ended on an element.
    #[display("drop on {_0}")]
    Drop(ElementRef),
}

impl RelationStore {
    /// Applies `event` in place.
    ///
    /// [`Event::DragStart`] only records the drag origin and always reports
    /// [`MutationOutcome::NoOp`].
    pub fn apply(&mut self, event: Event) -> MutationOutcome {
        match event {
            Event::AddElement(side) => self.add_element(side),
            Event::RemoveElement(side) => self.remove_element(side),
            Event::TogglePair { left, right } => self.toggle(left, right),
            Event::DragStart(origin) => {
                self.drag_start(origin);
                MutationOutcome::NoOp
            }
            Event::Drop(target) => self.drop_on(target),
        }
    }
}

/// Returns the state that results from applying `event` to `state`.
///
/// `state` itself is left untouched.
///
/// # Example
///
/// ```
/// use relata_core::{ElementRef, Side};
/// use relata_store::{Event, RelationStore, reduce};
///
/// let events = [
///     Event::DragStart(ElementRef::new(Side::A, 0)),
///     Event::Drop(ElementRef::new(Side::B, 3)),
/// ];
/// let initial = RelationStore::new();
/// let last = events.into_iter().fold(initial.clone(), |s, e| reduce(&s, e));
///
/// assert!(initial.relation().is_empty());
/// assert_eq!(last.relation().len(), 1);
/// ```
#[must_use]
pub fn reduce(state: &RelationStore, event: Event) -> RelationStore {
    let mut next = state.clone();
    next.apply(event);
    next
}
