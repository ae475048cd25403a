//! The relation store: owned, versioned state of a relation session.
//!
//! [`RelationStore`] holds set A, set B, and the relation between them, and enforces
//! the mutation rules:
//!
//! - Adding an element appends to a set unless the set is full.
//! - Removing an element drops the last one and purges every pair that referred to it.
//! - Toggling a pair adds it if absent and removes it if present.
//! - Dropping a dragged element onto an element of the other set toggles the pair
//!   between them.
//!
//! No mutation ever fails. Boundary conditions are silent no-ops reported as
//! [`MutationOutcome::NoOp`]. Callers that want to know *why* something would be a
//! no-op (for example to disable a button) ask the matching capability method, which
//! returns a [`MutationBlockReason`].
//!
//! User input can also be described as [`Event`]s. [`RelationStore::apply`] applies
//! an event in place and [`reduce`] is its pure counterpart.
//!
//! # Example
//!
//! ```
//! use relata_classifier::Category;
//! use relata_core::Side;
//! use relata_store::{Event, RelationStore, reduce};
//!
//! let store = RelationStore::new();
//! assert_eq!(store.category(), Category::Relation);
//!
//! let store = reduce(&store, Event::TogglePair { left: 0, right: 0 });
//! assert_eq!(store.relation().len(), 1);
//! assert_eq!(store.category(), Category::Injective);
//!
//! let store = reduce(&store, Event::RemoveElement(Side::A));
//! assert_eq!(store.set(Side::A).len(), 3);
//! ```

pub use self::{error::*, event::*, store::*};

mod error;
mod event;
mod store;
