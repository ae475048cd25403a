use relata_classifier::{Category, Classification};
use relata_core::{Element, ElementRef, ElementSet, Pair, Relation, Side};

use crate::{MutationBlockReason, MutationOutcome};

/// Labels of set A when a session starts.
pub const INITIAL_SET_A: [&str; 4] = ["🍎", "🚗", "📚", "🎵"];

/// Labels of set B when a session starts.
pub const INITIAL_SET_B: [&str; 5] = ["🐶", "🌟", "🎈", "🍕", "⚽"];

/// Owned state of a relation session.
///
/// The store keeps the relation consistent with the two sets at all times: every pair
/// refers to existing elements on both sides.
///
/// Every applied mutation increments [`version`](Self::version) by exactly one.
/// No-ops leave it unchanged, so comparing versions tells whether anything happened.
///
/// # Example
///
/// ```
/// use relata_core::{ElementRef, Side};
/// use relata_store::RelationStore;
///
/// let mut store = RelationStore::new();
/// let v0 = store.version();
///
/// // Dragging from B[1] onto A[2] links A[2] with B[1].
/// store.drag_start(ElementRef::new(Side::B, 1));
/// assert!(store.drop_on(ElementRef::new(Side::A, 2)).is_applied());
/// assert!(store.relation().contains(relata_core::Pair::new(2, 1)));
/// assert_eq!(store.version(), v0 + 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationStore {
    set_a: ElementSet,
    set_b: ElementSet,
    relation: Relation,
    drag_origin: Option<ElementRef>,
    version: u64,
}

impl Default for RelationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RelationStore {
    /// Creates a store with the initial sets and an empty relation.
    #[must_use]
    pub fn new() -> Self {
        let set_a = ElementSet::from_glyphs(&INITIAL_SET_A).unwrap_or_default();
        let set_b = ElementSet::from_glyphs(&INITIAL_SET_B).unwrap_or_default();
        Self::from_parts(set_a, set_b, Relation::new())
    }

    /// Creates a store with two empty sets.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_parts(ElementSet::new(), ElementSet::new(), Relation::new())
    }

    /// Creates a store from its parts.
    ///
    /// Pairs referring to elements that do not exist in `set_a` or `set_b` are dropped.
    #[must_use]
    pub fn from_parts(set_a: ElementSet, set_b: ElementSet, mut relation: Relation) -> Self {
        relation.retain_within(set_a.len(), set_b.len());
        Self {
            set_a,
            set_b,
            relation,
            drag_origin: None,
            version: 0,
        }
    }

    /// Returns the set on `side`.
    #[must_use]
    pub fn set(&self, side: Side) -> &ElementSet {
        match side {
            Side::A => &self.set_a,
            Side::B => &self.set_b,
        }
    }

    fn set_mut(&mut self, side: Side) -> &mut ElementSet {
        match side {
            Side::A => &mut self.set_a,
            Side::B => &mut self.set_b,
        }
    }

    /// Returns the relation.
    #[must_use]
    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    /// Returns the element a drag is currently in progress from, if any.
    #[must_use]
    pub fn drag_origin(&self) -> Option<ElementRef> {
        self.drag_origin
    }

    /// Returns the number of mutations applied since the store was created.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Classifies the current relation.
    #[must_use]
    pub fn classification(&self) -> Classification {
        relata_classifier::analyze(self.set_a.len(), self.set_b.len(), self.relation.pairs())
    }

    /// Returns the category of the current relation.
    #[must_use]
    pub fn category(&self) -> Category {
        self.classification().category
    }

    /// Returns whether [`add_element`](Self::add_element) would change the set on `side`.
    ///
    /// # Errors
    ///
    /// Returns [`MutationBlockReason::SetFull`] if the set is full.
    pub fn add_element_capability(&self, side: Side) -> Result<(), MutationBlockReason> {
        if self.set(side).is_full() {
            return Err(MutationBlockReason::SetFull { side });
        }
        Ok(())
    }

    /// Appends a new element to the set on `side`.
    ///
    /// The new element gets the first glyph of the pool not used by either set. This
    /// is a no-op if the set is full.
    pub fn add_element(&mut self, side: Side) -> MutationOutcome {
        if self.add_element_capability(side).is_err() {
            return MutationOutcome::NoOp;
        }
        let element = Element::next_unused(|glyph| {
            self.set_a.contains_glyph(glyph) || self.set_b.contains_glyph(glyph)
        });
        let pushed = self.set_mut(side).push(element);
        self.finish(pushed)
    }

    /// Returns whether [`remove_element`](Self::remove_element) would change the set
    /// on `side`.
    ///
    /// # Errors
    ///
    /// Returns [`MutationBlockReason::SetEmpty`] if the set is empty.
    pub fn remove_element_capability(&self, side: Side) -> Result<(), MutationBlockReason> {
        if self.set(side).is_empty() {
            return Err(MutationBlockReason::SetEmpty { side });
        }
        Ok(())
    }

    /// Removes the last element of the set on `side`.
    ///
    /// Every pair referring to the removed element is removed along with it, and a
    /// drag started from it is abandoned. This is a no-op if the set is empty.
    pub fn remove_element(&mut self, side: Side) -> MutationOutcome {
        if self.set_mut(side).pop().is_none() {
            return MutationOutcome::NoOp;
        }
        self.relation.retain_within(self.set_a.len(), self.set_b.len());
        if self
            .drag_origin
            .is_some_and(|origin| !self.set(origin.side).contains_index(origin.index))
        {
            self.drag_origin = None;
        }
        self.finish(true)
    }

    /// Returns whether [`toggle`](Self::toggle) would change the relation.
    ///
    /// # Errors
    ///
    /// Returns [`MutationBlockReason::IndexOutOfRange`] if `left` or `right` does not
    /// address an existing element.
    pub fn toggle_capability(&self, left: usize, right: usize) -> Result<(), MutationBlockReason> {
        if !self.set_a.contains_index(left) || !self.set_b.contains_index(right) {
            return Err(MutationBlockReason::IndexOutOfRange { left, right });
        }
        Ok(())
    }

    /// Adds the pair `(left, right)` if it is absent, removes it if it is present.
    ///
    /// Toggling the same pair twice restores the previous relation. Pairs that refer
    /// to non-existent elements are ignored.
    pub fn toggle(&mut self, left: usize, right: usize) -> MutationOutcome {
        if self.toggle_capability(left, right).is_err() {
            return MutationOutcome::NoOp;
        }
        let toggled = self.relation.toggle(Pair::new(left, right));
        self.finish(toggled.is_some())
    }

    /// Toggles the pair between `source` and `target` after a drag-and-drop.
    ///
    /// The pair is oriented `(A index, B index)` whichever side the drag started on.
    /// This is a no-op if both elements are on the same side.
    pub fn set_pair_from_drag(
        &mut self,
        source: ElementRef,
        target: ElementRef,
    ) -> MutationOutcome {
        if source.side == target.side {
            return MutationOutcome::NoOp;
        }
        let (left, right) = match source.side {
            Side::A => (source.index, target.index),
            Side::B => (target.index, source.index),
        };
        self.toggle(left, right)
    }

    /// Records `origin` as the element a drag started from.
    ///
    /// This replaces any previous origin. It does not count as a mutation and does not
    /// change the version.
    pub fn drag_start(&mut self, origin: ElementRef) {
        if self.set(origin.side).contains_index(origin.index) {
            self.drag_origin = Some(origin);
        }
    }

    /// Returns whether [`drop_on`](Self::drop_on) would change the relation.
    ///
    /// # Errors
    ///
    /// Returns [`MutationBlockReason::NoDragInProgress`] if no drag was started,
    /// [`MutationBlockReason::SameSide`] if `target` is on the side the drag started
    /// from, and [`MutationBlockReason::IndexOutOfRange`] if the resulting pair does not
    /// address existing elements.
    pub fn drop_capability(&self, target: ElementRef) -> Result<(), MutationBlockReason> {
        let Some(origin) = self.drag_origin else {
            return Err(MutationBlockReason::NoDragInProgress);
        };
        if origin.side == target.side {
            return Err(MutationBlockReason::SameSide { side: target.side });
        }
        match origin.side {
            Side::A => self.toggle_capability(origin.index, target.index),
            Side::B => self.toggle_capability(target.index, origin.index),
        }
    }

    /// Completes a drag on `target`.
    ///
    /// If `target` is on the other side of the recorded origin, the pair between them
    /// is toggled and the origin is cleared. A drop on the origin's own side is ignored
    /// and the drag stays in progress. Without a recorded origin this is a no-op.
    pub fn drop_on(&mut self, target: ElementRef) -> MutationOutcome {
        let Some(origin) = self.drag_origin else {
            return MutationOutcome::NoOp;
        };
        if origin.side == target.side {
            return MutationOutcome::NoOp;
        }
        self.drag_origin = None;
        self.set_pair_from_drag(origin, target)
    }

    /// Captures the sets and the relation.
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            set_a: self.set_a.clone(),
            set_b: self.set_b.clone(),
            relation: self.relation.clone(),
        }
    }

    /// Replaces the sets and the relation with those of `snapshot`.
    ///
    /// Any drag in progress is abandoned. This is a no-op if the store already holds
    /// the same sets and relation.
    pub fn restore(&mut self, snapshot: &StoreSnapshot) -> MutationOutcome {
        self.drag_origin = None;
        if self.set_a == snapshot.set_a
            && self.set_b == snapshot.set_b
            && self.relation == snapshot.relation
        {
            return MutationOutcome::NoOp;
        }
        self.set_a = snapshot.set_a.clone();
        self.set_b = snapshot.set_b.clone();
        self.relation = snapshot.relation.clone();
        self.relation.retain_within(self.set_a.len(), self.set_b.len());
        self.finish(true)
    }

    fn finish(&mut self, changed: bool) -> MutationOutcome {
        if changed {
            self.version += 1;
        }
        MutationOutcome::from_changed(changed)
    }
}

/// The sets and relation of a [`RelationStore`] at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    set_a: ElementSet,
    set_b: ElementSet,
    relation: Relation,
}

impl StoreSnapshot {
    /// Returns the captured set on `side`.
    #[must_use]
    pub fn set(&self, side: Side) -> &ElementSet {
        match side {
            Side::A => &self.set_a,
            Side::B => &self.set_b,
        }
    }

    /// Returns the captured relation.
    #[must_use]
    pub fn relation(&self) -> &Relation {
        &self.relation
    }
}
