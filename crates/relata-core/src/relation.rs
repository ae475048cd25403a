//! Ordered pairs and the relation built from them.

use tinyvec::ArrayVec;

use crate::{MAX_ELEMENTS, Side};

/// Maximum number of distinct pairs between two full sets.
pub const MAX_PAIRS: usize = MAX_ELEMENTS * MAX_ELEMENTS;

/// An ordered pair `(left, right)`: an index into set A and an index into set B.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, derive_more::Display,
)]
#[display("({left}, {right})")]
pub struct Pair {
    /// Index into set A.
    pub left: usize,
    /// Index into set B.
    pub right: usize,
}

impl Pair {
    /// Creates the pair `(left, right)`.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Returns the index this pair holds for the set on `side`.
    #[must_use]
    pub const fn index_on(self, side: Side) -> usize {
        match side {
            Side::A => self.left,
            Side::B => self.right,
        }
    }
}

/// What [`Relation::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PairToggle {
    /// The pair was absent and has been added.
    Inserted,
    /// The pair was present and has been removed.
    Removed,
}

/// A duplicate-free collection of [`Pair`]s.
///
/// The relation is a set: equality ignores the order in which pairs were added.
/// Insertion order is still remembered so that listings can show pairs in the order
/// they were created.
#[derive(Debug, Clone, Default)]
pub struct Relation {
    pairs: ArrayVec<[Pair; MAX_PAIRS]>,
}

impl Relation {
    /// Creates an empty relation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pairs: ArrayVec::new(),
        }
    }

    /// Builds a relation from `pairs`, ignoring duplicates.
    ///
    /// Returns `None` if more than [`MAX_PAIRS`] distinct pairs are given.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = Pair>,
    {
        let mut relation = Self::new();
        for pair in pairs {
            if !relation.contains(pair) && relation.pairs.try_push(pair).is_some() {
                return None;
            }
        }
        Some(relation)
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the relation holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns `true` if `pair` is part of the relation.
    #[must_use]
    pub fn contains(&self, pair: Pair) -> bool {
        self.pairs.contains(&pair)
    }

    /// Returns the pairs in insertion order.
    #[must_use]
    pub fn pairs(&self) -> &[Pair] {
        self.pairs.as_slice()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Pair> + '_ {
        self.pairs.iter().copied()
    }

    /// Iterates over the right indices related to the left index `left`.
    pub fn partners_of(&self, left: usize) -> impl Iterator<Item = usize> + '_ {
        self.pairs
            .iter()
            .filter(move |pair| pair.left == left)
            .map(|pair| pair.right)
    }

    /// Adds `pair` if it is absent, removes it if it is present.
    ///
    /// Returns `None` and leaves the relation untouched if the pair is absent and
    /// the relation already holds [`MAX_PAIRS`] pairs.
    ///
    /// # Example
    ///
    /// ```
    /// use relata_core::{Pair, PairToggle, Relation};
    ///
    /// let mut relation = Relation::new();
    /// assert_eq!(relation.toggle(Pair::new(0, 1)), Some(PairToggle::Inserted));
    /// assert!(relation.contains(Pair::new(0, 1)));
    /// assert_eq!(relation.toggle(Pair::new(0, 1)), Some(PairToggle::Removed));
    /// assert!(relation.is_empty());
    /// ```
    pub fn toggle(&mut self, pair: Pair) -> Option<PairToggle> {
        if let Some(index) = self.pairs.iter().position(|p| *p == pair) {
            self.pairs.remove(index);
            return Some(PairToggle::Removed);
        }
        match self.pairs.try_push(pair) {
            None => Some(PairToggle::Inserted),
            Some(_) => None,
        }
    }

    /// Drops every pair whose left index is `>= a_len` or whose right index is
    /// `>= b_len`.
    ///
    /// Returns the number of pairs removed.
    pub fn retain_within(&mut self, a_len: usize, b_len: usize) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|pair| pair.left < a_len && pair.right < b_len);
        before - self.pairs.len()
    }
}

impl PartialEq for Relation {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|pair| other.contains(pair))
    }
}

impl Eq for Relation {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_index_on_side() {
        let pair = Pair::new(3, 1);
        assert_eq!(pair.index_on(Side::A), 3);
        assert_eq!(pair.index_on(Side::B), 1);
    }

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut relation = Relation::new();
        assert_eq!(relation.toggle(Pair::new(1, 2)), Some(PairToggle::Inserted));
        assert_eq!(relation.len(), 1);
        assert_eq!(relation.toggle(Pair::new(1, 2)), Some(PairToggle::Removed));
        assert!(relation.is_empty());
    }

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let mut relation = Relation::new();
        relation.toggle(Pair::new(2, 0));
        relation.toggle(Pair::new(0, 1));
        relation.toggle(Pair::new(1, 1));
        assert_eq!(
            relation.pairs(),
            &[Pair::new(2, 0), Pair::new(0, 1), Pair::new(1, 1)]
        );
    }

    #[test]
    fn test_toggle_rejects_when_full() {
        let mut relation = Relation::new();
        for left in 0..MAX_ELEMENTS {
            for right in 0..MAX_ELEMENTS {
                assert!(relation.toggle(Pair::new(left, right)).is_some());
            }
        }
        assert_eq!(relation.len(), MAX_PAIRS);
        assert_eq!(relation.toggle(Pair::new(MAX_ELEMENTS, 0)), None);
        assert_eq!(relation.len(), MAX_PAIRS);
        // Removal still works at capacity.
        assert_eq!(relation.toggle(Pair::new(0, 0)), Some(PairToggle::Removed));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = Relation::from_pairs([Pair::new(0, 0), Pair::new(1, 1)]).unwrap();
        let b = Relation::from_pairs([Pair::new(1, 1), Pair::new(0, 0)]).unwrap();
        let c = Relation::from_pairs([Pair::new(1, 1)]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_pairs_ignores_duplicates() {
        let relation =
            Relation::from_pairs([Pair::new(0, 0), Pair::new(0, 0), Pair::new(1, 0)]).unwrap();
        assert_eq!(relation.len(), 2);
    }

    #[test]
    fn test_retain_within_drops_out_of_range_pairs() {
        let mut relation = Relation::from_pairs([
            Pair::new(0, 0),
            Pair::new(3, 1),
            Pair::new(1, 4),
            Pair::new(2, 2),
        ])
        .unwrap();
        let removed = relation.retain_within(3, 4);
        assert_eq!(removed, 2);
        assert_eq!(relation.pairs(), &[Pair::new(0, 0), Pair::new(2, 2)]);
    }

    #[test]
    fn test_partners_of() {
        let relation =
            Relation::from_pairs([Pair::new(0, 1), Pair::new(1, 0), Pair::new(0, 3)]).unwrap();
        assert_eq!(relation.partners_of(0).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(relation.partners_of(2).count(), 0);
    }

    fn pair_strategy() -> impl Strategy<Value = Pair> {
        (0..MAX_ELEMENTS, 0..MAX_ELEMENTS).prop_map(|(left, right)| Pair::new(left, right))
    }

    proptest! {
        #[test]
        fn toggle_twice_is_identity(
            pairs in prop::collection::vec(pair_strategy(), 0..MAX_PAIRS),
            pair in pair_strategy(),
        ) {
            let original = Relation::from_pairs(pairs).unwrap();
            let mut relation = original.clone();
            relation.toggle(pair);
            relation.toggle(pair);
            prop_assert_eq!(relation, original);
        }
    }
}
