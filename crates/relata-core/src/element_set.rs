//! Bounded, ordered sequences of elements.

use std::ops::Index;

use tinyvec::ArrayVec;

use crate::Element;

/// Maximum number of elements a single set can hold.
pub const MAX_ELEMENTS: usize = 5;

/// An ordered sequence of at most [`MAX_ELEMENTS`] elements.
///
/// Elements are only ever appended at the end or removed from the end, so the
/// index of an element never changes while it is in the set.
///
/// # Example
///
/// ```
/// use relata_core::{Element, ElementSet, MAX_ELEMENTS};
///
/// let mut set = ElementSet::new();
/// for _ in 0..MAX_ELEMENTS {
///     assert!(set.push(Element::new("🍎")));
/// }
/// assert!(set.is_full());
/// assert!(!set.push(Element::new("🐶"))); // rejected at capacity
/// assert_eq!(set.len(), MAX_ELEMENTS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElementSet {
    elements: ArrayVec<[Element; MAX_ELEMENTS]>,
}

impl ElementSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: ArrayVec::new(),
        }
    }

    /// Creates a set labeled with the given glyphs, in order.
    ///
    /// Returns `None` if more than [`MAX_ELEMENTS`] glyphs are given.
    #[must_use]
    pub fn from_glyphs(glyphs: &[&'static str]) -> Option<Self> {
        if glyphs.len() > MAX_ELEMENTS {
            return None;
        }
        let mut set = Self::new();
        for glyph in glyphs {
            set.push(Element::new(*glyph));
        }
        Some(set)
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the set holds [`MAX_ELEMENTS`] elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() >= MAX_ELEMENTS
    }

    /// Returns `true` if `index` addresses an element of this set.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.elements.len()
    }

    /// Returns `true` if any element is labeled `glyph`.
    #[must_use]
    pub fn contains_glyph(&self, glyph: &str) -> bool {
        self.elements.iter().any(|element| element.glyph() == glyph)
    }

    /// Returns the element at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Element> {
        self.elements.get(index).copied()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Element] {
        self.elements.as_slice()
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Element> + '_ {
        self.elements.iter().copied()
    }

    /// Appends `element`.
    ///
    /// Returns `false` and leaves the set untouched if it is already full.
    pub fn push(&mut self, element: Element) -> bool {
        self.elements.try_push(element).is_none()
    }

    /// Removes and returns the last element, or `None` if the set is empty.
    pub fn pop(&mut self) -> Option<Element> {
        self.elements.pop()
    }
}

impl Index<usize> for ElementSet {
    type Output = Element;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set = ElementSet::new();
        assert!(set.is_empty());
        assert!(!set.is_full());
        assert_eq!(set.len(), 0);
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn test_from_glyphs_preserves_order() {
        let set = ElementSet::from_glyphs(&["🍎", "🚗", "📚"]).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set[0].glyph(), "🍎");
        assert_eq!(set[2].glyph(), "📚");
        assert!(set.contains_glyph("🚗"));
        assert!(!set.contains_glyph("🐶"));
    }

    #[test]
    fn test_from_glyphs_rejects_oversized_input() {
        assert!(ElementSet::from_glyphs(&["1", "2", "3", "4", "5", "6"]).is_none());
        assert!(ElementSet::from_glyphs(&["1", "2", "3", "4", "5"]).is_some());
    }

    #[test]
    fn test_pop_removes_last() {
        let mut set = ElementSet::from_glyphs(&["🍎", "🚗"]).unwrap();
        assert_eq!(set.pop(), Some(Element::new("🚗")));
        assert_eq!(set.pop(), Some(Element::new("🍎")));
        assert_eq!(set.pop(), None);
        assert!(set.is_empty());
    }

    #[test]
    fn test_contains_index() {
        let set = ElementSet::from_glyphs(&["🍎", "🚗"]).unwrap();
        assert!(set.contains_index(0));
        assert!(set.contains_index(1));
        assert!(!set.contains_index(2));
    }

    proptest! {
        #[test]
        fn push_never_exceeds_capacity(pushes in 0..20usize) {
            let mut set = ElementSet::new();
            for i in 0..pushes {
                let accepted = set.push(Element::new("🧩"));
                prop_assert_eq!(accepted, i < MAX_ELEMENTS);
                prop_assert!(set.len() <= MAX_ELEMENTS);
            }
        }
    }
}
