//! Element labels.

/// Glyphs handed out to newly added elements, in order of preference.
pub const GLYPH_POOL: [&str; 10] = ["🍎", "🐶", "🚗", "🌟", "🎈", "📚", "🍕", "🎵", "⚽", "🧩"];

/// Glyph used once every glyph in [`GLYPH_POOL`] is already in use.
pub const FALLBACK_GLYPH: &str = "➕";

/// An opaque element label.
///
/// Elements carry no identity of their own; they are addressed by their index in
/// the owning [`ElementSet`](crate::ElementSet). Two elements with the same glyph
/// are indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
#[display("{glyph}")]
pub struct Element {
    glyph: &'static str,
}

impl Element {
    /// Creates an element labeled with `glyph`.
    #[must_use]
    pub const fn new(glyph: &'static str) -> Self {
        Self { glyph }
    }

    /// Returns the element's label.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        self.glyph
    }

    /// Picks the label for a new element.
    ///
    /// Returns the first glyph of [`GLYPH_POOL`] for which `in_use` is false, or
    /// [`FALLBACK_GLYPH`] when the pool is exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use relata_core::{Element, GLYPH_POOL};
    ///
    /// let taken = [Element::new(GLYPH_POOL[0])];
    /// let next = Element::next_unused(|glyph| taken.iter().any(|e| e.glyph() == glyph));
    /// assert_eq!(next.glyph(), GLYPH_POOL[1]);
    /// ```
    #[must_use]
    pub fn next_unused<F>(in_use: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        let glyph = GLYPH_POOL
            .into_iter()
            .find(|glyph| !in_use(glyph))
            .unwrap_or(FALLBACK_GLYPH);
        Self::new(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_unused_prefers_pool_order() {
        let next = Element::next_unused(|_| false);
        assert_eq!(next.glyph(), "🍎");
    }

    #[test]
    fn test_next_unused_skips_used_glyphs() {
        let used = ["🍎", "🐶", "🚗"];
        let next = Element::next_unused(|glyph| used.iter().any(|u| *u == glyph));
        assert_eq!(next.glyph(), "🌟");
    }

    #[test]
    fn test_next_unused_falls_back_when_pool_exhausted() {
        let next = Element::next_unused(|_| true);
        assert_eq!(next.glyph(), FALLBACK_GLYPH);
    }

    #[test]
    fn test_pool_has_no_duplicates() {
        for (i, a) in GLYPH_POOL.iter().enumerate() {
            for b in &GLYPH_POOL[i + 1..] {
                assert_ne!(a, b);
            }
            assert_ne!(*a, FALLBACK_GLYPH);
        }
    }
}
