//! Core data structures for relation visualization.
//!
//! This crate provides the data model shared by the classifier, the relation store,
//! and the application: two bounded sets of labeled elements and a relation between
//! them.
//!
//! # Overview
//!
//! 1. **Addressing** - Naming the two sets and the elements in them
//!    - [`side`]: [`Side`] (set A or set B) and [`ElementRef`] (side + index)
//!
//! 2. **Elements** - Labels and bounded sequences of labels
//!    - [`element`]: [`Element`] glyph labels and the glyph pool used for new elements
//!    - [`element_set`]: [`ElementSet`], an ordered sequence of at most
//!      [`MAX_ELEMENTS`] elements
//!
//! 3. **Relation** - Ordered pairs linking set A to set B
//!    - [`relation`]: [`Pair`] and [`Relation`], a duplicate-free pair collection
//!
//! Elements have no identity beyond their index in the owning set. Sets only ever
//! grow or shrink at the end, so indices stay stable for the remaining elements.
//!
//! # Examples
//!
//! ```
//! use relata_core::{ElementSet, Pair, Relation};
//!
//! let set_a = ElementSet::from_glyphs(&["🍎", "🚗"]).unwrap();
//! let set_b = ElementSet::from_glyphs(&["🐶"]).unwrap();
//!
//! let mut relation = Relation::new();
//! relation.toggle(Pair::new(0, 0));
//! relation.toggle(Pair::new(1, 0));
//! assert_eq!(relation.len(), 2);
//!
//! // Shrinking set A drops every pair that refers to the removed element.
//! relation.retain_within(set_a.len() - 1, set_b.len());
//! assert_eq!(relation.pairs(), &[Pair::new(0, 0)]);
//! ```

pub mod element;
pub mod element_set;
pub mod relation;
pub mod side;

pub use self::{
    element::{Element, FALLBACK_GLYPH, GLYPH_POOL},
    element_set::{ElementSet, MAX_ELEMENTS},
    relation::{MAX_PAIRS, Pair, PairToggle, Relation},
    side::{ElementRef, Side},
};
