//! Addressing for the two sets of the relation.

/// One of the two sets of the relation.
///
/// Set A is the domain (left column) and set B is the target (right column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Side {
    /// The domain set.
    #[display("A")]
    A,
    /// The target set.
    #[display("B")]
    B,
}

impl Side {
    /// Both sides, in display order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// Returns the other side.
    ///
    /// # Example
    ///
    /// ```
    /// use relata_core::Side;
    ///
    /// assert_eq!(Side::A.opposite(), Side::B);
    /// assert_eq!(Side::B.opposite(), Side::A);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Reference to a single element: the set it lives in and its index there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{side}[{index}]")]
pub struct ElementRef {
    /// The owning set.
    pub side: Side,
    /// Zero-based position within the owning set.
    pub index: usize,
}

impl ElementRef {
    /// Creates a reference to the element at `index` in the set on `side`.
    #[must_use]
    pub const fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}
