use relata_core::Side;

/// Result of a mutation.
///
/// Mutations never fail; this only tells the caller whether anything changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MutationOutcome {
    /// The state changed and the store version was bumped.
    Applied,
    /// Nothing changed.
    NoOp,
}

impl MutationOutcome {
    pub(crate) fn from_changed(changed: bool) -> Self {
        if changed { Self::Applied } else { Self::NoOp }
    }
}

/// Why a mutation would currently be a no-op.
///
/// Returned by the capability queries on [`RelationStore`](crate::RelationStore) so the
/// user interface can disable controls. Mutations themselves never return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MutationBlockReason {
    /// The set already holds the maximum number of elements.
    #[display("set {side} is full")]
    SetFull {
        /// The full set.
        side: Side,
    },
    /// The set has no element to remove.
    #[display("set {side} is empty")]
    SetEmpty {
        /// The empty set.
        side: Side,
    },
    /// The pair refers to an element that does not exist.
    #[display("pair ({left}, {right}) is out of range")]
    IndexOutOfRange {
        /// Index into set A.
        left: usize,
        /// Index into set B.
        right: usize,
    },
    /// A drag ended on an element of the set it started from.
    #[display("drag started and ended in set {side}")]
    SameSide {
        /// The set the drag started and ended in.
        side: Side,
    },
    /// A drop arrived without a preceding drag start.
    #[display("no drag in progress")]
    NoDragInProgress,
}
