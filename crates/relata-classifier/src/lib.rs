//! Classification of a relation between two finite sets.
//!
//! The classifier looks at a relation between set A and set B and reports which of
//! the textbook categories it falls into: a plain relation, a (partial) function, a
//! total function, or an injective, surjective, or bijective function.
//!
//! The categories overlap, so [`classify`] resolves them with a fixed priority:
//!
//! 1. Not a function → [`Category::Relation`]
//! 2. Surjective, total, and injective → [`Category::Bijective`]
//! 3. Surjective → [`Category::Surjective`]
//! 4. Injective → [`Category::Injective`]
//! 5. Total → [`Category::TotalFunction`]
//! 6. Otherwise → [`Category::Function`]
//!
//! The empty relation is always classified as [`Category::Relation`].
//!
//! # Example
//!
//! ```
//! use relata_classifier::{Category, classify};
//! use relata_core::Pair;
//!
//! // Two elements of A both map to the single element of B.
//! let pairs = [Pair::new(0, 0), Pair::new(1, 0)];
//! assert_eq!(classify(2, 1, &pairs), Category::Surjective);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use relata_core::Pair;

/// The category a relation is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Category {
    /// Some element of A is related to two or more elements of B, or the relation is empty.
    #[display("relation")]
    Relation,
    /// Every element of A is related to at most one element of B.
    #[display("function")]
    Function,
    /// A function defined on every element of A.
    #[display("total function")]
    TotalFunction,
    /// A function where no element of B is hit twice.
    #[display("injective function")]
    Injective,
    /// A function covering every element of B.
    #[display("surjective function")]
    Surjective,
    /// A total, injective, and surjective function.
    #[display("bijective function")]
    Bijective,
}

impl Category {
    /// All categories, from the weakest to the strongest.
    pub const ALL: [Category; 6] = [
        Category::Relation,
        Category::Function,
        Category::TotalFunction,
        Category::Injective,
        Category::Surjective,
        Category::Bijective,
    ];

    /// Returns `true` for every category other than [`Category::Relation`].
    #[must_use]
    pub const fn is_function_like(self) -> bool {
        !matches!(self, Category::Relation)
    }
}

/// The individual properties of a relation together with the resulting category.
///
/// The flags are computed for every relation, including the empty one; only the
/// [`category`](Self::category) applies the priority rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[expect(clippy::struct_excessive_bools)]
pub struct Classification {
    /// No element of A is related to two distinct elements of B.
    pub is_function: bool,
    /// Every element of A appears in some pair.
    pub total: bool,
    /// Every element of B appears in some pair.
    pub surjective: bool,
    /// No element of B appears in two pairs.
    pub injective: bool,
    /// The category chosen from the flags above.
    pub category: Category,
}

/// Computes all properties of the relation `pairs` between a set A of `a_len`
/// elements and a set B of `b_len` elements.
///
/// The result does not depend on the order of `pairs`. Pairs are expected to be
/// distinct; a duplicated pair counts twice towards injectivity.
///
/// # Example
///
/// ```
/// use relata_classifier::{Category, analyze};
/// use relata_core::Pair;
///
/// let c = analyze(3, 2, &[Pair::new(0, 0)]);
/// assert!(c.is_function);
/// assert!(c.injective);
/// assert!(!c.total);
/// assert!(!c.surjective);
/// assert_eq!(c.category, Category::Injective);
/// ```
#[must_use]
pub fn analyze(a_len: usize, b_len: usize, pairs: &[Pair]) -> Classification {
    let mut partners: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();
    let mut hit = BTreeSet::new();
    for pair in pairs {
        partners.entry(pair.left).or_default().insert(pair.right);
        hit.insert(pair.right);
    }

    let is_function = partners.values().all(|rights| rights.len() <= 1);
    let total = partners.len() == a_len;
    let surjective = hit.len() == b_len;
    let injective = hit.len() == pairs.len();

    let category = if pairs.is_empty() || !is_function {
        Category::Relation
    } else if surjective && total && injective {
        Category::Bijective
    } else if surjective {
        Category::Surjective
    } else if injective {
        Category::Injective
    } else if total {
        Category::TotalFunction
    } else {
        Category::Function
    };

    Classification {
        is_function,
        total,
        surjective,
        injective,
        category,
    }
}

/// Classifies the relation `pairs` between a set A of `a_len` elements and a set B
/// of `b_len` elements.
///
/// See the [crate documentation](crate) for the priority rules.
#[must_use]
pub fn classify(a_len: usize, b_len: usize, pairs: &[Pair]) -> Category {
    analyze(a_len, b_len, pairs).category
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use relata_core::{MAX_ELEMENTS, Relation};

    use super::*;

    fn pairs(list: &[(usize, usize)]) -> Vec<Pair> {
        list.iter().map(|&(l, r)| Pair::new(l, r)).collect()
    }

    #[test]
    fn test_empty_relation_is_relation() {
        assert_eq!(classify(2, 1, &[]), Category::Relation);
        assert_eq!(classify(0, 0, &[]), Category::Relation);
    }

    #[test]
    fn test_empty_relation_flags_are_vacuous() {
        let c = analyze(0, 0, &[]);
        assert!(c.is_function && c.total && c.surjective && c.injective);
        assert_eq!(c.category, Category::Relation);

        let c = analyze(2, 1, &[]);
        assert!(c.is_function);
        assert!(!c.total);
        assert!(!c.surjective);
    }

    #[test]
    fn test_identity_is_bijective() {
        let c = analyze(2, 2, &pairs(&[(0, 0), (1, 1)]));
        assert!(c.is_function && c.total && c.surjective && c.injective);
        assert_eq!(c.category, Category::Bijective);
    }

    #[test]
    fn test_collapse_onto_single_target_is_surjective() {
        let c = analyze(2, 1, &pairs(&[(0, 0), (1, 0)]));
        assert!(c.is_function && c.total && c.surjective);
        assert!(!c.injective);
        assert_eq!(c.category, Category::Surjective);
    }

    #[test]
    fn test_single_pair_into_larger_target_is_injective() {
        let c = analyze(3, 2, &pairs(&[(0, 0)]));
        assert!(c.is_function && c.injective);
        assert!(!c.total && !c.surjective);
        assert_eq!(c.category, Category::Injective);
    }

    #[test]
    fn test_one_to_many_is_relation() {
        let c = analyze(2, 2, &pairs(&[(0, 0), (0, 1)]));
        assert!(!c.is_function);
        assert_eq!(c.category, Category::Relation);
    }

    #[test]
    fn test_total_non_injective_non_surjective_is_total_function() {
        assert_eq!(
            classify(2, 3, &pairs(&[(0, 1), (1, 1)])),
            Category::TotalFunction
        );
    }

    #[test]
    fn test_partial_non_injective_is_function() {
        assert_eq!(
            classify(3, 3, &pairs(&[(0, 1), (1, 1)])),
            Category::Function
        );
    }

    #[test]
    fn test_surjective_takes_priority_over_injective() {
        // Surjective and injective but not total.
        let c = analyze(3, 2, &pairs(&[(0, 0), (1, 1)]));
        assert!(c.surjective && c.injective && !c.total);
        assert_eq!(c.category, Category::Surjective);
    }

    #[test]
    fn test_injective_takes_priority_over_total() {
        let c = analyze(2, 3, &pairs(&[(0, 0), (1, 1)]));
        assert!(c.total && c.injective && !c.surjective);
        assert_eq!(c.category, Category::Injective);
    }

    #[test]
    fn test_function_like() {
        assert!(!Category::Relation.is_function_like());
        for category in &Category::ALL[1..] {
            assert!(category.is_function_like());
        }
    }

    fn relation_strategy() -> impl Strategy<Value = (usize, usize, Vec<Pair>)> {
        (0..=MAX_ELEMENTS, 0..=MAX_ELEMENTS).prop_flat_map(|(a_len, b_len)| {
            let pair = (0..a_len.max(1), 0..b_len.max(1)).prop_map(|(l, r)| Pair::new(l, r));
            let pairs = if a_len == 0 || b_len == 0 {
                Just(Vec::new()).boxed()
            } else {
                prop::collection::vec(pair, 0..12)
                    .prop_map(|pairs| {
                        Relation::from_pairs(pairs)
                            .map(|relation| relation.pairs().to_vec())
                            .unwrap_or_default()
                    })
                    .boxed()
            };
            (Just(a_len), Just(b_len), pairs)
        })
    }

    proptest! {
        #[test]
        fn classification_ignores_pair_order(
            (a_len, b_len, pairs, shuffled) in relation_strategy().prop_flat_map(
                |(a_len, b_len, pairs)| {
                    let shuffled = Just(pairs.clone()).prop_shuffle();
                    (Just(a_len), Just(b_len), Just(pairs), shuffled)
                }
            )
        ) {
            prop_assert_eq!(analyze(a_len, b_len, &pairs), analyze(a_len, b_len, &shuffled));
        }

        #[test]
        fn bijective_implies_equal_sizes((a_len, b_len, pairs) in relation_strategy()) {
            if classify(a_len, b_len, &pairs) == Category::Bijective {
                prop_assert_eq!(a_len, b_len);
                prop_assert_eq!(pairs.len(), a_len);
            }
        }

        #[test]
        fn non_function_is_always_relation((a_len, b_len, pairs) in relation_strategy()) {
            let c = analyze(a_len, b_len, &pairs);
            if !c.is_function {
                prop_assert_eq!(c.category, Category::Relation);
            }
        }
    }
}
