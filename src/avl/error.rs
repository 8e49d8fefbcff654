//! Error types for the AVL collections.
//!
//! Lookups that miss are not errors: they are reported through `Option` or
//! `bool`. The types in this module cover the two remaining failure modes:
//! a caller breaking a documented precondition, and the invariant checker
//! finding a corrupted tree.

use std::fmt;

/// Represents a violated precondition on an [`AvlTreeMap`](super::AvlTreeMap),
/// [`AvlTreeSet`](super::AvlTreeSet) or [`Cursor`](super::Cursor).
///
/// # Examples
///
/// ```rust
/// use avl_collections::avl::{AvlTreeMap, TreeError};
///
/// let map: AvlTreeMap<i32, &str> = AvlTreeMap::new();
/// assert_eq!(map.min(), Err(TreeError::OutOfBounds { operation: "min" }));
/// assert_eq!(
///     format!("{}", TreeError::OutOfBounds { operation: "min" }),
///     "min: out of bounds (the tree has no element at this position)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The operation needed an element that does not exist: `min`/`max` on an
    /// empty tree, or reading a cursor that has run past the last entry.
    OutOfBounds {
        /// The name of the operation that failed.
        operation: &'static str,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { operation } => write!(
                formatter,
                "{operation}: out of bounds (the tree has no element at this position)"
            ),
        }
    }
}

impl std::error::Error for TreeError {}

/// Describes the first structural rule found broken by
/// [`AvlTreeMap::check_invariants`](super::AvlTreeMap::check_invariants).
///
/// A correctly implemented tree never produces one of these; they exist so
/// tests can report exactly which rule failed and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A node's balance factor left `[-1, 1]`.
    Unbalanced {
        /// Debug rendering of the offending node's key.
        key: String,
        /// `height(right) - height(left)` at that node.
        balance_factor: i32,
    },
    /// A node's cached height disagrees with the height of its subtree.
    StaleHeight {
        /// Debug rendering of the offending node's key.
        key: String,
        /// The cached value.
        cached: i32,
        /// The recomputed value.
        actual: i32,
    },
    /// Two consecutive in-order keys are not strictly increasing.
    OutOfOrder {
        /// Debug rendering of the earlier key.
        previous: String,
        /// Debug rendering of the later key.
        next: String,
    },
    /// The stored length differs from the reachable node count.
    LengthMismatch {
        /// The value of `len()`.
        stored: usize,
        /// The number of reachable nodes.
        counted: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbalanced {
                key,
                balance_factor,
            } => write!(
                formatter,
                "node {key} is unbalanced (balance factor {balance_factor})"
            ),
            Self::StaleHeight {
                key,
                cached,
                actual,
            } => write!(
                formatter,
                "node {key} caches height {cached} but its subtree has height {actual}"
            ),
            Self::OutOfOrder { previous, next } => {
                write!(formatter, "keys out of order: {previous} is not below {next}")
            }
            Self::LengthMismatch { stored, counted } => write!(
                formatter,
                "length is {stored} but {counted} nodes are reachable"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("min")]
    #[case("max")]
    #[case("Cursor::get")]
    fn test_out_of_bounds_display_names_operation(#[case] operation: &'static str) {
        let error = TreeError::OutOfBounds { operation };
        assert!(format!("{error}").starts_with(operation));
    }

    #[rstest]
    fn test_unbalanced_display() {
        let violation = InvariantViolation::Unbalanced {
            key: "7".to_string(),
            balance_factor: -2,
        };
        assert_eq!(
            format!("{violation}"),
            "node 7 is unbalanced (balance factor -2)"
        );
    }

    #[rstest]
    fn test_length_mismatch_display() {
        let violation = InvariantViolation::LengthMismatch {
            stored: 3,
            counted: 2,
        };
        assert_eq!(
            format!("{violation}"),
            "length is 3 but 2 nodes are reachable"
        );
    }

    #[rstest]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&TreeError::OutOfBounds { operation: "max" });
        assert_error(&InvariantViolation::LengthMismatch {
            stored: 0,
            counted: 1,
        });
    }
}
