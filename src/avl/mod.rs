//! Height-balanced (AVL) ordered collections.
//!
//! This module provides two mutable ordered collections sharing one tree
//! implementation:
//!
//! - [`AvlTreeMap`]: ordered map with insert-or-update, lookup, removal,
//!   min/max and in-order iteration
//! - [`AvlTreeSet`]: ordered set over the same tree, storing `()` values
//!
//! # Balance
//!
//! After every completed insertion or removal, the heights of the two
//! subtrees of any node differ by at most one. A tree of `n` entries is
//! therefore never taller than about `1.44 * log2(n + 2)`, which bounds
//! every operation to O(log N).
//!
//! # Ordering
//!
//! Keys are ordered by a [`Comparator`] fixed at construction. `new()` uses
//! [`NaturalOrder`] (the key's [`Ord`]); `with_comparator` accepts any
//! `Fn(&K, &K) -> Ordering` or a [`Comparator`] implementation.
//!
//! # Examples
//!
//! ## `AvlTreeMap`
//!
//! ```rust
//! use avl_collections::avl::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! for key in (0..=33).rev() {
//!     map.insert(key, key * 2);
//! }
//! assert_eq!(map.len(), 34);
//! assert_eq!(map.min(), Ok((&0, &0)));
//! assert_eq!(map.max(), Ok((&33, &66)));
//! assert_eq!(map.check_invariants(), Ok(()));
//! ```
//!
//! ## `AvlTreeSet`
//!
//! ```rust
//! use avl_collections::avl::AvlTreeSet;
//!
//! let mut set = AvlTreeSet::new();
//! for element in [3, 1, 5, 2, 4, 3, 1, 5, 2, 4] {
//!     set.insert(element);
//! }
//! assert_eq!(set.len(), 5);
//! assert!(set.contains(&4));
//! assert!(!set.contains(&6));
//! ```

mod comparator;
mod error;
mod iterator;
mod map;
mod node;
mod set;

pub use comparator::Comparator;
pub use comparator::NaturalOrder;
pub use comparator::Reverse;
pub use error::InvariantViolation;
pub use error::TreeError;
pub use iterator::Cursor;
pub use iterator::IntoIter;
pub use map::AvlTreeMap;
pub use set::AvlTreeSet;
pub use set::IntoIter as AvlTreeSetIntoIter;
pub use set::Iter as AvlTreeSetIter;
