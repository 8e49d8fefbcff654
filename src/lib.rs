//! # avl-collections
//!
//! Height-balanced ordered collections for Rust.
//!
//! ## Overview
//!
//! This library provides an ordered map and an ordered set backed by an AVL
//! tree. Both are mutated in place, keep every node balanced within one level
//! after each operation, and expose a lazy in-order cursor.
//!
//! - **[`AvlTreeMap`](avl::AvlTreeMap)**: insert-or-update, lookup, removal,
//!   min/max, in-order iteration
//! - **[`AvlTreeSet`](avl::AvlTreeSet)**: the same operations over bare keys
//! - **[`Comparator`](avl::Comparator)**: pluggable key ordering, fixed at
//!   construction
//!
//! ## Feature Flags
//!
//! - `tracing`: emit `trace`-level events for rotations and no-op removals
//!
//! ## Example
//!
//! ```rust
//! use avl_collections::prelude::*;
//!
//! let mut map = AvlTreeMap::new();
//! map.insert(10, 20);
//! map.insert(5, 10);
//! map.insert(15, 125);
//! map.remove(&5);
//!
//! assert_eq!(map.get(&5), None);
//! assert_eq!(map.get(&10), Some(&20));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the collection types, the comparator contract and the errors.
///
/// # Usage
///
/// ```rust
/// use avl_collections::prelude::*;
/// ```
pub mod prelude {
    pub use crate::avl::*;
}

pub mod avl;
