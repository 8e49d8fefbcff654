//! The key-ordering contract used for every descent.
//!
//! A tree is built with one [`Comparator`] and keeps it for its whole life.
//! Any `Fn(&K, &K) -> Ordering` closure qualifies, and [`NaturalOrder`] is the
//! default for keys that implement [`Ord`].

use std::cmp::Ordering;

/// A strict total order over keys of type `K`.
///
/// Implementations must be pure and consistent: the same pair of keys must
/// always compare the same way, and the order must be transitive and
/// antisymmetric. Breaking this contract does not cause memory unsafety, but
/// lookups, insertions and removals may then return arbitrary results.
///
/// # Examples
///
/// ```rust
/// use avl_collections::avl::{AvlTreeMap, Comparator};
/// use std::cmp::Ordering;
///
/// struct ByLength;
///
/// impl Comparator<String> for ByLength {
///     fn compare(&self, left: &String, right: &String) -> Ordering {
///         left.len().cmp(&right.len())
///     }
/// }
///
/// let mut map = AvlTreeMap::with_comparator(ByLength);
/// map.insert("ccc".to_string(), 3);
/// map.insert("a".to_string(), 1);
/// assert_eq!(map.min().map(|(_, value)| *value), Ok(1));
/// ```
pub trait Comparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

/// The comparator that defers to the key's [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Reverses another comparator.
///
/// # Examples
///
/// ```rust
/// use avl_collections::avl::{AvlTreeSet, NaturalOrder, Reverse};
///
/// let set: AvlTreeSet<i32, _> =
///     AvlTreeSet::from_iter_with_comparator([1, 3, 2], Reverse(NaturalOrder));
/// let keys: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(keys, vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reverse<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.0.compare(right, left)
    }
}
