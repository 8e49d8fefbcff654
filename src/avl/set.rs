//! Ordered set backed by an AVL tree.
//!
//! [`AvlTreeSet`] stores its elements as the keys of an
//! [`AvlTreeMap`] with `()` values, so it inherits the map's balancing,
//! ordering and iteration behaviour unchanged.

use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use super::comparator::{Comparator, NaturalOrder};
use super::error::{InvariantViolation, TreeError};
use super::iterator::{Cursor, IntoIter as MapIntoIter};
use super::map::AvlTreeMap;

/// An ordered set based on an AVL tree.
///
/// # Examples
///
/// ```rust
/// use avl_collections::avl::AvlTreeSet;
///
/// let set: AvlTreeSet<i32> = [10, -436, 5, 15, 12, 8, 6].into_iter().collect();
/// let elements: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(elements, vec![-436, 5, 6, 8, 10, 12, 15]);
/// ```
#[derive(Clone)]
pub struct AvlTreeSet<K, C = NaturalOrder> {
    map: AvlTreeMap<K, (), C>,
}

impl<K: Ord> AvlTreeSet<K> {
    /// Creates an empty set ordered by `K`'s [`Ord`] implementation.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            map: AvlTreeMap::new(),
        }
    }
}

impl<K, C> AvlTreeSet<K, C> {
    /// Creates an empty set ordered by `comparator`.
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            map: AvlTreeMap::with_comparator(comparator),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Height of the underlying tree: -1 when empty.
    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        self.map.height()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfBounds`] if the set is empty.
    pub fn min(&self) -> Result<&K, TreeError> {
        self.map.min().map(|(key, ())| key)
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfBounds`] if the set is empty.
    pub fn max(&self) -> Result<&K, TreeError> {
        self.map.max().map(|(key, ())| key)
    }

    /// Removes and returns the smallest element.
    pub fn pop_min(&mut self) -> Option<K> {
        self.map.pop_min().map(|(key, ())| key)
    }

    /// Removes and returns the largest element.
    pub fn pop_max(&mut self) -> Option<K> {
        self.map.pop_max().map(|(key, ())| key)
    }

    /// Returns a cursor over the elements in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            cursor: self.map.iter(),
        }
    }

    /// Draws the underlying tree; see [`AvlTreeMap::render`].
    #[must_use]
    pub fn render(&self) -> String
    where
        K: fmt::Debug,
    {
        self.map.render()
    }
}

impl<K, C: Comparator<K>> AvlTreeSet<K, C> {
    /// Creates a set ordered by `comparator` from the given elements.
    pub fn from_iter_with_comparator<I>(elements: I, comparator: C) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut set = Self::with_comparator(comparator);
        set.extend(elements);
        set
    }

    /// Adds `element` to the set. Returns `true` if it was not already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeSet;
    ///
    /// let mut set = AvlTreeSet::new();
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: K) -> bool {
        self.map.insert(element, ()).is_none()
    }

    /// Returns `true` if the set contains `element`.
    #[must_use]
    pub fn contains(&self, element: &K) -> bool {
        self.map.contains_key(element)
    }

    /// Returns the stored element equal to `element` under the comparator.
    #[must_use]
    pub fn get(&self, element: &K) -> Option<&K> {
        self.map.get_key_value(element).map(|(key, ())| key)
    }

    /// Removes `element`. Returns `true` if it was present.
    pub fn remove(&mut self, element: &K) -> bool {
        self.map.remove(element).is_some()
    }

    /// Removes and returns the stored element equal to `element`.
    pub fn take(&mut self, element: &K) -> Option<K> {
        self.map.remove_entry(element).map(|(key, ())| key)
    }

    /// Verifies the structural invariants of the underlying tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation>
    where
        K: fmt::Debug,
    {
        self.map.check_invariants()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A forward cursor over the elements of an [`AvlTreeSet`] in ascending order.
///
/// Offers the same `has_next` / `get` / `advance` protocol as
/// [`Cursor`](super::Cursor).
pub struct Iter<'a, K> {
    cursor: Cursor<'a, K, ()>,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, K> Iter<'a, K> {
    /// Returns `true` while the cursor points at an element.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    /// Returns the element under the cursor without moving it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfBounds`] past the last element.
    pub fn get(&self) -> Result<&'a K, TreeError> {
        self.cursor.get().map(|(key, ())| key)
    }

    /// Moves to the next element. Does nothing past the end.
    #[inline]
    pub fn advance(&mut self) {
        self.cursor.advance();
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next().map(|(key, ())| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// An owning iterator over the elements of an [`AvlTreeSet`].
pub struct IntoIter<K> {
    inner: MapIntoIter<K, ()>,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, ())| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Ord> Default for AvlTreeSet<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C: Comparator<K>> Extend<K> for AvlTreeSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|element| (element, ())));
    }
}

impl<K: Ord> FromIterator<K> for AvlTreeSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_iter_with_comparator(iter, NaturalOrder)
    }
}

impl<K, C> IntoIterator for AvlTreeSet<K, C> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.map.into_iter(),
        }
    }
}

impl<'a, K, C> IntoIterator for &'a AvlTreeSet<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, C> PartialEq for AvlTreeSet<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Eq, C> Eq for AvlTreeSet<K, C> {}

impl<K: fmt::Debug, C> fmt::Debug for AvlTreeSet<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, C> fmt::Display for AvlTreeSet<K, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(AvlTreeSet<String>: Send, Sync, Clone);
