//! Ordered map backed by an AVL tree.
//!
//! This module provides [`AvlTreeMap`], a mutable ordered map that keeps
//! itself height-balanced: at every node the heights of the two subtrees
//! differ by at most one.
//!
//! # Overview
//!
//! - O(log N) get
//! - O(log N) insert
//! - O(log N) remove
//! - O(log N) min/max
//! - amortized O(1) per iteration step
//! - O(1) len and `is_empty`
//!
//! # Internal Structure
//!
//! Insertion and removal descend recursively through the `&mut` slots that
//! own each node. After a node is added or unlinked, every frame of the
//! recursion rebalances its own slot on the way back up, innermost first.
//! Inserting a key that is already present only replaces the value; no
//! frame rebalances and nothing is allocated.
//!
//! Removing a node with two children moves its in-order successor's entry
//! into it and unlinks the successor instead, so the removed node itself
//! never changes position.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use super::comparator::{Comparator, NaturalOrder};
use super::error::{InvariantViolation, TreeError};
use super::iterator::{Cursor, IntoIter};
use super::node::{self, Link, Node};

// =============================================================================
// AvlTreeMap Definition
// =============================================================================

/// An ordered map based on an AVL tree.
///
/// Keys are ordered by the [`Comparator`] given at construction, which
/// defaults to the key's [`Ord`] implementation. The comparator cannot be
/// changed afterwards.
///
/// # Time Complexity
///
/// | Operation      | Complexity        |
/// |----------------|-------------------|
/// | `new`          | O(1)              |
/// | `get`          | O(log N)          |
/// | `insert`       | O(log N)          |
/// | `remove`       | O(log N)          |
/// | `contains_key` | O(log N)          |
/// | `min`/`max`    | O(log N)          |
/// | `len`          | O(1)              |
///
/// # Examples
///
/// ```rust
/// use avl_collections::avl::AvlTreeMap;
///
/// let mut map = AvlTreeMap::new();
/// map.insert(10, 20);
/// map.insert(5, 10);
/// map.insert(15, 125);
/// map.remove(&5);
///
/// assert_eq!(map.get(&5), None);
/// assert_eq!(map.get(&10), Some(&20));
/// assert_eq!(map.len(), 2);
/// ```
#[derive(Clone)]
pub struct AvlTreeMap<K, V, C = NaturalOrder> {
    root: Link<K, V>,
    length: usize,
    comparator: C,
}

impl<K: Ord, V> AvlTreeMap<K, V> {
    /// Creates an empty map ordered by `K`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, String> = AvlTreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> AvlTreeMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::with_comparator(|left: &i32, right: &i32| right.cmp(left));
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.min(), Ok((&2, &"two")));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            length: 0,
            comparator,
        }
    }

    /// Returns the comparator ordering this map.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries in the map.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Height of the tree: -1 when empty, 0 for a single entry.
    ///
    /// For `n` entries this never exceeds about `1.44 * log2(n + 2)`.
    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        node::height(&self.root)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.root = None;
        self.length = 0;
    }

    /// Returns the entry with the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfBounds`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::{AvlTreeMap, TreeError};
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.min(), Err(TreeError::OutOfBounds { operation: "min" }));
    ///
    /// map.insert(3, "three");
    /// map.insert(1, "one");
    /// assert_eq!(map.min(), Ok((&1, &"one")));
    /// ```
    pub fn min(&self) -> Result<(&K, &V), TreeError> {
        self.first_key_value()
            .ok_or(TreeError::OutOfBounds { operation: "min" })
    }

    /// Returns the entry with the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfBounds`] if the map is empty.
    pub fn max(&self) -> Result<(&K, &V), TreeError> {
        self.last_key_value()
            .ok_or(TreeError::OutOfBounds { operation: "max" })
    }

    /// Returns the entry with the smallest key, or `None` if the map is empty.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.root
            .as_deref()
            .map(Node::leftmost)
            .map(|node| (&node.key, &node.value))
    }

    /// Returns the entry with the largest key, or `None` if the map is empty.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.root
            .as_deref()
            .map(Node::rightmost)
            .map(|node| (&node.key, &node.value))
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let mut map: AvlTreeMap<i32, i32> = (1..=3).map(|key| (key, key * 10)).collect();
    /// assert_eq!(map.pop_min(), Some((1, 10)));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        let entry = node::detach_min(&mut self.root)?;
        self.length -= 1;
        Some(entry)
    }

    /// Removes and returns the entry with the largest key.
    pub fn pop_max(&mut self) -> Option<(K, V)> {
        let entry = node::detach_max(&mut self.root)?;
        self.length -= 1;
        Some(entry)
    }

    /// Returns a cursor over the entries in ascending key order.
    ///
    /// Only the left spine of the root is visited up front; the rest of the
    /// tree is walked lazily as the cursor advances.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
    /// let keys: Vec<i32> = map.iter().map(|(key, _)| *key).collect();
    /// assert_eq!(keys, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.root.as_deref(), self.length)
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, i32> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
    /// let sum: i32 = map.values().sum();
    /// assert_eq!(sum, 60);
    /// ```
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Draws the tree sideways, one key per line, right subtrees first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let map: AvlTreeMap<i32, ()> = [(1, ()), (2, ()), (3, ())].into_iter().collect();
    /// assert_eq!(map.render(), "2\n├─3\n└─1\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String
    where
        K: fmt::Debug,
    {
        let mut output = String::new();
        if let Some(root) = self.root.as_deref() {
            Self::render_node(root, "", &mut output);
        }
        output
    }

    fn render_node(node: &Node<K, V>, prefix: &str, output: &mut String)
    where
        K: fmt::Debug,
    {
        output.push_str(&format!("{:?}\n", node.key));
        let has_left = node.left.is_some();
        if let Some(right) = node.right.as_deref() {
            let (branch, indent) = if has_left {
                ("├─", "│ ")
            } else {
                ("└─", "  ")
            };
            output.push_str(prefix);
            output.push_str(branch);
            Self::render_node(right, &format!("{prefix}{indent}"), output);
        }
        if let Some(left) = node.left.as_deref() {
            output.push_str(prefix);
            output.push_str("└─");
            Self::render_node(left, &format!("{prefix}  "), output);
        }
    }
}

impl<K, V, C: Comparator<K>> AvlTreeMap<K, V, C> {
    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present its value is replaced in place and the
    /// old value is returned; the tree's shape does not change. Otherwise a
    /// new leaf is linked in, the path back to the root is rebalanced, and
    /// `None` is returned.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "ONE"), Some("one"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&1), Some(&"ONE"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = Self::insert_into(&mut self.root, key, value, &self.comparator);
        if previous.is_none() {
            self.length += 1;
        }
        previous
    }

    /// Recursive helper for insert; each frame owns one slot of the path.
    fn insert_into(slot: &mut Link<K, V>, key: K, value: V, comparator: &C) -> Option<V> {
        let Some(node) = slot.as_mut() else {
            *slot = Some(Box::new(Node::leaf(key, value)));
            return None;
        };
        let previous = match comparator.compare(&key, &node.key) {
            Ordering::Less => Self::insert_into(&mut node.left, key, value, comparator),
            Ordering::Greater => Self::insert_into(&mut node.right, key, value, comparator),
            Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
        };
        if previous.is_none() {
            node::rebalance(node);
        }
        previous
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// map.insert("hello".to_string(), 42);
    /// assert_eq!(map.get(&"hello".to_string()), Some(&42));
    /// assert_eq!(map.get(&"world".to_string()), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|node| &node.value)
    }

    /// Returns the stored key and value for `key`.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|node| (&node.key, &node.value))
    }

    /// Returns a mutable reference to the value stored under `key`.
    ///
    /// Keys cannot be reached mutably, so the ordering cannot be broken
    /// through this reference.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let comparator = &self.comparator;
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match comparator.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    fn find(&self, key: &K) -> Option<&Node<K, V>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    /// Removes `key` and returns its value. Removing an absent key leaves the
    /// map untouched and returns `None`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let mut map: AvlTreeMap<i32, &str> = [(1, "one"), (2, "two")].into_iter().collect();
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key` and returns the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let removed = Self::remove_from(&mut self.root, key, &self.comparator);
        match removed {
            Some(_) => self.length -= 1,
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(length = self.length, "remove: key not present");
            }
        }
        removed
    }

    /// Recursive helper for remove; mirrors [`Self::insert_into`].
    fn remove_from(slot: &mut Link<K, V>, key: &K, comparator: &C) -> Option<(K, V)> {
        let node = slot.as_mut()?;
        let removed = match comparator.compare(key, &node.key) {
            Ordering::Less => Self::remove_from(&mut node.left, key, comparator),
            Ordering::Greater => Self::remove_from(&mut node.right, key, comparator),
            Ordering::Equal => return node::detach_root(slot),
        };
        if removed.is_some() {
            node::rebalance(node);
        }
        removed
    }

    /// Verifies every structural invariant of the tree.
    ///
    /// Checks, in one pass, that each cached height is exact, that every
    /// balance factor lies in `[-1, 1]`, that keys are strictly increasing
    /// under the comparator, and that `len()` matches the node count.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use avl_collections::avl::AvlTreeMap;
    ///
    /// let mut map = AvlTreeMap::new();
    /// for key in 0..100 {
    ///     map.insert(key, ());
    ///     assert_eq!(map.check_invariants(), Ok(()));
    /// }
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantViolation>
    where
        K: fmt::Debug,
    {
        let counted = Self::check_subtree(&self.root)?.1;
        if counted != self.length {
            return Err(InvariantViolation::LengthMismatch {
                stored: self.length,
                counted,
            });
        }
        let mut previous: Option<&K> = None;
        for (key, _) in self {
            if let Some(previous) = previous
                && self.comparator.compare(previous, key) != Ordering::Less
            {
                return Err(InvariantViolation::OutOfOrder {
                    previous: format!("{previous:?}"),
                    next: format!("{key:?}"),
                });
            }
            previous = Some(key);
        }
        Ok(())
    }

    /// Returns the recomputed `(height, node count)` of a subtree.
    fn check_subtree(link: &Link<K, V>) -> Result<(i32, usize), InvariantViolation>
    where
        K: fmt::Debug,
    {
        let Some(node) = link.as_deref() else {
            return Ok((-1, 0));
        };
        let (left_height, left_count) = Self::check_subtree(&node.left)?;
        let (right_height, right_count) = Self::check_subtree(&node.right)?;
        let actual = 1 + left_height.max(right_height);
        if node.height != actual {
            return Err(InvariantViolation::StaleHeight {
                key: format!("{:?}", node.key),
                cached: node.height,
                actual,
            });
        }
        let balance_factor = right_height - left_height;
        if !(-1..=1).contains(&balance_factor) {
            return Err(InvariantViolation::Unbalanced {
                key: format!("{:?}", node.key),
                balance_factor,
            });
        }
        Ok((actual, left_count + right_count + 1))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K: Ord, V> Default for AvlTreeMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for AvlTreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlTreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C> IntoIterator for AvlTreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root, self.length)
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Cursor<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for AvlTreeMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for AvlTreeMap<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for AvlTreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for AvlTreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(AvlTreeMap<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Cursor<'static, i32, String>: Send, Sync);
static_assertions::assert_impl_all!(IntoIter<i32, String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_balanced<K: fmt::Debug, V, C: Comparator<K>>(map: &AvlTreeMap<K, V, C>) {
        if let Err(violation) = map.check_invariants() {
            panic!("{violation}\n{}", map.render());
        }
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_map() {
        let map: AvlTreeMap<i32, String> = AvlTreeMap::new();
        assert_eq!(format!("{map}"), "{}");
    }

    #[rstest]
    fn test_display_multiple_entries_sorted() {
        let mut map = AvlTreeMap::new();
        map.insert(3, "three");
        map.insert(1, "one");
        map.insert(2, "two");
        assert_eq!(format!("{map}"), "{1: one, 2: two, 3: three}");
        assert_eq!(format!("{map:?}"), r#"{1: "one", 2: "two", 3: "three"}"#);
    }

    // =========================================================================
    // Structure Tests
    // =========================================================================

    #[rstest]
    fn test_insert_new_leaf_has_height_zero() {
        let mut map = AvlTreeMap::new();
        map.insert(1, ());
        assert_eq!(map.height(), 0);
        assert_eq!(AvlTreeMap::<i32, ()>::new().height(), -1);
    }

    #[rstest]
    fn test_ascending_inserts_stay_logarithmic() {
        let map: AvlTreeMap<i32, ()> = (0..1023).map(|key| (key, ())).collect();
        // a perfect tree of 1023 nodes: ascending inserts into an AVL tree produce one
        assert_eq!(map.height(), 9);
        assert_balanced(&map);
    }

    #[rstest]
    fn test_update_does_not_restructure() {
        let mut map: AvlTreeMap<i32, i32> = (0..7).map(|key| (key, key)).collect();
        let before = map.render();
        assert_eq!(map.insert(3, 300), Some(3));
        assert_eq!(map.render(), before);
        assert_eq!(map.get(&3), Some(&300));
    }

    #[rstest]
    fn test_remove_root_with_two_children_uses_successor() {
        let mut map: AvlTreeMap<i32, ()> = (1..=3).map(|key| (key, ())).collect();
        assert_eq!(map.render(), "2\n├─3\n└─1\n");
        map.remove(&2);
        assert_eq!(map.render(), "3\n└─1\n");
        assert_balanced(&map);
    }

    #[rstest]
    fn test_remove_triggers_rotation_at_root() {
        let mut map: AvlTreeMap<i32, ()> = [2, 1, 3, 4].into_iter().map(|key| (key, ())).collect();
        map.remove(&1);
        assert_eq!(map.render(), "3\n├─4\n└─2\n");
        assert_balanced(&map);
    }

    #[rstest]
    fn test_check_invariants_reports_length_mismatch() {
        let mut map: AvlTreeMap<i32, ()> = (0..3).map(|key| (key, ())).collect();
        map.length = 5;
        assert_eq!(
            map.check_invariants(),
            Err(InvariantViolation::LengthMismatch {
                stored: 5,
                counted: 3
            })
        );
    }

    #[rstest]
    fn test_check_invariants_reports_stale_height() {
        let mut map: AvlTreeMap<i32, ()> = (0..3).map(|key| (key, ())).collect();
        if let Some(root) = map.root.as_mut() {
            root.height = 7;
        }
        assert!(matches!(
            map.check_invariants(),
            Err(InvariantViolation::StaleHeight { cached: 7, actual: 1, .. })
        ));
    }

    #[rstest]
    fn test_check_invariants_reports_unbalanced_chain() {
        let mut leaf = Box::new(Node::leaf(3, ()));
        leaf.height = 0;
        let mut middle = Box::new(Node::leaf(2, ()));
        middle.right = Some(leaf);
        middle.height = 1;
        let mut root = Box::new(Node::leaf(1, ()));
        root.right = Some(middle);
        root.height = 2;
        let map = AvlTreeMap {
            root: Some(root),
            length: 3,
            comparator: NaturalOrder,
        };
        assert!(matches!(
            map.check_invariants(),
            Err(InvariantViolation::Unbalanced { balance_factor: 2, .. })
        ));
    }

    #[rstest]
    fn test_check_invariants_reports_out_of_order_keys() {
        let mut map: AvlTreeMap<i32, ()> = (0..3).map(|key| (key, ())).collect();
        if let Some(left) = map.root.as_mut().and_then(|root| root.left.as_mut()) {
            left.key = 5;
        }
        assert_eq!(
            map.check_invariants(),
            Err(InvariantViolation::OutOfOrder {
                previous: "5".to_string(),
                next: "1".to_string()
            })
        );
    }

    #[rstest]
    fn test_pop_min_and_pop_max_drain_in_order() {
        let mut map: AvlTreeMap<i32, i32> = (0..20).map(|key| (key, -key)).collect();
        let mut low = Vec::new();
        let mut high = Vec::new();
        while !map.is_empty() {
            low.extend(map.pop_min());
            high.extend(map.pop_max());
            assert_balanced(&map);
        }
        assert_eq!(low, (0..10).map(|key| (key, -key)).collect::<Vec<_>>());
        assert_eq!(high, (10..20).rev().map(|key| (key, -key)).collect::<Vec<_>>());
        assert_eq!(map.pop_min(), None);
    }

    #[rstest]
    fn test_clear_resets_length_and_root() {
        let mut map: AvlTreeMap<i32, ()> = (0..10).map(|key| (key, ())).collect();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.height(), -1);
        assert_eq!(map.min(), Err(TreeError::OutOfBounds { operation: "min" }));
    }
}
