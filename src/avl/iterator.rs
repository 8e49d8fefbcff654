//! In-order traversal.
//!
//! Both iterators keep a stack of the nodes whose left subtree is finished
//! but which have not been yielded yet: the pending right-spine ancestors of
//! the current position. The top of the stack is always the next entry.
//! Advancing pops it and pushes the left spine of its right child, so a full
//! traversal performs at most `2 * len` stack operations.

use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::error::TreeError;
use super::node::{Link, Node};

/// Number of stack frames kept inline before spilling to the heap.
///
/// An AVL tree of height 16 already holds thousands of entries.
const INLINE_DEPTH: usize = 16;

// =============================================================================
// Cursor
// =============================================================================

/// A forward cursor over the entries of an [`AvlTreeMap`](super::AvlTreeMap)
/// in ascending key order.
///
/// The cursor borrows the map, so the map cannot be modified while the cursor
/// is alive. Besides the [`Iterator`] interface it offers the explicit
/// `has_next` / `get` / `advance` protocol.
///
/// # Examples
///
/// ```rust
/// use avl_collections::avl::AvlTreeMap;
///
/// let map: AvlTreeMap<i32, char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
///
/// let mut cursor = map.iter();
/// let mut seen = Vec::new();
/// while cursor.has_next() {
///     let (key, value) = cursor.get().unwrap();
///     seen.push((*key, *value));
///     cursor.advance();
/// }
/// assert_eq!(seen, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
/// assert!(cursor.get().is_err());
/// ```
pub struct Cursor<'a, K, V> {
    stack: SmallVec<[&'a Node<K, V>; INLINE_DEPTH]>,
    remaining: usize,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(super) fn new(root: Option<&'a Node<K, V>>, length: usize) -> Self {
        let mut cursor = Self {
            stack: SmallVec::new(),
            remaining: length,
        };
        cursor.push_left_spine(root);
        cursor
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }

    /// Returns `true` while the cursor points at an entry.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    /// Returns the entry under the cursor without moving it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfBounds`] once the cursor has moved past the
    /// last entry.
    pub fn get(&self) -> Result<(&'a K, &'a V), TreeError> {
        self.stack
            .last()
            .map(|node| (&node.key, &node.value))
            .ok_or(TreeError::OutOfBounds {
                operation: "Cursor::get",
            })
    }

    /// Moves to the next entry in key order. Does nothing past the end.
    #[inline]
    pub fn advance(&mut self) {
        self.next();
    }
}

impl<'a, K, V> Iterator for Cursor<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Cursor<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Cursor<'_, K, V> {}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the entries of an [`AvlTreeMap`](super::AvlTreeMap)
/// in ascending key order.
///
/// Nodes are unlinked as the traversal reaches them, so the iterator needs no
/// `Clone` bound on keys or values. Entries not yet yielded are dropped with
/// the iterator.
pub struct IntoIter<K, V> {
    stack: SmallVec<[Box<Node<K, V>>; INLINE_DEPTH]>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(root: Link<K, V>, length: usize) -> Self {
        let mut iterator = Self {
            stack: SmallVec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root);
        iterator
    }

    fn push_left_spine(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}
