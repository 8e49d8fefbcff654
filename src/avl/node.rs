//! Tree nodes, rotations and the rebalance step.
//!
//! A node owns both children through a [`Link`]. The `&mut Link` a node is
//! reached through is its slot: rewriting the slot replaces the whole
//! subtree, which is how rotations hand a new subtree root back to the
//! parent without any parent pointer.

use std::mem;

/// An owned, possibly empty subtree.
pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

/// The storage unit of the tree.
#[derive(Clone)]
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
    /// Cached `1 + max(height(left), height(right))`; a leaf has height 0.
    pub(super) height: i32,
}

/// Height of a possibly empty subtree. An empty subtree has height -1.
#[inline]
pub(super) fn height<K, V>(link: &Link<K, V>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

impl<K, V> Node<K, V> {
    /// Creates a detached leaf.
    pub(super) const fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            height: 0,
        }
    }

    #[inline]
    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// `height(right) - height(left)`; negative when left heavy.
    #[inline]
    pub(super) fn balance_factor(&self) -> i32 {
        height(&self.right) - height(&self.left)
    }

    /// The node holding the smallest key in this subtree.
    pub(super) fn leftmost(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    /// The node holding the largest key in this subtree.
    pub(super) fn rightmost(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        current
    }
}

// =============================================================================
// Rotations
// =============================================================================

/// The restructuring applied by [`rebalance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rotation {
    /// The subtree was already balanced; only its height was refreshed.
    None,
    Left,
    Right,
    LeftRight,
    RightLeft,
}

/// Rotates the subtree in `slot` to the left.
///
/// ```text
///     x                y
///    / \              / \
///   a   y     =>     x   c
///      / \          / \
///     b   c        a   b
/// ```
fn rotate_left<K, V>(slot: &mut Box<Node<K, V>>) {
    let Some(mut pivot) = slot.right.take() else {
        return;
    };
    slot.right = pivot.left.take();
    slot.update_height();
    mem::swap(slot, &mut pivot);
    slot.left = Some(pivot);
    slot.update_height();
}

/// Rotates the subtree in `slot` to the right.
///
/// ```text
///       x            y
///      / \          / \
///     y   c   =>   a   x
///    / \              / \
///   a   b            b   c
/// ```
fn rotate_right<K, V>(slot: &mut Box<Node<K, V>>) {
    let Some(mut pivot) = slot.left.take() else {
        return;
    };
    slot.left = pivot.right.take();
    slot.update_height();
    mem::swap(slot, &mut pivot);
    slot.right = Some(pivot);
    slot.update_height();
}

/// Restores the balance of the subtree in `slot`, whose children must
/// already be balanced, and refreshes every height it touches.
///
/// A pivot child with balance factor 0 takes the single rotation. That case
/// only arises after a removal, where the double rotation would leave the
/// subtree unbalanced.
pub(super) fn rebalance<K, V>(slot: &mut Box<Node<K, V>>) -> Rotation {
    let factor = slot.balance_factor();
    let rotation = if factor < -1 {
        let leans_inward = slot
            .left
            .as_ref()
            .is_some_and(|left| left.balance_factor() > 0);
        if leans_inward {
            if let Some(left) = slot.left.as_mut() {
                rotate_left(left);
            }
            rotate_right(slot);
            Rotation::LeftRight
        } else {
            rotate_right(slot);
            Rotation::Right
        }
    } else if factor > 1 {
        let leans_inward = slot
            .right
            .as_ref()
            .is_some_and(|right| right.balance_factor() < 0);
        if leans_inward {
            if let Some(right) = slot.right.as_mut() {
                rotate_right(right);
            }
            rotate_left(slot);
            Rotation::RightLeft
        } else {
            rotate_left(slot);
            Rotation::Left
        }
    } else {
        slot.update_height();
        Rotation::None
    };

    #[cfg(feature = "tracing")]
    if rotation != Rotation::None {
        tracing::trace!(
            ?rotation,
            balance_factor = factor,
            height = slot.height,
            "rebalanced subtree"
        );
    }

    rotation
}

// =============================================================================
// Extreme Removal
// =============================================================================

/// Unlinks the leftmost node of the subtree in `slot` and returns its entry,
/// rebalancing every ancestor on the way back up.
///
/// The leftmost node has no left child, so its right child takes its slot.
pub(super) fn detach_min<K, V>(slot: &mut Link<K, V>) -> Option<(K, V)> {
    let node = slot.as_mut()?;
    if node.left.is_some() {
        let entry = detach_min(&mut node.left);
        rebalance(node);
        return entry;
    }
    let mut minimum = slot.take()?;
    *slot = minimum.right.take();
    Some((minimum.key, minimum.value))
}

/// Mirror image of [`detach_min`].
pub(super) fn detach_max<K, V>(slot: &mut Link<K, V>) -> Option<(K, V)> {
    let node = slot.as_mut()?;
    if node.right.is_some() {
        let entry = detach_max(&mut node.right);
        rebalance(node);
        return entry;
    }
    let mut maximum = slot.take()?;
    *slot = maximum.left.take();
    Some((maximum.key, maximum.value))
}

/// Unlinks the node in `slot` itself and returns its entry.
///
/// Without a right child the node is spliced out and its left child takes
/// the slot. Otherwise the in-order successor is detached from the right
/// subtree and its entry moves into this node, which stays in place.
pub(super) fn detach_root<K, V>(slot: &mut Link<K, V>) -> Option<(K, V)> {
    let node = slot.as_mut()?;
    if node.right.is_none() {
        let mut removed = slot.take()?;
        *slot = removed.left.take();
        return Some((removed.key, removed.value));
    }
    let (successor_key, successor_value) = detach_min(&mut node.right)?;
    let key = mem::replace(&mut node.key, successor_key);
    let value = mem::replace(&mut node.value, successor_value);
    rebalance(node);
    Some((key, value))
}
