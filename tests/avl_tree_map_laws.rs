//! Property-based tests for AvlTreeMap.
//!
//! These tests check the map against `std::collections::BTreeMap` as a
//! model, and verify the balance invariant after arbitrary operation
//! sequences, using proptest.

use avl_collections::avl::AvlTreeMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

#[derive(Debug, Clone)]
enum Operation {
    Insert(i16, i32),
    Remove(i16),
    PopMin,
    PopMax,
}

/// Keys come from a narrow range so removals and updates hit existing keys often.
fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => (any::<i16>().prop_map(|key| key % 64), any::<i32>())
            .prop_map(|(key, value)| Operation::Insert(key, value)),
        3 => any::<i16>().prop_map(|key| Operation::Remove(key % 64)),
        1 => Just(Operation::PopMin),
        1 => Just(Operation::PopMax),
    ]
}

fn arbitrary_map(max_size: usize) -> impl Strategy<Value = AvlTreeMap<i32, i32>> {
    prop::collection::vec((any::<i32>(), any::<i32>()), 0..max_size)
        .prop_map(|entries| entries.into_iter().collect::<AvlTreeMap<i32, i32>>())
}

// =============================================================================
// Structural Invariants
// =============================================================================

proptest! {
    /// Invariant: after every operation the tree is balanced, heights are
    /// exact, keys are ordered and the length matches the node count.
    #[test]
    fn prop_invariants_hold_after_every_operation(
        operations in prop::collection::vec(operation(), 0..300)
    ) {
        let mut map = AvlTreeMap::new();
        for operation in operations {
            match operation {
                Operation::Insert(key, value) => { map.insert(key, value); }
                Operation::Remove(key) => { map.remove(&key); }
                Operation::PopMin => { map.pop_min(); }
                Operation::PopMax => { map.pop_max(); }
            }
            let checked = map.check_invariants();
            prop_assert!(checked.is_ok(), "{:?}\n{}", checked, map.render());
        }
    }

    /// The map behaves exactly like `BTreeMap` for the same operations.
    #[test]
    fn prop_matches_btreemap_model(
        operations in prop::collection::vec(operation(), 0..300)
    ) {
        let mut map = AvlTreeMap::new();
        let mut model = BTreeMap::new();
        for operation in operations {
            match operation {
                Operation::Insert(key, value) => {
                    prop_assert_eq!(map.insert(key, value), model.insert(key, value));
                }
                Operation::Remove(key) => {
                    prop_assert_eq!(map.remove(&key), model.remove(&key));
                }
                Operation::PopMin => {
                    prop_assert_eq!(map.pop_min(), model.pop_first());
                }
                Operation::PopMax => {
                    prop_assert_eq!(map.pop_max(), model.pop_last());
                }
            }
            prop_assert_eq!(map.len(), model.len());
        }
        prop_assert!(map.iter().eq(model.iter()));
    }

    /// Height stays within the AVL bound of 1.44 * log2(n + 2).
    #[test]
    fn prop_height_is_logarithmic(map in arbitrary_map(2000)) {
        #[allow(clippy::cast_precision_loss)]
        let bound = 1.4405 * ((map.len() + 2) as f64).log2();
        prop_assert!(f64::from(map.height()) <= bound);
    }
}

// =============================================================================
// Get-Insert Laws
// =============================================================================

proptest! {
    /// Law: get after insert returns the inserted value.
    #[test]
    fn prop_get_insert_law(map in arbitrary_map(50), key: i32, value: i32) {
        let mut map = map;
        map.insert(key, value);
        prop_assert_eq!(map.get(&key), Some(&value));
    }

    /// Law: insert does not affect other keys.
    #[test]
    fn prop_get_insert_other_law(map in arbitrary_map(50), key1: i32, key2: i32, value: i32) {
        prop_assume!(key1 != key2);
        let before = map.get(&key2).copied();
        let mut map = map;
        map.insert(key1, value);
        prop_assert_eq!(map.get(&key2).copied(), before);
    }

    /// Law: inserting twice under one key keeps the length and the last value.
    #[test]
    fn prop_insert_idempotent_length(map in arbitrary_map(50), key: i32, first: i32, second: i32) {
        let mut map = map;
        map.insert(key, first);
        let length = map.len();
        map.insert(key, second);
        prop_assert_eq!(map.len(), length);
        prop_assert_eq!(map.get(&key), Some(&second));
    }
}

// =============================================================================
// Remove Laws
// =============================================================================

proptest! {
    /// Law: get after remove returns None.
    #[test]
    fn prop_get_remove_law(map in arbitrary_map(50), key: i32) {
        let mut map = map;
        map.remove(&key);
        prop_assert_eq!(map.get(&key), None);
    }

    /// Law: removing every inserted key drains the map.
    #[test]
    fn prop_remove_all_drains(keys in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut map: AvlTreeMap<i32, ()> = keys.iter().map(|key| (*key, ())).collect();
        for key in &keys {
            map.remove(key);
        }
        prop_assert_eq!(map.len(), 0);
        prop_assert!(map.is_empty());
        prop_assert_eq!(map.height(), -1);
    }

    /// Law: membership reflects exactly the inserted-and-not-removed keys.
    #[test]
    fn prop_membership(
        inserted in prop::collection::btree_set(any::<i16>(), 0..100),
        removed in prop::collection::btree_set(any::<i16>(), 0..50),
        probe: i16
    ) {
        let mut map: AvlTreeMap<i16, ()> = inserted.iter().map(|key| (*key, ())).collect();
        for key in &removed {
            map.remove(key);
        }
        let expected = inserted.contains(&probe) && !removed.contains(&probe);
        prop_assert_eq!(map.contains_key(&probe), expected);
    }
}

// =============================================================================
// Iteration Laws
// =============================================================================

proptest! {
    /// Law: iteration is strictly increasing and visits len() entries.
    #[test]
    fn prop_iteration_strictly_increasing(map in arbitrary_map(200)) {
        let keys: Vec<i32> = map.keys().copied().collect();
        prop_assert_eq!(keys.len(), map.len());
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// Law: min and max agree with the first and last iterated entries.
    #[test]
    fn prop_min_max_match_iteration(map in arbitrary_map(100)) {
        prop_assert_eq!(map.min().ok(), map.iter().next());
        prop_assert_eq!(map.max().ok(), map.iter().last());
    }

    /// Law: the owning iterator yields the same sequence as the borrowing one.
    #[test]
    fn prop_into_iter_matches_iter(map in arbitrary_map(100)) {
        let borrowed: Vec<(i32, i32)> = map.iter().map(|(key, value)| (*key, *value)).collect();
        let owned: Vec<(i32, i32)> = map.into_iter().collect();
        prop_assert_eq!(borrowed, owned);
    }
}
