// Adapted from: https://github.com/jonhoo/flurry/blob/main/tests/basic.rs

use probed::{HashMap, NotFound, MAX_LOAD_FACTOR, MIN_CAPACITY};

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::hash::{BuildHasher, BuildHasherDefault, Hasher};
use std::rc::Rc;

mod common;
use common::{load_limit, with_identity_map, with_map, IdentityMap, IdentityState};

#[test]
fn new() {
    with_map::<usize, usize>(|map| drop(map()));
}

#[test]
fn defaults() {
    let map: HashMap<usize, usize> = HashMap::new();
    assert_eq!(map.capacity(), MIN_CAPACITY);
    assert_eq!(map.min_capacity(), 12);
    assert_eq!(map.max_load_factor(), MAX_LOAD_FACTOR);
    assert_eq!(map.max_load_factor(), 0.25);
    assert!(map.is_empty());
}

#[test]
fn clear() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        {
            map.insert(0, 1);
            map.insert(1, 1);
            map.insert(2, 1);
            map.insert(3, 1);
            map.insert(4, 1);
        }
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    });
}

#[test]
fn clear_resets_capacity() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        for i in 0..1000 {
            map.insert(i, i);
        }
        assert!(map.capacity() > map.min_capacity());

        map.clear();
        assert_eq!(map.capacity(), map.min_capacity());
        assert_eq!(map.iter().count(), 0);
        assert!(map.get(&1).is_none());

        // The cleared map behaves like a fresh one.
        let (_, inserted) = map.insert(1, 10);
        assert!(inserted);
        assert_eq!(map.at(&1), Ok(&10));
        assert_eq!(map.len(), 1);
    });
}

#[test]
fn clear_twice() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(1, 1);
        map.clear();
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), map.min_capacity());
    });
}

#[test]
fn insert() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        let (cursor, inserted) = map.insert(42, 0);
        assert!(inserted);
        assert_eq!(cursor.entry(), Some((&42, &0)));
        assert_eq!(map.len(), 1);
    });
}

#[test]
fn get_empty() {
    with_map::<usize, usize>(|map| {
        let map = map();
        let e = map.get(&42);
        assert!(e.is_none());
    });
}

#[test]
fn get_key_value_empty() {
    with_map::<usize, usize>(|map| {
        let map = map();
        let e = map.get_key_value(&42);
        assert!(e.is_none());
    });
}

#[test]
fn insert_and_get() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(42, 0);

        let e = map.get(&42).unwrap();
        assert_eq!(e, &0);
        assert_eq!(map.at(&42), Ok(&0));
        assert_eq!(map.len(), 1);
    });
}

#[test]
fn insert_and_get_key_value() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(42, 0);

        let e = map.get_key_value(&42).unwrap();
        assert_eq!(e, (&42, &0));
    });
}

#[test]
fn reinsert() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(42, 0);

        let (cursor, inserted) = map.insert(42, 1);
        assert!(!inserted);
        assert_eq!(cursor.value(), Some(&0));

        assert_eq!(map.at(&42), Ok(&0));
        assert_eq!(map.len(), 1);
    });
}

#[test]
fn reinsert_drops_rejected_value() {
    let value = Rc::new(());
    let mut map = HashMap::new();

    map.insert(1, value.clone());
    map.insert(1, value.clone());
    assert_eq!(Rc::strong_count(&value), 2);
    assert_eq!(map.len(), 1);
}

#[test]
fn try_insert() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        assert_eq!(map.try_insert(42, 0), Ok(&mut 0));

        let err = map.try_insert(42, 1).unwrap_err();
        assert_eq!(err.current, &0);
        assert_eq!(err.not_inserted, 1);

        *err.current = 2;
        assert_eq!(map.get(&42), Some(&2));
    });
}

#[test]
fn at_missing() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        assert_eq!(map.at(&42), Err(NotFound));
        assert_eq!(map.at_mut(&42), Err(NotFound));

        map.insert(1, 1);
        assert_eq!(map.at(&42), Err(NotFound));
        assert_eq!(map.at_mut(&42), Err(NotFound));

        // Strict reads never insert.
        assert_eq!(map.len(), 1);
    });
}

#[test]
fn at_mut() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(42, 0);

        *map.at_mut(&42).unwrap() += 5;
        assert_eq!(map.at(&42), Ok(&5));
    });
}

#[test]
fn get_or_default() {
    with_map::<usize, usize>(|map| {
        let mut map = map();

        assert_eq!(*map.get_or_default(42), 0);
        assert_eq!(map.len(), 1);

        *map.get_or_default(42) += 1;
        *map.get_or_default(42) += 1;
        assert_eq!(map.at(&42), Ok(&2));
        assert_eq!(map.len(), 1);
    });
}

#[test]
fn get_or_default_through_growth() {
    with_map::<usize, usize>(|map| {
        let mut map = map();

        for i in 0..256 {
            *map.get_or_default(i) = i + 1;
        }

        for i in 0..256 {
            assert_eq!(map.at(&i), Ok(&(i + 1)));
        }
        assert_eq!(map.len(), 256);
    });
}

#[test]
fn get_or_insert_with() {
    with_map::<usize, usize>(|map| {
        let mut map = map();

        assert_eq!(*map.get_or_insert_with(1, || 10), 10);

        let mut called = false;
        assert_eq!(
            *map.get_or_insert_with(1, || {
                called = true;
                20
            }),
            10
        );
        assert!(!called);
    });
}

#[test]
fn emplace() {
    with_map::<usize, usize>(|map| {
        let mut map = map();

        let (_, inserted) = map.emplace((1usize, 2usize));
        assert!(inserted);

        let (cursor, inserted) = map.emplace((1usize, 3usize));
        assert!(!inserted);
        assert_eq!(cursor.value(), Some(&2));
    });
}

#[test]
fn insert_returns_final_position() {
    with_map::<usize, usize>(|map| {
        let mut map = map();

        for i in 0..512 {
            let (cursor, inserted) = map.insert(i, i * 2);
            assert!(inserted);
            assert_eq!(cursor.entry(), Some((&i, &(i * 2))));

            let index = cursor.index();
            assert_eq!(map.find(&i).index(), index);
        }
    });
}

#[test]
fn insert_and_get_many() {
    with_map::<usize, usize>(|map| {
        let mut map = map();

        for i in 0..1024 {
            map.insert(i, i + 1);
        }

        for i in 0..1024 {
            assert_eq!(map.get(&i), Some(&(i + 1)));
        }

        for i in 1024..2048 {
            assert_eq!(map.get(&i), None);
        }

        assert_eq!(map.len(), 1024);
    });
}

#[test]
fn load_factor_bound() {
    with_map::<usize, usize>(|map| {
        let mut map = map();

        for i in 0..2000 {
            map.insert(i, i);
            assert!(map.len() <= load_limit(&map));
            assert!(map.capacity() >= map.min_capacity());
        }
    });
}

#[test]
fn growth_doubles() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        let mut capacity = map.capacity();

        for i in 0..2000 {
            map.insert(i, i);

            if map.capacity() != capacity {
                // Growth happens exactly when the limit is exceeded, by doubling.
                assert_eq!(map.capacity() % capacity, 0);
                assert!((map.capacity() / capacity).is_power_of_two());
                assert!(map.len() > (capacity as f64 * map.max_load_factor()) as usize);
                capacity = map.capacity();
            }
        }
    });
}

#[test]
fn growth_at_fourth_key() {
    let mut map: HashMap<usize, &str> = HashMap::new();

    map.insert(1, "a");
    map.insert(2, "b");
    map.insert(3, "c");
    assert_eq!(map.capacity(), 12);

    map.insert(4, "d");
    assert_eq!(map.capacity(), 24);

    assert_eq!(map.at(&1), Ok(&"a"));
    assert_eq!(map.at(&2), Ok(&"b"));
    assert_eq!(map.at(&3), Ok(&"c"));
    assert_eq!(map.at(&4), Ok(&"d"));
    assert_eq!(map.len(), 4);
}

#[test]
fn colliding_keys_probe_linearly() {
    let mut map: IdentityMap<&str> = HashMap::default();
    assert_eq!(map.capacity(), 12);

    map.insert(1, "a");
    map.insert(13, "b");
    map.insert(25, "c");

    assert_eq!(map.capacity(), 12);
    assert_eq!(map.len(), 3);

    assert_eq!(map.at(&1), Ok(&"a"));
    assert_eq!(map.at(&13), Ok(&"b"));
    assert_eq!(map.at(&25), Ok(&"c"));

    assert_eq!(map.find(&1).index(), 1);
    assert_eq!(map.find(&13).index(), 2);
    assert_eq!(map.find(&25).index(), 3);
}

#[test]
fn probe_wraps_around() {
    let mut map: IdentityMap<&str> = HashMap::default();

    map.insert(11, "a");
    map.insert(23, "b");
    map.insert(35, "c");

    assert_eq!(map.find(&11).index(), 11);
    assert_eq!(map.find(&23).index(), 0);
    assert_eq!(map.find(&35).index(), 1);

    // A missing key on the same sequence walks past all three.
    assert!(map.find(&47).is_end());
    assert_eq!(map.at(&47), Err(NotFound));
}

#[test]
fn iteration_is_slot_ordered() {
    with_identity_map::<u64>(|map| {
        let mut map = map();

        for i in [7, 3, 40, 1, 22, 9] {
            map.insert(i, i * 10);
        }

        let indices: Vec<_> = map.keys().map(|key| map.find(key).index()).collect();
        let mut sorted = indices.clone();
        sorted.sort();
        assert_eq!(indices, sorted);
    });
}

#[test]
fn iter() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        for i in 0..100 {
            map.insert(i, i * 2);
        }

        assert_eq!(map.iter().len(), 100);

        let entries: BTreeSet<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
        let expected: BTreeSet<_> = (0..100).map(|i| (i, i * 2)).collect();
        assert_eq!(entries, expected);
    });
}

#[test]
fn iter_skips_duplicates() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        for i in 0..64 {
            map.insert(i % 16, i);
        }

        let entries: BTreeSet<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
        let expected: BTreeSet<_> = (0..16).map(|i| (i, i)).collect();
        assert_eq!(entries, expected);
        assert_eq!(map.iter().count(), 16);
    });
}

#[test]
fn iter_empty() {
    with_map::<usize, usize>(|map| {
        let map = map();
        assert_eq!(map.iter().next(), None);
        assert_eq!(map.keys().count(), 0);
        assert!(map.cursor_front().is_end());
        assert_eq!(map.cursor_front(), map.cursor_end());
    });
}

#[test]
fn iter_mut() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        for i in 0..64 {
            map.insert(i, i);
        }

        for (_, value) in map.iter_mut() {
            *value += 1;
        }

        for value in map.values_mut() {
            *value *= 2;
        }

        for i in 0..64 {
            assert_eq!(map.get(&i), Some(&((i + 1) * 2)));
        }
    });
}

#[test]
fn keys_and_values() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        for i in 0..32 {
            map.insert(i, i + 100);
        }

        let keys: BTreeSet<_> = map.keys().copied().collect();
        assert_eq!(keys, (0..32).collect::<BTreeSet<_>>());

        let values: BTreeSet<_> = map.values().copied().collect();
        assert_eq!(values, (100..132).collect::<BTreeSet<_>>());

        // Keys and values come out in the same order.
        let pairs: Vec<_> = map.keys().zip(map.values()).collect();
        let iter: Vec<_> = map.iter().collect();
        assert_eq!(pairs, iter);
    });
}

#[test]
fn into_iter() {
    with_map::<usize, String>(|map| {
        let mut map = map();
        for i in 0..50 {
            map.insert(i, i.to_string());
        }

        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort();
        assert_eq!(entries, (0..50).map(|i| (i, i.to_string())).collect::<Vec<_>>());
    });
}

#[test]
fn into_iter_partial_drop() {
    let value = Rc::new(());
    let mut map = HashMap::new();
    for i in 0..20 {
        map.insert(i, value.clone());
    }
    assert_eq!(Rc::strong_count(&value), 21);

    let mut iter = map.into_iter();
    assert_eq!(iter.len(), 20);
    let _ = iter.next();
    let _ = iter.next();
    assert_eq!(iter.len(), 18);
    assert_eq!(Rc::strong_count(&value), 19);

    drop(iter);
    assert_eq!(Rc::strong_count(&value), 1);
}

#[test]
fn cursor_walk() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        for i in 0..40 {
            map.insert(i, i);
        }

        let mut cursor = map.cursor_front();
        let mut seen = BTreeSet::new();
        let mut last = None;

        while let Some((&key, &value)) = cursor.entry() {
            assert_eq!(key, value);
            assert!(seen.insert(key));

            // Cursors only move forward.
            assert!(last.map_or(true, |last| cursor.index() > last));
            last = Some(cursor.index());

            cursor.move_next();
        }

        assert!(cursor.is_end());
        assert_eq!(cursor.index(), map.capacity());
        assert_eq!(seen.len(), 40);

        // Advancing past the end stays at the end.
        cursor.move_next();
        assert_eq!(cursor, map.cursor_end());
    });
}

#[test]
fn find() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(1, 10);
        map.insert(2, 20);

        let cursor = map.find(&1);
        assert!(!cursor.is_end());
        assert_eq!(cursor.key(), Some(&1));
        assert_eq!(cursor.value(), Some(&10));

        assert_eq!(map.find(&1), map.find(&1));
        assert_ne!(map.find(&1), map.find(&2));

        let missing = map.find(&3);
        assert!(missing.is_end());
        assert_eq!(missing.entry(), None);
        assert_eq!(missing, map.cursor_end());
    });
}

#[test]
fn cursors_from_different_maps_differ() {
    let mut a: IdentityMap<u64> = HashMap::default();
    let mut b: IdentityMap<u64> = HashMap::default();
    a.insert(1, 1);
    b.insert(1, 1);

    assert_eq!(a.find(&1).index(), b.find(&1).index());
    assert_ne!(a.find(&1), b.find(&1));
    assert_ne!(a.cursor_end(), b.cursor_end());
}

#[test]
fn find_mut() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(1, 10);

        let mut cursor = map.find_mut(&1);
        *cursor.value_mut().unwrap() += 1;
        assert_eq!(cursor.key(), Some(&1));
        assert_eq!(cursor.as_cursor().value(), Some(&11));

        let value = map.find_mut(&1).into_value_mut().unwrap();
        *value += 1;
        assert_eq!(map.at(&1), Ok(&12));

        let mut missing = map.find_mut(&2);
        assert!(missing.is_end());
        assert!(missing.value_mut().is_none());
    });
}

#[test]
fn cursor_mut_walk() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        for i in 0..16 {
            map.insert(i, 0);
        }

        let (mut cursor, _) = map.insert(100, 0);
        while let Some((_, value)) = cursor.entry_mut() {
            *value = 1;
            cursor.move_next();
        }

        // Only entries at or after the inserted slot were visited.
        let index = map.find(&100).index();
        for (key, value) in map.iter() {
            let expected = if map.find(key).index() >= index { 1 } else { 0 };
            assert_eq!(*value, expected);
        }
    });
}

#[test]
fn index() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(1, 10);
        assert_eq!(map[&1], 10);
    });
}

#[test]
#[should_panic(expected = "key not found")]
fn index_missing() {
    let map: HashMap<usize, usize> = HashMap::new();
    let _value = map[&1];
}

#[test]
fn borrowed_keys() {
    let mut map: HashMap<String, usize> = HashMap::new();
    map.insert("alpha".to_owned(), 1);
    map.insert("beta".to_owned(), 2);

    assert_eq!(map.get("alpha"), Some(&1));
    assert_eq!(map.at("beta"), Ok(&2));
    assert!(map.contains_key("beta"));
    assert!(!map.contains_key("gamma"));
    assert_eq!(map["alpha"], 1);
}

#[test]
fn from_iter_first_write_wins() {
    let map: HashMap<usize, &str> = [(1, "a"), (2, "b"), (1, "c")].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.at(&1), Ok(&"a"));
    assert_eq!(map.at(&2), Ok(&"b"));
}

#[test]
fn from_array() {
    let map = HashMap::from([(1, "a"), (2, "b"), (3, "c"), (4, "d")]);
    assert_eq!(map.len(), 4);
    assert_eq!(map.capacity(), 24);
    assert_eq!(map.get(&4), Some(&"d"));
}

#[test]
fn extend() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.insert(0, 100);

        map.extend((0..10).map(|i| (i, i)));
        assert_eq!(map.len(), 10);
        assert_eq!(map.get(&0), Some(&100));
        assert_eq!(map.get(&9), Some(&9));

        let other = [(10, 10), (11, 11)];
        map.extend(other.iter().map(|(k, v)| (k, v)));
        assert_eq!(map.len(), 12);
        assert_eq!(map.get(&11), Some(&11));
    });
}

#[test]
fn clone() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        for i in 0..64 {
            map.insert(i, i);
        }

        let mut clone = map.clone();
        assert_eq!(clone, map);
        assert_eq!(clone.capacity(), map.capacity());
        assert_eq!(clone.min_capacity(), map.min_capacity());

        // The clone is independent of the original.
        *clone.at_mut(&0).unwrap() = 100;
        clone.insert(1000, 1000);
        assert_eq!(map.get(&0), Some(&0));
        assert_eq!(map.get(&1000), None);

        map.clear();
        assert_eq!(clone.len(), 65);
    });
}

#[test]
fn take_leaves_empty_map() {
    let mut map = HashMap::new();
    for i in 0..100 {
        map.insert(i, i);
    }

    let moved = std::mem::take(&mut map);
    assert_eq!(moved.len(), 100);
    assert!(map.is_empty());
    assert_eq!(map.capacity(), MIN_CAPACITY);

    map.insert(1, 1);
    assert_eq!(map.len(), 1);
}

#[test]
fn eq() {
    let a: HashMap<usize, usize> = (0..100).map(|i| (i, i)).collect();
    let b: HashMap<usize, usize> = (0..100).rev().map(|i| (i, i)).collect();
    assert_eq!(a, b);

    let c: HashMap<usize, usize> = (0..100).map(|i| (i, i + 1)).collect();
    assert_ne!(a, c);

    let d: HashMap<usize, usize> = (0..99).map(|i| (i, i)).collect();
    assert_ne!(a, d);
}

#[test]
fn debug() {
    let mut map: IdentityMap<&str> = HashMap::default();
    map.insert(2, "b");
    map.insert(1, "a");

    assert_eq!(format!("{map:?}"), r#"{1: "a", 2: "b"}"#);
    assert_eq!(format!("{:?}", map.keys()), "[1, 2]");
    assert_eq!(format!("{:?}", map.values()), r#"["a", "b"]"#);
    assert_eq!(
        format!("{:?}", map.find(&1)),
        r#"Cursor { index: 1, entry: Some((1, "a")) }"#
    );
}

#[test]
fn drops_every_value_once() {
    #[derive(Clone)]
    struct Tracked(Rc<RefCell<usize>>);

    impl Drop for Tracked {
        fn drop(&mut self) {
            *self.0.borrow_mut() += 1;
        }
    }

    let drops = Rc::new(RefCell::new(0));

    {
        let mut map = HashMap::new();
        for i in 0..500 {
            map.insert(i, Tracked(drops.clone()));
        }

        // Growth moves values without dropping them.
        assert_eq!(*drops.borrow(), 0);

        // Rejected duplicates are dropped immediately.
        map.insert(0, Tracked(drops.clone()));
        assert_eq!(*drops.borrow(), 1);
    }

    assert_eq!(*drops.borrow(), 501);
}

#[test]
fn clear_drops_values() {
    let value = Rc::new(());
    let mut map = HashMap::new();
    for i in 0..100 {
        map.insert(i, value.clone());
    }

    map.clear();
    assert_eq!(Rc::strong_count(&value), 1);
}

#[test]
fn reserve() {
    with_map::<usize, usize>(|map| {
        let mut map = map();
        map.reserve(500);
        let capacity = map.capacity();
        assert!(load_limit(&map) >= 500);

        for i in 0..500 {
            map.insert(i, i);
        }
        assert_eq!(map.capacity(), capacity);

        // Reserving space that already exists does nothing.
        map.reserve(0);
        assert_eq!(map.capacity(), capacity);
    });
}

#[test]
fn builder_capacity() {
    let map: HashMap<usize, usize> = HashMap::builder().capacity(100).build();
    assert!(load_limit(&map) >= 100);

    let map: HashMap<usize, usize> = HashMap::builder().capacity(1).min_capacity(32).build();
    assert_eq!(map.capacity(), 32);
}

#[test]
#[should_panic(expected = "maximum load factor")]
fn builder_rejects_full_load_factor() {
    let _ = HashMap::<usize, usize>::builder().max_load_factor(1.0);
}

#[test]
#[should_panic(expected = "minimum capacity")]
fn builder_rejects_zero_capacity() {
    let _ = HashMap::<usize, usize>::builder().min_capacity(0);
}

#[test]
fn custom_hasher() {
    with_identity_map::<u64>(|map| {
        let mut map = map();
        for i in 0..100 {
            map.insert(i * 7, i);
        }

        for i in 0..100 {
            assert_eq!(map.at(&(i * 7)), Ok(&i));
        }
        assert!(map.at(&1).is_err());
        assert_eq!(map.hasher().hash_one(5u64), 5);
    });
}

#[test]
fn with_capacity_and_hasher() {
    let map: HashMap<u64, u64, IdentityState> =
        HashMap::with_capacity_and_hasher(10, IdentityState::default());
    assert!(load_limit(&map) >= 10);
}

// run tests with hashers that create unrealistically long probe sequences
mod hasher {
    use super::*;

    fn check<S: BuildHasher + Default>() {
        let range = if cfg!(miri) { 0..16 } else { 0..100 };

        let mut map: HashMap<i32, i32, S> = HashMap::default();
        for i in range.clone() {
            map.insert(i, i);
        }

        assert!(!map.contains_key(&i32::MIN));
        assert!(!map.contains_key(&(range.start - 1)));
        for i in range.clone() {
            assert!(map.contains_key(&i));
            assert_eq!(map.at(&i), Ok(&i));
        }
        assert!(!map.contains_key(&range.end));
        assert!(!map.contains_key(&i32::MAX));
        assert_eq!(map.iter().count(), range.len());
    }

    #[test]
    fn test_zero_hasher() {
        #[derive(Default)]
        pub struct ZeroHasher;

        impl Hasher for ZeroHasher {
            fn finish(&self) -> u64 {
                0
            }

            fn write(&mut self, _: &[u8]) {}
        }

        check::<BuildHasherDefault<ZeroHasher>>();
    }

    #[test]
    fn test_max_hasher() {
        #[derive(Default)]
        struct MaxHasher;

        impl Hasher for MaxHasher {
            fn finish(&self) -> u64 {
                u64::MAX
            }

            fn write(&mut self, _: &[u8]) {}
        }

        check::<BuildHasherDefault<MaxHasher>>();
    }
}
