#![no_main]

use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use probed::{HashMap as ProbedHashMap, NotFound};
use std::collections::HashMap as StdHashMap;

#[derive(Debug, Arbitrary)]
enum Operation<K, V> {
    Insert(K, V),
    TryInsert(K, V),
    Get(K),
    At(K),
    Contains(K),
    GetOrDefault(K),
    Update(K, V),
    Reserve(u8),
    Clear,
    Len,
    IsEmpty,
    Iter,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    min_capacity: u8,
    load_factor: u8,
    operations: Vec<Operation<u32, u32>>,
}

fn fuzz_hashmap(input: FuzzInput) {
    let mut std_map = StdHashMap::new();
    let mut probed_map = ProbedHashMap::builder()
        .min_capacity(usize::from(input.min_capacity).max(1))
        // Map the byte onto a load factor in (0, 1).
        .max_load_factor((f64::from(input.load_factor) + 1.0) / 257.0)
        .build();

    for op in input.operations {
        match op {
            Operation::Insert(k, v) => {
                let std_inserted = !std_map.contains_key(&k);
                std_map.entry(k).or_insert(v);
                let (cursor, probed_inserted) = probed_map.insert(k, v);
                assert_eq!(std_inserted, probed_inserted);
                assert_eq!(cursor.value(), std_map.get(&k));
            }
            Operation::TryInsert(k, v) => {
                let std_result = std_map.get(&k).copied();
                match probed_map.try_insert(k, v) {
                    Ok(value) => {
                        assert_eq!(std_result, None);
                        assert_eq!(*value, v);
                        std_map.insert(k, v);
                    }
                    Err(err) => {
                        assert_eq!(std_result, Some(*err.current));
                        assert_eq!(err.not_inserted, v);
                    }
                }
            }
            Operation::Get(k) => {
                let std_result = std_map.get(&k);
                let probed_result = probed_map.get(&k);
                assert_eq!(std_result, probed_result);
            }
            Operation::At(k) => {
                let std_result = std_map.get(&k).ok_or(NotFound);
                let probed_result = probed_map.at(&k);
                assert_eq!(std_result, probed_result);
            }
            Operation::Contains(k) => {
                let std_result = std_map.contains_key(&k);
                let probed_result = probed_map.contains_key(&k);
                assert_eq!(std_result, probed_result);
            }
            Operation::GetOrDefault(k) => {
                let std_result = std_map.entry(k).or_default();
                let probed_result = probed_map.get_or_default(k);
                assert_eq!(std_result, probed_result);
            }
            Operation::Update(k, v) => {
                let std_result = std_map.get_mut(&k).map(|e| {
                    *e = e.wrapping_add(v);
                    *e
                });
                let probed_result = probed_map.at_mut(&k).ok().map(|e| {
                    *e = e.wrapping_add(v);
                    *e
                });
                assert_eq!(std_result, probed_result);
            }
            Operation::Reserve(additional) => {
                probed_map.reserve(usize::from(additional));
                let limit =
                    (probed_map.capacity() as f64 * probed_map.max_load_factor()) as usize;
                assert!(probed_map.len() + usize::from(additional) <= limit);
            }
            Operation::Clear => {
                std_map.clear();
                probed_map.clear();
                assert_eq!(probed_map.capacity(), probed_map.min_capacity());
            }
            Operation::Len => {
                assert_eq!(std_map.len(), probed_map.len());
            }
            Operation::IsEmpty => {
                assert_eq!(std_map.is_empty(), probed_map.is_empty());
            }
            Operation::Iter => {
                let mut count = 0;
                for (k, v) in probed_map.iter() {
                    assert_eq!(std_map.get(k), Some(v));
                    count += 1;
                }
                assert_eq!(count, std_map.len());
            }
        }

        let limit = (probed_map.capacity() as f64 * probed_map.max_load_factor()) as usize;
        assert!(probed_map.len() <= limit);
    }

    // Final consistency checks
    for (k, v) in std_map.iter() {
        let probed_result = probed_map.get(k);
        assert_eq!(Some(v), probed_result);
    }
    assert_eq!(std_map.len(), probed_map.len());
    assert_eq!(std_map.is_empty(), probed_map.is_empty());
}

fuzz_target!(|data: FuzzInput| {
    fuzz_hashmap(data);
});
