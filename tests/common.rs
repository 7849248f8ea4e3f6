#![allow(dead_code)]

use probed::HashMap;

use std::hash::{BuildHasherDefault, Hasher};

// Run the test on different configurations of a `HashMap`.
pub fn with_map<K, V>(mut test: impl FnMut(&dyn Fn() -> HashMap<K, V>)) {
    // The default configuration.
    test(&(|| HashMap::new()));

    // A tiny table with a high load factor to stress long probe sequences and frequent growth.
    test(
        &(|| {
            HashMap::builder()
                .min_capacity(1)
                .max_load_factor(0.9)
                .build()
        }),
    );

    // A medium-sized table with a moderate load factor.
    test(
        &(|| {
            HashMap::builder()
                .min_capacity(64)
                .max_load_factor(0.5)
                .build()
        }),
    );
}

// Run the test on different configurations of a `HashMap` that hashes integer keys to
// themselves, so tests can predict where keys land.
pub fn with_identity_map<V>(mut test: impl FnMut(&dyn Fn() -> IdentityMap<V>)) {
    test(&(|| HashMap::default()));

    test(
        &(|| {
            HashMap::builder()
                .hasher(IdentityState::default())
                .min_capacity(5)
                .max_load_factor(0.75)
                .build()
        }),
    );
}

pub type IdentityState = BuildHasherDefault<IdentityHasher>;
pub type IdentityMap<V> = HashMap<u64, V, IdentityState>;

// A hasher that returns integer keys unchanged.
#[derive(Default)]
pub struct IdentityHasher(u64);

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 = (self.0 << 8) | u64::from(byte);
        }
    }

    fn write_u64(&mut self, n: u64) {
        self.0 = n;
    }
}

// Returns the maximum number of entries `map` may hold at its current capacity.
pub fn load_limit<K, V, S>(map: &HashMap<K, V, S>) -> usize {
    (map.capacity() as f64 * map.max_load_factor()) as usize
}

// Prints a log message if `RUST_LOG=debug` is set.
#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        if std::env::var("RUST_LOG").as_deref() == Ok("debug") {
            println!($($x)*);
        }
    };
}
