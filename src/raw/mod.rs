mod alloc;
mod iter;
mod probe;
mod utils;

use std::hash::{BuildHasher, Hash};
use std::mem;

pub use self::alloc::{Entry, Table};
pub use self::iter::{IntoIter, Iter, IterMut};

use self::probe::Probe;
use self::utils::trace;
use crate::Equivalent;

/// An open-addressing hash-table with linear probing.
pub struct HashMap<K, V, S> {
    /// The backing slot storage.
    table: Table<K, V>,

    /// Hasher for keys.
    pub hasher: S,

    /// Growth configuration, fixed at construction.
    growth: Growth,
}

/// Growth configuration for a table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Growth {
    /// The initial and minimum number of slots.
    pub min_capacity: usize,

    /// The fraction of slots that may be occupied before the table grows.
    pub max_load_factor: f64,
}

// The outcome of walking the probe sequence for a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The key is stored at this index.
    Occupied(usize),

    /// The key is not present, and would be inserted at this index.
    Vacant(usize),
}

// The result of an insert operation.
pub enum InsertResult<V> {
    /// Inserted the entry, which now lives at the given index.
    Inserted(usize),

    /// Did not insert because the key is present at the given index.
    Occupied { index: usize, not_inserted: V },
}

impl<K, V, S> HashMap<K, V, S> {
    /// Creates a new table that can hold `capacity` entries without growing.
    pub fn new(capacity: usize, hasher: S, growth: Growth) -> HashMap<K, V, S> {
        let capacity = probe::capacity_for(capacity, growth.min_capacity, growth.max_load_factor);

        HashMap {
            table: Table::alloc(capacity, growth.max_load_factor),
            hasher,
            growth,
        }
    }

    /// Returns the backing slot storage.
    #[inline]
    pub fn table(&self) -> &Table<K, V> {
        &self.table
    }

    /// Returns the backing slot storage mutably.
    ///
    /// Callers must not change which slots are occupied.
    #[inline]
    pub fn table_mut(&mut self) -> &mut Table<K, V> {
        &mut self.table
    }

    /// Consumes the map, returning the slot storage.
    #[inline]
    pub fn into_table(self) -> Table<K, V> {
        self.table
    }

    /// Returns the growth configuration.
    #[inline]
    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Returns the number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns the number of slots in the table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Replaces the table with a fresh table of the minimum capacity.
    pub fn clear(&mut self) {
        trace!(
            len = self.table.len(),
            capacity = self.table.capacity(),
            "clearing table"
        );

        self.table = Table::alloc(self.growth.min_capacity, self.growth.max_load_factor);
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Walks the probe sequence for `key`.
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Slot
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        self.probe(hash, key)
    }

    #[inline]
    fn probe<Q>(&self, hash: u64, key: &Q) -> Slot
    where
        Q: Equivalent<K> + ?Sized,
    {
        let mut probe = Probe::start(hash, self.table.capacity());

        loop {
            match self.table.entry(probe.i) {
                // Encountered an empty slot, the key cannot be further along the sequence.
                None => return Slot::Vacant(probe.i),

                Some(entry) if key.equivalent(&entry.key) => return Slot::Occupied(probe.i),

                // The slot contained a different key, keep searching.
                Some(_) => {}
            }

            probe.next();
            debug_assert!(probe.len < self.table.capacity(), "probed a full table");
        }
    }

    /// Returns the index of the entry for `key`.
    #[inline]
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        match self.find(key) {
            Slot::Occupied(i) => Some(i),
            Slot::Vacant(_) => None,
        }
    }

    /// Returns a reference to the entry for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let entry = self.table.entry(self.index_of(key)?)?;
        Some((&entry.key, &entry.value))
    }

    /// Returns a mutable reference to the entry for `key`.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<(&K, &mut V)>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let i = self.index_of(key)?;
        let entry = self.table.entry_mut(i)?;
        Some((&entry.key, &mut entry.value))
    }

    /// Inserts a key-value pair into the table, unless the key is already present.
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> InsertResult<V> {
        let hash = self.hasher.hash_one(&key);

        match self.probe(hash, &key) {
            Slot::Occupied(index) => InsertResult::Occupied {
                index,
                not_inserted: value,
            },
            Slot::Vacant(i) => InsertResult::Inserted(self.insert_at(i, Entry { key, value })),
        }
    }

    /// Returns the index of the entry for `key`, inserting the value returned by `f`
    /// if the key is not present.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> usize
    where
        F: FnOnce() -> V,
    {
        let hash = self.hasher.hash_one(&key);

        match self.probe(hash, &key) {
            Slot::Occupied(i) => i,
            Slot::Vacant(i) => self.insert_at(i, Entry { key, value: f() }),
        }
    }

    // Writes an entry to the vacant slot at `i`, growing the table if it went over
    // the load limit. Returns the final index of the entry.
    #[inline]
    fn insert_at(&mut self, i: usize, entry: Entry<K, V>) -> usize {
        self.table.write(i, entry);

        if self.table.len() > self.table.limit() {
            return self.grow(i);
        }

        i
    }

    /// Reserve capacity for `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        let len = self
            .table
            .len()
            .checked_add(additional)
            .expect("capacity overflow");

        if len > self.table.limit() {
            let capacity =
                probe::capacity_for(len, self.table.capacity(), self.growth.max_load_factor);
            self.resize(capacity, None);
        }
    }

    // Doubles the table until it is back under the load limit, returning the new
    // index of the entry at `track`.
    #[cold]
    fn grow(&mut self, track: usize) -> usize {
        let start = self
            .table
            .capacity()
            .checked_mul(2)
            .expect("capacity overflow");

        let capacity = probe::capacity_for(self.table.len(), start, self.growth.max_load_factor);

        self.resize(capacity, Some(track))
            .expect("tracked entry was not copied")
    }

    // Rebuilds the table with `capacity` slots, reinserting every entry.
    //
    // Returns the new index of the entry that was at `track`.
    fn resize(&mut self, capacity: usize, track: Option<usize>) -> Option<usize> {
        let mut old = mem::replace(
            &mut self.table,
            Table::alloc(capacity, self.growth.max_load_factor),
        );

        trace!(
            len = old.len(),
            from = old.capacity(),
            to = capacity,
            "growing table"
        );

        let mut tracked = None;

        for i in 0..old.capacity() {
            let Some(entry) = old.take(i) else {
                continue;
            };

            // Keys are unique, so the entry lands in the first empty slot of its sequence.
            let mut probe = Probe::start(self.hasher.hash_one(&entry.key), capacity);
            while self.table.is_occupied(probe.i) {
                probe.next();
            }

            self.table.write(probe.i, entry);

            if track == Some(i) {
                tracked = Some(probe.i);
            }
        }

        tracked
    }
}

impl<K, V, S> Clone for HashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> HashMap<K, V, S> {
        HashMap {
            table: self.table.clone(),
            hasher: self.hasher.clone(),
            growth: self.growth,
        }
    }
}
