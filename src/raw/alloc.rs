use std::mem::MaybeUninit;

use super::probe;

// An entry in the hash-table.
pub struct Entry<K, V> {
    // The key for this entry.
    pub key: K,

    // The value for this entry.
    pub value: V,
}

// The backing storage of a hash-table.
//
// Slot `i` holds an initialized entry if and only if `occupied[i]` is set.
// The two arrays always have the same length and are only mutated together.
pub struct Table<K, V> {
    // Occupancy markers for each slot.
    occupied: Box<[bool]>,
    // The entry slots.
    entries: Box<[MaybeUninit<Entry<K, V>>]>,
    // The number of occupied slots.
    len: usize,
    // The number of entries this table may hold before it must grow.
    limit: usize,
}

impl<K, V> Table<K, V> {
    // Allocate an empty table with `capacity` slots.
    pub fn alloc(capacity: usize, max_load_factor: f64) -> Table<K, V> {
        Table::with_limit(capacity, probe::limit(capacity, max_load_factor))
    }

    fn with_limit(capacity: usize, limit: usize) -> Table<K, V> {
        assert!(capacity > 0);

        // At least one slot must stay empty for probe sequences to terminate.
        debug_assert!(limit < capacity);

        Table {
            occupied: vec![false; capacity].into_boxed_slice(),
            entries: (0..capacity).map(|_| MaybeUninit::uninit()).collect(),
            len: 0,
            limit,
        }
    }

    // Returns the number of slots in this table.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    // Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    // Returns the number of entries this table may hold before it must grow.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    // Returns `true` if the slot at `i` holds an entry.
    //
    // Out of bounds indices are never occupied.
    #[inline]
    pub fn is_occupied(&self, i: usize) -> bool {
        self.occupied.get(i).copied().unwrap_or(false)
    }

    // Returns the entry at slot `i`, if it is occupied.
    #[inline]
    pub fn entry(&self, i: usize) -> Option<&Entry<K, V>> {
        if !self.is_occupied(i) {
            return None;
        }

        // Safety: Occupied slots are always initialized.
        Some(unsafe { self.entries[i].assume_init_ref() })
    }

    // Returns a mutable reference to the entry at slot `i`, if it is occupied.
    #[inline]
    pub fn entry_mut(&mut self, i: usize) -> Option<&mut Entry<K, V>> {
        if !self.is_occupied(i) {
            return None;
        }

        // Safety: Occupied slots are always initialized.
        Some(unsafe { self.entries[i].assume_init_mut() })
    }

    // Writes an entry to the empty slot at `i`.
    #[inline]
    pub fn write(&mut self, i: usize, entry: Entry<K, V>) {
        debug_assert!(!self.occupied[i]);

        self.entries[i].write(entry);
        self.occupied[i] = true;
        self.len += 1;
    }

    // Moves the entry at slot `i` out of the table, leaving the slot empty.
    //
    // This breaks the probe invariant of any entries following `i`, and is only
    // used when the whole table is being emptied.
    #[inline]
    pub fn take(&mut self, i: usize) -> Option<Entry<K, V>> {
        if !self.is_occupied(i) {
            return None;
        }

        // Unmark the slot first so the entry is never dropped twice.
        self.occupied[i] = false;
        self.len -= 1;

        // Safety: The slot was occupied, and is now marked as empty.
        Some(unsafe { self.entries[i].assume_init_read() })
    }

    // Returns the index of the first occupied slot at or after `i`, or the
    // capacity of the table if there is none.
    #[inline]
    pub fn next_occupied(&self, i: usize) -> usize {
        let start = i.min(self.capacity());

        self.occupied[start..]
            .iter()
            .position(|&occupied| occupied)
            .map(|offset| start + offset)
            .unwrap_or(self.capacity())
    }

    // Returns the occupancy markers and entry slots as parallel slices.
    #[inline]
    pub fn slots(&self) -> (&[bool], &[MaybeUninit<Entry<K, V>>]) {
        (&self.occupied, &self.entries)
    }

    // Returns the occupancy markers and mutable entry slots as parallel slices.
    #[inline]
    pub fn slots_mut(&mut self) -> (&[bool], &mut [MaybeUninit<Entry<K, V>>]) {
        (&self.occupied, &mut self.entries)
    }
}

impl<K, V> Drop for Table<K, V> {
    fn drop(&mut self) {
        if !std::mem::needs_drop::<Entry<K, V>>() {
            return;
        }

        for (occupied, entry) in self.occupied.iter_mut().zip(self.entries.iter_mut()) {
            if std::mem::take(occupied) {
                // Safety: Occupied slots are always initialized, and the marker
                // was cleared above.
                unsafe { entry.assume_init_drop() };
            }
        }
    }
}

impl<K, V> Clone for Table<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Table<K, V> {
        let mut table = Table::with_limit(self.capacity(), self.limit);

        // Entries are copied to the same slots, so the probe invariant holds. If a
        // clone panics, the partial table only drops the slots written so far.
        for i in 0..self.capacity() {
            if let Some(entry) = self.entry(i) {
                table.write(
                    i,
                    Entry {
                        key: entry.key.clone(),
                        value: entry.value.clone(),
                    },
                );
            }
        }

        table
    }
}
