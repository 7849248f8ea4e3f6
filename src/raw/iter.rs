use std::iter::{FusedIterator, Zip};
use std::mem::MaybeUninit;
use std::slice;

use super::alloc::{Entry, Table};

// An iterator over the occupied slots of a table, in slot order.
pub struct Iter<'a, K, V> {
    slots: Zip<slice::Iter<'a, bool>, slice::Iter<'a, MaybeUninit<Entry<K, V>>>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    #[inline]
    pub fn new(table: &'a Table<K, V>) -> Iter<'a, K, V> {
        let (occupied, entries) = table.slots();

        Iter {
            slots: occupied.iter().zip(entries.iter()),
            remaining: table.len(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for (&occupied, entry) in self.slots.by_ref() {
            if occupied {
                self.remaining -= 1;

                // Safety: Occupied slots are always initialized.
                let entry = unsafe { entry.assume_init_ref() };
                return Some((&entry.key, &entry.value));
            }
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

// A mutable iterator over the occupied slots of a table, in slot order.
pub struct IterMut<'a, K, V> {
    slots: Zip<slice::Iter<'a, bool>, slice::IterMut<'a, MaybeUninit<Entry<K, V>>>>,
    remaining: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    #[inline]
    pub fn new(table: &'a mut Table<K, V>) -> IterMut<'a, K, V> {
        let remaining = table.len();
        let (occupied, entries) = table.slots_mut();

        IterMut {
            slots: occupied.iter().zip(entries.iter_mut()),
            remaining,
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for (&occupied, entry) in self.slots.by_ref() {
            if occupied {
                self.remaining -= 1;

                // Safety: Occupied slots are always initialized.
                let entry = unsafe { entry.assume_init_mut() };
                return Some((&entry.key, &mut entry.value));
            }
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

// An owning iterator over the entries of a table, in slot order.
pub struct IntoIter<K, V> {
    table: Table<K, V>,
    i: usize,
}

impl<K, V> IntoIter<K, V> {
    #[inline]
    pub fn new(table: Table<K, V>) -> IntoIter<K, V> {
        IntoIter { table, i: 0 }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.i = self.table.next_occupied(self.i);

        // Slots behind the cursor are emptied as we go, any remaining entries
        // are dropped along with the table.
        let entry = self.table.take(self.i)?;
        self.i += 1;

        Some((entry.key, entry.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.table.len(), Some(self.table.len()))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
