use crate::raw::Table;

use std::fmt;
use std::ptr;

/// A position in the slot array of a [`HashMap`](crate::HashMap).
///
/// A cursor either points at an occupied slot or at the end of the table. Cursors are
/// created by [`HashMap::find`](crate::HashMap::find), [`HashMap::cursor_front`](crate::HashMap::cursor_front)
/// and [`HashMap::cursor_end`](crate::HashMap::cursor_end), and borrow the map for as long as
/// they are alive, so the map cannot grow or be cleared underneath them.
///
/// Two cursors are equal if they point at the same slot of the same map.
///
/// # Examples
///
/// ```
/// use probed::HashMap;
///
/// let mut map = HashMap::new();
/// map.insert(1, "a");
/// map.insert(2, "b");
///
/// let mut cursor = map.cursor_front();
/// let mut seen = Vec::new();
/// while let Some((key, _)) = cursor.entry() {
///     seen.push(*key);
///     cursor.move_next();
/// }
///
/// seen.sort();
/// assert_eq!(seen, [1, 2]);
/// assert_eq!(cursor, map.cursor_end());
/// ```
pub struct Cursor<'a, K, V> {
    table: &'a Table<K, V>,
    index: usize,
}

impl<'a, K, V> Cursor<'a, K, V> {
    #[inline]
    pub(crate) fn new(table: &'a Table<K, V>, index: usize) -> Cursor<'a, K, V> {
        debug_assert!(index == table.capacity() || table.is_occupied(index));
        Cursor { table, index }
    }

    /// Returns the slot index this cursor points at.
    ///
    /// The end of the table is represented by the capacity of the map.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if this cursor is past the last occupied slot.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index >= self.table.capacity()
    }

    /// Returns the entry this cursor points at, or `None` at the end of the table.
    #[inline]
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        let entry = self.table.entry(self.index)?;
        Some((&entry.key, &entry.value))
    }

    /// Returns the key this cursor points at, or `None` at the end of the table.
    #[inline]
    pub fn key(&self) -> Option<&'a K> {
        self.entry().map(|(key, _)| key)
    }

    /// Returns the value this cursor points at, or `None` at the end of the table.
    #[inline]
    pub fn value(&self) -> Option<&'a V> {
        self.entry().map(|(_, value)| value)
    }

    /// Advances the cursor to the next occupied slot, skipping empty slots.
    ///
    /// Advancing a cursor at the end of the table does nothing.
    #[inline]
    pub fn move_next(&mut self) {
        if !self.is_end() {
            self.index = self.table.next_occupied(self.index + 1);
        }
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.table, other.table) && self.index == other.index
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K, V> fmt::Debug for Cursor<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("entry", &self.entry())
            .finish()
    }
}

/// A mutable position in the slot array of a [`HashMap`](crate::HashMap).
///
/// Created by [`HashMap::find_mut`](crate::HashMap::find_mut), [`HashMap::insert`](crate::HashMap::insert)
/// and [`HashMap::emplace`](crate::HashMap::emplace). Keys cannot be modified through a cursor,
/// only values.
pub struct CursorMut<'a, K, V> {
    table: &'a mut Table<K, V>,
    index: usize,
}

impl<'a, K, V> CursorMut<'a, K, V> {
    #[inline]
    pub(crate) fn new(table: &'a mut Table<K, V>, index: usize) -> CursorMut<'a, K, V> {
        debug_assert!(index == table.capacity() || table.is_occupied(index));
        CursorMut { table, index }
    }

    /// Returns the slot index this cursor points at.
    ///
    /// The end of the table is represented by the capacity of the map.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` if this cursor is past the last occupied slot.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.index >= self.table.capacity()
    }

    /// Returns the entry this cursor points at, or `None` at the end of the table.
    #[inline]
    pub fn entry(&self) -> Option<(&K, &V)> {
        let entry = self.table.entry(self.index)?;
        Some((&entry.key, &entry.value))
    }

    /// Returns the entry this cursor points at with a mutable value, or `None` at
    /// the end of the table.
    #[inline]
    pub fn entry_mut(&mut self) -> Option<(&K, &mut V)> {
        let entry = self.table.entry_mut(self.index)?;
        Some((&entry.key, &mut entry.value))
    }

    /// Returns the key this cursor points at, or `None` at the end of the table.
    #[inline]
    pub fn key(&self) -> Option<&K> {
        self.entry().map(|(key, _)| key)
    }

    /// Returns the value this cursor points at, or `None` at the end of the table.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.entry().map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value this cursor points at.
    #[inline]
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.entry_mut().map(|(_, value)| value)
    }

    /// Converts the cursor into a mutable reference to the value it points at,
    /// with the lifetime of the map borrow.
    #[inline]
    pub fn into_value_mut(self) -> Option<&'a mut V> {
        self.table.entry_mut(self.index).map(|entry| &mut entry.value)
    }

    /// Advances the cursor to the next occupied slot, skipping empty slots.
    ///
    /// Advancing a cursor at the end of the table does nothing.
    #[inline]
    pub fn move_next(&mut self) {
        if !self.is_end() {
            self.index = self.table.next_occupied(self.index + 1);
        }
    }

    /// Returns a read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(self.table, self.index)
    }
}

impl<K, V> fmt::Debug for CursorMut<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("entry", &self.entry())
            .finish()
    }
}
