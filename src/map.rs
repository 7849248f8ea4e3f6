use crate::cursor::{Cursor, CursorMut};
use crate::error::{NotFound, OccupiedError};
use crate::raw::{self, Growth, InsertResult, Slot};
use crate::Equivalent;

use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::Index;

/// The default initial and minimum number of slots in a [`HashMap`].
pub const MIN_CAPACITY: usize = 12;

/// The default fraction of slots that may be occupied before a [`HashMap`] grows.
pub const MAX_LOAD_FACTOR: f64 = 0.25;

/// A hash map using open addressing with linear probing.
///
/// Entries are stored directly in a flat slot array alongside a parallel array of occupancy
/// markers. A key lives in the first slot of its probe sequence, which starts at
/// `hash(key) % capacity` and walks forward one slot at a time, wrapping around at the end of
/// the table.
///
/// The map doubles its capacity as soon as more than [`max_load_factor`](HashMap::max_load_factor)
/// of its slots are occupied. Growth rebuilds the entire table inside the insert that triggered
/// it, so an occasional insert costs `O(capacity)`.
///
/// Entries cannot be removed individually; [`clear`](HashMap::clear) is the only way to empty
/// the map.
///
/// # Examples
///
/// ```
/// use probed::HashMap;
///
/// let mut books = HashMap::new();
/// books.insert("Dune", 1965);
/// books.insert("Neuromancer", 1984);
///
/// // Inserting an existing key does not overwrite it.
/// let (_, inserted) = books.insert("Dune", 2021);
/// assert!(!inserted);
/// assert_eq!(books.at(&"Dune"), Ok(&1965));
///
/// *books.get_or_default("Hyperion") += 1989;
/// assert_eq!(books.len(), 3);
/// ```
pub struct HashMap<K, V, S = RandomState> {
    raw: raw::HashMap<K, V, S>,
}

/// A builder for a [`HashMap`].
///
/// # Examples
///
/// ```rust
/// use probed::HashMap;
/// use std::collections::hash_map::RandomState;
///
/// let map: HashMap<i32, i32> = HashMap::builder()
///     // Set the initial capacity.
///     .capacity(2048)
///     // Set the hasher.
///     .hasher(RandomState::new())
///     // Set the minimum number of slots.
///     .min_capacity(16)
///     // Set the load factor that triggers growth.
///     .max_load_factor(0.5)
///     // Construct the hash map.
///     .build();
/// ```
pub struct HashMapBuilder<K, V, S = RandomState> {
    hasher: S,
    capacity: usize,
    growth: Growth,
    _kv: PhantomData<(K, V)>,
}

impl<K, V> HashMapBuilder<K, V> {
    /// Set the hash builder used to hash keys.
    ///
    /// The hasher must be deterministic, and equal keys must hash equally.
    pub fn hasher<S>(self, hasher: S) -> HashMapBuilder<K, V, S> {
        HashMapBuilder {
            hasher,
            capacity: self.capacity,
            growth: self.growth,
            _kv: PhantomData,
        }
    }
}

impl<K, V, S> HashMapBuilder<K, V, S> {
    /// Set the initial capacity of the map.
    ///
    /// The map will be able to hold at least `capacity` elements before growing. The table is
    /// never allocated with fewer than [`min_capacity`](HashMapBuilder::min_capacity) slots.
    pub fn capacity(self, capacity: usize) -> HashMapBuilder<K, V, S> {
        HashMapBuilder { capacity, ..self }
    }

    /// Set the minimum number of slots in the table.
    ///
    /// New and cleared maps start out with this many slots. Defaults to [`MIN_CAPACITY`].
    ///
    /// # Panics
    ///
    /// Panics if `min_capacity` is zero.
    pub fn min_capacity(self, min_capacity: usize) -> HashMapBuilder<K, V, S> {
        assert!(min_capacity > 0, "minimum capacity must be non-zero");

        HashMapBuilder {
            growth: Growth {
                min_capacity,
                ..self.growth
            },
            ..self
        }
    }

    /// Set the fraction of slots that may be occupied before the table doubles in size.
    ///
    /// Defaults to [`MAX_LOAD_FACTOR`].
    ///
    /// # Panics
    ///
    /// Panics if `max_load_factor` is not strictly between 0 and 1.
    pub fn max_load_factor(self, max_load_factor: f64) -> HashMapBuilder<K, V, S> {
        assert!(
            max_load_factor > 0.0 && max_load_factor < 1.0,
            "maximum load factor must be in (0, 1), got {max_load_factor}"
        );

        HashMapBuilder {
            growth: Growth {
                max_load_factor,
                ..self.growth
            },
            ..self
        }
    }

    /// Construct a [`HashMap`] from the builder, using the configured options.
    pub fn build(self) -> HashMap<K, V, S> {
        HashMap {
            raw: raw::HashMap::new(self.capacity, self.hasher, self.growth),
        }
    }
}

impl<K, V, S> fmt::Debug for HashMapBuilder<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMapBuilder")
            .field("capacity", &self.capacity)
            .field("min_capacity", &self.growth.min_capacity)
            .field("max_load_factor", &self.growth.max_load_factor)
            .finish()
    }
}

const DEFAULT_GROWTH: Growth = Growth {
    min_capacity: MIN_CAPACITY,
    max_load_factor: MAX_LOAD_FACTOR,
};

impl<K, V> HashMap<K, V> {
    /// Creates an empty `HashMap`.
    ///
    /// The map is created with [`MIN_CAPACITY`] slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    /// let map: HashMap<&str, i32> = HashMap::new();
    /// assert_eq!(map.capacity(), probed::MIN_CAPACITY);
    /// ```
    pub fn new() -> HashMap<K, V> {
        HashMap::with_capacity_and_hasher(0, RandomState::new())
    }

    /// Creates an empty `HashMap` that can hold at least `capacity` elements without growing.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    /// let map: HashMap<&str, i32> = HashMap::with_capacity(10);
    /// assert!(map.capacity() >= 40);
    /// ```
    pub fn with_capacity(capacity: usize) -> HashMap<K, V> {
        HashMap::with_capacity_and_hasher(capacity, RandomState::new())
    }

    /// Returns a builder for a `HashMap`.
    ///
    /// The builder can be used for more complex configuration, such as a custom minimum
    /// capacity or load factor.
    pub fn builder() -> HashMapBuilder<K, V> {
        HashMapBuilder {
            capacity: 0,
            hasher: RandomState::default(),
            growth: DEFAULT_GROWTH,
            _kv: PhantomData,
        }
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    S: Default,
{
    fn default() -> Self {
        HashMap::with_hasher(S::default())
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Creates an empty `HashMap` which will use the given hash builder to hash keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    /// use std::collections::hash_map::RandomState;
    ///
    /// let s = RandomState::new();
    /// let mut map = HashMap::with_hasher(s);
    /// map.insert(1, 2);
    /// ```
    pub fn with_hasher(hash_builder: S) -> HashMap<K, V, S> {
        HashMap::with_capacity_and_hasher(0, hash_builder)
    }

    /// Creates an empty `HashMap` that can hold at least `capacity` elements without growing,
    /// using `hash_builder` to hash the keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> HashMap<K, V, S> {
        HashMap {
            raw: raw::HashMap::new(capacity, hash_builder, DEFAULT_GROWTH),
        }
    }

    /// Returns a reference to the map's [`BuildHasher`].
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.raw.hasher
    }

    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// map.insert(2, "b");
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map is empty. Otherwise returns `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots in the table.
    ///
    /// At most `capacity() * max_load_factor()` of them are occupied at any time.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the minimum number of slots in the table.
    #[inline]
    pub fn min_capacity(&self) -> usize {
        self.raw.growth().min_capacity
    }

    /// Returns the fraction of slots that may be occupied before the table grows.
    #[inline]
    pub fn max_load_factor(&self) -> f64 {
        self.raw.growth().max_load_factor
    }

    /// Clears the map, removing all entries.
    ///
    /// Any capacity gained through growth is released; the map returns to
    /// [`min_capacity`](HashMap::min_capacity) slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// for i in 0..100 {
    ///     map.insert(i, i);
    /// }
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), map.min_capacity());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.raw.clear()
    }

    /// An iterator visiting all key-value pairs in slot order.
    /// The iterator element type is `(&K, &V)`.
    ///
    /// The order is neither insertion order nor key order, and changes whenever the
    /// table grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let map = HashMap::from([
    ///     ("a", 1),
    ///     ("b", 2),
    ///     ("c", 3),
    /// ]);
    ///
    /// for (key, val) in map.iter() {
    ///     println!("key: {key} val: {val}");
    /// }
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            raw: raw::Iter::new(self.raw.table()),
        }
    }

    /// An iterator visiting all key-value pairs in slot order, with mutable references
    /// to the values.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            raw: raw::IterMut::new(self.raw.table_mut()),
        }
    }

    /// An iterator visiting all keys in slot order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { iter: self.iter() }
    }

    /// An iterator visiting all values in slot order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { iter: self.iter() }
    }

    /// An iterator visiting all values mutably in slot order.
    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            iter: self.iter_mut(),
        }
    }

    /// Returns a cursor at the first occupied slot, or the end of the table if
    /// the map is empty.
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, K, V> {
        let table = self.raw.table();
        Cursor::new(table, table.next_occupied(0))
    }

    /// Returns a cursor at the end of the table.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, K, V> {
        let table = self.raw.table();
        Cursor::new(table, table.capacity())
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// The key may be any borrowed form of the map's key type, but
    /// [`Hash`] and [`Eq`] on the borrowed form *must* match those for
    /// the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.raw.index_of(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.raw.get(key).map(|(_, value)| value)
    }

    /// Returns the key-value pair corresponding to the supplied key.
    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.raw.get_mut(key).map(|(_, value)| value)
    }

    /// Returns a reference to the value corresponding to the key, or [`NotFound`] if the
    /// key is not present.
    ///
    /// Unlike [`get_or_default`](HashMap::get_or_default), this never inserts.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::{HashMap, NotFound};
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.at(&1), Ok(&"a"));
    /// assert_eq!(map.at(&2), Err(NotFound));
    /// ```
    #[inline]
    pub fn at<Q>(&self, key: &Q) -> Result<&V, NotFound>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.get(key).ok_or(NotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key, or [`NotFound`]
    /// if the key is not present.
    #[inline]
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, NotFound>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        self.get_mut(key).ok_or(NotFound)
    }

    /// Returns a mutable reference to the value for `key`, inserting the default value if
    /// the key is not present.
    ///
    /// Inserting may grow the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut counts: HashMap<&str, usize> = HashMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *counts.get_or_default(word) += 1;
    /// }
    ///
    /// assert_eq!(counts.get(&"a"), Some(&2));
    /// assert_eq!(counts.get(&"b"), Some(&1));
    /// ```
    #[inline]
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Returns a mutable reference to the value for `key`, inserting the result of `f` if
    /// the key is not present.
    ///
    /// `f` is only called if the key is not present.
    #[inline]
    pub fn get_or_insert_with<F>(&mut self, key: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let i = self.raw.get_or_insert_with(key, f);
        self.value_at(i)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, the pair is stored and `true` is returned
    /// along with a cursor at its slot.
    ///
    /// If the map did have this key present, the map is left unchanged: the existing value
    /// is not updated and `value` is dropped. A cursor at the existing entry is returned along
    /// with `false`.
    ///
    /// Inserting may grow the table, which moves every entry to a new slot. The returned cursor
    /// always points at the entry's final position.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut map = HashMap::new();
    ///
    /// let (cursor, inserted) = map.insert(37, "a");
    /// assert!(inserted);
    /// assert_eq!(cursor.value(), Some(&"a"));
    ///
    /// let (cursor, inserted) = map.insert(37, "b");
    /// assert!(!inserted);
    /// assert_eq!(cursor.value(), Some(&"a"));
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> (CursorMut<'_, K, V>, bool) {
        let (index, inserted) = match self.raw.insert(key, value) {
            InsertResult::Inserted(index) => (index, true),
            InsertResult::Occupied { index, .. } => (index, false),
        };

        (CursorMut::new(self.raw.table_mut(), index), inserted)
    }

    /// Builds a key-value pair from `args` and inserts it into the map.
    ///
    /// This is a convenience over [`insert`](HashMap::insert), with identical semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// struct Point {
    ///     name: &'static str,
    ///     x: i32,
    /// }
    ///
    /// impl From<Point> for (&'static str, i32) {
    ///     fn from(point: Point) -> Self {
    ///         (point.name, point.x)
    ///     }
    /// }
    ///
    /// let mut map: HashMap<&str, i32> = HashMap::new();
    /// map.emplace(Point { name: "origin", x: 0 });
    /// map.emplace(("one", 1));
    /// assert_eq!(map.get(&"origin"), Some(&0));
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn emplace<A>(&mut self, args: A) -> (CursorMut<'_, K, V>, bool)
    where
        A: Into<(K, V)>,
    {
        let (key, value) = args.into();
        self.insert(key, value)
    }

    /// Tries to insert a key-value pair into the map, and returns
    /// a mutable reference to the value in the entry.
    ///
    /// If the map already had this key present, nothing is updated, and
    /// an error containing the occupied value and the rejected value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// assert_eq!(map.try_insert(37, "a").unwrap(), &"a");
    ///
    /// let err = map.try_insert(37, "b").unwrap_err();
    /// assert_eq!(err.current, &"a");
    /// assert_eq!(err.not_inserted, "b");
    /// ```
    #[inline]
    pub fn try_insert(&mut self, key: K, value: V) -> Result<&mut V, OccupiedError<'_, V>> {
        match self.raw.insert(key, value) {
            InsertResult::Inserted(i) => Ok(self.value_at(i)),
            InsertResult::Occupied {
                index,
                not_inserted,
            } => Err(OccupiedError {
                current: self.value_at(index),
                not_inserted,
            }),
        }
    }

    /// Reserve capacity for `additional` more elements.
    ///
    /// The table doubles until `len() + additional` elements fit without further growth.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut map: HashMap<&str, i32> = HashMap::new();
    /// map.reserve(10);
    /// assert!(map.capacity() >= 40);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.raw.reserve(additional)
    }

    /// Returns a cursor at the slot holding `key`, or the end of the table if the
    /// key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use probed::HashMap;
    ///
    /// let mut map = HashMap::new();
    /// map.insert(1, "a");
    ///
    /// assert_eq!(map.find(&1).value(), Some(&"a"));
    /// assert_eq!(map.find(&2), map.cursor_end());
    /// ```
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let table = self.raw.table();

        match self.raw.find(key) {
            Slot::Occupied(i) => Cursor::new(table, i),
            Slot::Vacant(_) => Cursor::new(table, table.capacity()),
        }
    }

    /// Returns a mutable cursor at the slot holding `key`, or the end of the table if
    /// the key is not present.
    #[inline]
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, V>
    where
        Q: Equivalent<K> + Hash + ?Sized,
    {
        let index = match self.raw.find(key) {
            Slot::Occupied(i) => i,
            Slot::Vacant(_) => self.raw.capacity(),
        };

        CursorMut::new(self.raw.table_mut(), index)
    }

    // Returns the value in the occupied slot at `i`.
    #[inline]
    fn value_at(&mut self, i: usize) -> &mut V {
        match self.raw.table_mut().entry_mut(i) {
            Some(entry) => &mut entry.value,
            None => unreachable!("slot {i} is empty"),
        }
    }
}

impl<K, Q, V, S> Index<&Q> for HashMap<K, V, S>
where
    K: Hash + Eq,
    Q: Equivalent<K> + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map.
    #[inline]
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("{}", NotFound),
        }
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.get(key).map_or(false, |v| *value == *v))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S> fmt::Debug for HashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
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
            raw: self.raw.clone(),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        // Keys may show up more than once, the first occurrence wins.
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for HashMap<K, V, S>
where
    K: Copy + Hash + Eq,
    V: Copy,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for HashMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    fn from(arr: [(K, V); N]) -> Self {
        HashMap::from_iter(arr)
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = HashMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            raw: raw::IntoIter::new(self.raw.into_table()),
        }
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator over a map's entries.
///
/// This struct is created by the [`iter`](HashMap::iter) method on [`HashMap`]. See its documentation for details.
pub struct Iter<'a, K, V> {
    raw: raw::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A mutable iterator over a map's entries.
///
/// This struct is created by the [`iter_mut`](HashMap::iter_mut) method on [`HashMap`].
pub struct IterMut<'a, K, V> {
    raw: raw::IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K, V> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").finish_non_exhaustive()
    }
}

/// An owning iterator over a map's entries.
///
/// This struct is created by the `into_iter` method on [`HashMap`].
pub struct IntoIter<K, V> {
    raw: raw::IntoIter<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.raw.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").finish_non_exhaustive()
    }
}

/// An iterator over a map's keys.
///
/// This struct is created by the [`keys`](HashMap::keys) method on [`HashMap`]. See its documentation for details.
pub struct Keys<'a, K, V> {
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, _) = self.iter.next()?;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> fmt::Debug for Keys<'_, K, V>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter.clone().map(|(key, _)| key))
            .finish()
    }
}

/// An iterator over a map's values.
///
/// This struct is created by the [`values`](HashMap::values) method on [`HashMap`]. See its documentation for details.
pub struct Values<'a, K, V> {
    iter: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.iter.next()?;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> fmt::Debug for Values<'_, K, V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter.clone().map(|(_, value)| value))
            .finish()
    }
}

/// A mutable iterator over a map's values.
///
/// This struct is created by the [`values_mut`](HashMap::values_mut) method on [`HashMap`].
pub struct ValuesMut<'a, K, V> {
    iter: IterMut<'a, K, V>,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (_, value) = self.iter.next()?;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}

impl<K, V> fmt::Debug for ValuesMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuesMut").finish_non_exhaustive()
    }
}
