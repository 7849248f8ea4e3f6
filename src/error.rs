use std::error::Error;
use std::fmt;

/// The error returned by [`HashMap::at`](crate::HashMap::at) and
/// [`HashMap::at_mut`](crate::HashMap::at_mut) when the key is not present.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key not found in table")
    }
}

impl Error for NotFound {}

/// The error returned by [`HashMap::try_insert`](crate::HashMap::try_insert) when the key
/// already exists.
///
/// Contains the existing value, and the value that was not inserted.
#[derive(Debug, PartialEq, Eq)]
pub struct OccupiedError<'a, V: 'a> {
    /// The value in the map that was already present.
    pub current: &'a mut V,
    /// The value which was not inserted, because the entry was already occupied.
    pub not_inserted: V,
}

impl<'a, V> fmt::Display for OccupiedError<'a, V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to insert {:?}, key occupied with value {:?}",
            self.not_inserted, self.current
        )
    }
}

impl<'a, V> Error for OccupiedError<'a, V> where V: fmt::Debug {}
