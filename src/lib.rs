#![deny(unsafe_op_in_unsafe_fn)]
#![doc = include_str!("../README.md")]

mod cursor;
mod error;
mod map;
mod raw;

pub use cursor::{Cursor, CursorMut};
pub use equivalent::Equivalent;
pub use error::{NotFound, OccupiedError};
pub use map::{
    HashMap, HashMapBuilder, IntoIter, Iter, IterMut, Keys, Values, ValuesMut, MAX_LOAD_FACTOR,
    MIN_CAPACITY,
};
