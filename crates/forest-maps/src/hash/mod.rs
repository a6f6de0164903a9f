//! Closed-addressing hash map with linear probing.
//!
//! Removed entries leave a [`Slot::Tombstone`] behind so that probe chains
//! running through the slot stay intact. Tombstones are reused by later
//! insertions and discarded when the table is rebuilt.

pub mod closed_hash_map;
pub mod iter;
pub mod primes;

use crate::entry::Entry;

pub use closed_hash_map::ClosedHashMap;
pub use iter::SlotCursor;
pub use primes::{is_prime, next_prime};

/// Initial sizing hint used by [`ClosedHashMap::new`].
pub const DEFAULT_CAPACITY: usize = 50;

/// Live entries allowed per slot before the table grows.
pub const MAX_LOAD_FACTOR: f64 = 0.8;

/// Minimum ratio between the new and the old capacity on rehash.
pub const GROWTH_FACTOR: usize = 2;

/// One cell of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot<K, V> {
    Empty,
    Occupied(Entry<K, V>),
    /// A removed entry. Probing continues past it.
    Tombstone,
}

impl<K, V> Slot<K, V> {
    pub fn entry(&self) -> Option<&Entry<K, V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn into_entry(self) -> Option<Entry<K, V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }
}
