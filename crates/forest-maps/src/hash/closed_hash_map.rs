use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

use rustc_hash::FxBuildHasher;

use crate::entry::Entry;
use crate::error::CollectionError;
use crate::iter::Cursor;

use super::iter::SlotCursor;
use super::primes::next_prime;
use super::{Slot, DEFAULT_CAPACITY, GROWTH_FACTOR, MAX_LOAD_FACTOR};

/// Outcome of a probe for one key.
enum Probe {
    /// Slot holding an equal key.
    Found(usize),
    /// Slot a new entry for the key should occupy: the first tombstone on
    /// the probe path, or else the empty slot that ended it.
    Vacant(usize),
    /// Every slot is occupied by another key.
    Exhausted,
}

fn empty_slots<K, V>(capacity: usize) -> Vec<Slot<K, V>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || Slot::Empty);
    slots
}

fn threshold_for(capacity: usize) -> usize {
    (capacity as f64 * MAX_LOAD_FACTOR) as usize
}

/// Hash map over a prime-sized slot array.
///
/// Keys are hashed with `S` (Fx by default, so slot order is reproducible
/// for a given insertion history) and placed by linear probing from
/// `hash % capacity`. Before a `put` finds the live count at the growth
/// threshold, the table is rebuilt at the next prime at least
/// [`GROWTH_FACTOR`] times larger.
#[derive(Clone)]
pub struct ClosedHashMap<K, V, S = FxBuildHasher> {
    slots: Vec<Slot<K, V>>,
    len: usize,
    threshold: usize,
    hasher: S,
}

impl<K, V> ClosedHashMap<K, V, FxBuildHasher> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Table that holds `expected` entries without rehashing.
    pub fn with_capacity(expected: usize) -> Self {
        Self::with_capacity_and_hasher(expected, FxBuildHasher)
    }
}

impl<K, V, S: Default> Default for ClosedHashMap<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> ClosedHashMap<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    pub fn with_capacity_and_hasher(expected: usize, hasher: S) -> Self {
        let capacity = next_prime((expected as f64 / MAX_LOAD_FACTOR).ceil() as usize);
        Self {
            slots: empty_slots(capacity),
            len: 0,
            threshold: threshold_for(capacity),
            hasher,
        }
    }

    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Live count at which the next `put` rebuilds the table.
    pub fn growth_threshold(&self) -> usize {
        self.threshold
    }

    pub fn tombstones(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Tombstone))
            .count()
    }

    /// Drops every entry and tombstone. Capacity is kept.
    pub fn clear(&mut self) {
        self.slots.fill_with(|| Slot::Empty);
        self.len = 0;
    }

    /// Live entries in slot order.
    pub fn iterator(&self) -> SlotCursor<'_, K, V> {
        SlotCursor::new(&self.slots, self.len)
    }
}

impl<K, V, S> ClosedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn home(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.slots.len() as u64) as usize
    }

    fn probe(&self, key: &K) -> Probe {
        let capacity = self.slots.len();
        let home = self.home(key);
        let mut tombstone = None;
        for i in 0..capacity {
            let idx = (home + i) % capacity;
            match &self.slots[idx] {
                Slot::Occupied(entry) if entry.key() == key => return Probe::Found(idx),
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    tombstone.get_or_insert(idx);
                }
                Slot::Empty => return Probe::Vacant(tombstone.unwrap_or(idx)),
            }
        }
        tombstone.map_or(Probe::Exhausted, Probe::Vacant)
    }

    fn find(&self, key: &K) -> Option<usize> {
        match self.probe(key) {
            Probe::Found(idx) => Some(idx),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.find(key)?;
        self.slots[idx].entry().map(Entry::value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        match &mut self.slots[idx] {
            Slot::Occupied(entry) => Some(entry.value_mut()),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts or replaces, returning the previous value.
    ///
    /// Fails with [`CollectionError::ProbeExhausted`] only if the table has
    /// no free slot at all, which the growth policy rules out.
    pub fn try_put(&mut self, key: K, value: V) -> Result<Option<V>, CollectionError> {
        if self.len >= self.threshold {
            self.rehash();
        }
        match self.probe(&key) {
            Probe::Found(idx) => {
                let entry = Slot::Occupied(Entry::new(key, value));
                let previous = mem::replace(&mut self.slots[idx], entry);
                Ok(previous.into_entry().map(Entry::into_value))
            }
            Probe::Vacant(idx) => {
                self.slots[idx] = Slot::Occupied(Entry::new(key, value));
                self.len += 1;
                Ok(None)
            }
            Probe::Exhausted => {
                let capacity = self.slots.len();
                tracing::error!(capacity, len = self.len, "hash probe exhausted the table");
                Err(CollectionError::ProbeExhausted { capacity })
            }
        }
    }

    /// Inserts or replaces, returning the previous value.
    ///
    /// # Panics
    ///
    /// If [`ClosedHashMap::try_put`] reports a probe exhaustion.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.try_put(key, value) {
            Ok(previous) => previous,
            Err(err) => panic!("{err}"),
        }
    }

    /// Removes `key`, leaving a tombstone in its slot.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.find(key)?;
        let removed = mem::replace(&mut self.slots[idx], Slot::Tombstone);
        self.len -= 1;
        removed.into_entry().map(Entry::into_value)
    }

    /// Rebuilds the table at the next prime `>= GROWTH_FACTOR * capacity`,
    /// re-probing every live entry and dropping tombstones.
    fn rehash(&mut self) {
        let capacity = next_prime(self.slots.len() * GROWTH_FACTOR);
        let old = mem::replace(&mut self.slots, empty_slots(capacity));
        self.threshold = threshold_for(capacity);
        tracing::debug!(
            from = old.len(),
            to = capacity,
            len = self.len,
            threshold = self.threshold,
            "rehash"
        );
        // The fresh table has no tombstones and more slots than entries, so
        // the first empty slot on each probe path is free.
        for entry in old.into_iter().filter_map(Slot::into_entry) {
            let mut idx = self.home(entry.key());
            while !matches!(self.slots[idx], Slot::Empty) {
                idx = (idx + 1) % capacity;
            }
            self.slots[idx] = Slot::Occupied(entry);
        }
    }
}

impl<K, V, S> fmt::Debug for ClosedHashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iterator().iter().map(|e| (e.key(), e.value())))
            .finish()
    }
}
