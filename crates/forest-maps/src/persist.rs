//! Entry-sequence persistence.
//!
//! Every map serializes as a sequence of `(key, value)` pairs in cursor
//! order: ascending for the tree maps, slot order for the hash map.
//! Deserialization rebuilds the map with ordinary `put` calls, so the
//! decoded map only shares contents (and, for sorted maps, iteration order)
//! with the encoded one, never its internal shape.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::entry::Entry;
use crate::hash::ClosedHashMap;
use crate::iter::Cursor;
use crate::map::Map;
use crate::tree_map::{SearchTreeMap, TreeOps};
use crate::types::EntryNode;

fn serialize_entries<'a, K, V, C, S>(
    serializer: S,
    len: usize,
    entries: C,
) -> Result<S::Ok, S::Error>
where
    K: Serialize + 'a,
    V: Serialize + 'a,
    C: Cursor<Item = &'a Entry<K, V>>,
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(len))?;
    for entry in entries.iter() {
        seq.serialize_element(&(entry.key(), entry.value()))?;
    }
    seq.end()
}

/// Builds any default-constructible [`Map`] from a sequence of pairs.
struct EntrySeqVisitor<M, K, V> {
    _marker: PhantomData<fn() -> (M, K, V)>,
}

impl<M, K, V> EntrySeqVisitor<M, K, V> {
    fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<'de, M, K, V> Visitor<'de> for EntrySeqVisitor<M, K, V>
where
    M: Map<K, V> + Default,
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    type Value = M;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of [key, value] pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut map = M::default();
        while let Some((key, value)) = seq.next_element::<(K, V)>()? {
            map.put(key, value);
        }
        Ok(map)
    }
}

impl<K, V, N, O, C> Serialize for SearchTreeMap<K, V, N, O, C>
where
    K: Serialize,
    V: Serialize,
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_entries(serializer, self.size(), self.iterator())
    }
}

impl<'de, K, V, N, O> Deserialize<'de> for SearchTreeMap<K, V, N, O, fn(&K, &K) -> i32>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(EntrySeqVisitor::new())
    }
}

impl<K, V, S> Serialize for ClosedHashMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serialize_entries(serializer, self.size(), self.iterator())
    }
}

impl<'de, K, V, S> Deserialize<'de> for ClosedHashMap<K, V, S>
where
    K: Deserialize<'de> + Hash + Eq,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(EntrySeqVisitor::new())
    }
}

impl<K, V, N, O, C> SearchTreeMap<K, V, N, O, C>
where
    K: Clone,
    V: Clone,
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    /// Clones the live entries in ascending key order.
    pub fn to_entries(&self) -> Vec<(K, V)> {
        self.iterator()
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }
}

impl<K, V, S> ClosedHashMap<K, V, S>
where
    K: Clone,
    V: Clone,
{
    /// Clones the live entries in slot order.
    pub fn to_entries(&self) -> Vec<(K, V)> {
        self.iterator()
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect()
    }
}

impl<K, V, N, O> FromIterator<(K, V)> for SearchTreeMap<K, V, N, O, fn(&K, &K) -> i32>
where
    K: Ord,
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, N, O, C> Extend<(K, V)> for SearchTreeMap<K, V, N, O, C>
where
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for ClosedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for ClosedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}
