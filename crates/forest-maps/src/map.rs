//! Map contracts consumed by code built on top of this crate.
//!
//! Both the tree maps and [`crate::ClosedHashMap`] implement [`Map`]; the
//! tree maps additionally implement [`SortedMap`]. Every trait method
//! delegates to the inherent method of the same name.

use std::hash::{BuildHasher, Hash};

use crate::entry::Entry;
use crate::error::CollectionError;
use crate::hash::{ClosedHashMap, SlotCursor};
use crate::iter::{Cursor, Keys, Values};
use crate::tree_map::{InOrder, SearchTreeMap, TreeOps};
use crate::types::EntryNode;

pub trait Map<K, V> {
    /// Entry cursor returned by [`Map::iterator`].
    type Entries<'a>: Cursor<Item = &'a Entry<K, V>>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V>;

    /// Inserts or replaces, returning the previous value for `key`.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn iterator<'a>(&'a self) -> Self::Entries<'a>
    where
        K: 'a,
        V: 'a;

    fn keys<'a>(&'a self) -> Keys<Self::Entries<'a>>
    where
        K: 'a,
        V: 'a,
    {
        Keys::new(self.iterator())
    }

    fn values<'a>(&'a self) -> Values<Self::Entries<'a>>
    where
        K: 'a,
        V: 'a,
    {
        Values::new(self.iterator())
    }
}

/// A [`Map`] whose cursor yields entries in ascending key order.
pub trait SortedMap<K, V>: Map<K, V> {
    /// Fails with [`CollectionError::EmptyContainer`] on an empty map.
    fn min_entry(&self) -> Result<&Entry<K, V>, CollectionError>;

    /// Fails with [`CollectionError::EmptyContainer`] on an empty map.
    fn max_entry(&self) -> Result<&Entry<K, V>, CollectionError>;
}

impl<K, V, N, O, C> Map<K, V> for SearchTreeMap<K, V, N, O, C>
where
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    type Entries<'a>
        = InOrder<'a, K, V, N>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V> {
        SearchTreeMap::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        SearchTreeMap::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        SearchTreeMap::remove(self, key)
    }

    fn size(&self) -> usize {
        SearchTreeMap::size(self)
    }

    fn is_empty(&self) -> bool {
        SearchTreeMap::is_empty(self)
    }

    fn iterator<'a>(&'a self) -> InOrder<'a, K, V, N>
    where
        K: 'a,
        V: 'a,
    {
        SearchTreeMap::iterator(self)
    }
}

impl<K, V, N, O, C> SortedMap<K, V> for SearchTreeMap<K, V, N, O, C>
where
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    fn min_entry(&self) -> Result<&Entry<K, V>, CollectionError> {
        SearchTreeMap::min_entry(self)
    }

    fn max_entry(&self) -> Result<&Entry<K, V>, CollectionError> {
        SearchTreeMap::max_entry(self)
    }
}

impl<K, V, S> Map<K, V> for ClosedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Entries<'a>
        = SlotCursor<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn get(&self, key: &K) -> Option<&V> {
        ClosedHashMap::get(self, key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        ClosedHashMap::put(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        ClosedHashMap::remove(self, key)
    }

    fn size(&self) -> usize {
        ClosedHashMap::size(self)
    }

    fn is_empty(&self) -> bool {
        ClosedHashMap::is_empty(self)
    }

    fn iterator<'a>(&'a self) -> SlotCursor<'a, K, V>
    where
        K: 'a,
        V: 'a,
    {
        ClosedHashMap::iterator(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AvlSortedMap, BstSortedMap};

    fn fill<M: Map<i32, &'static str>>(map: &mut M) {
        for (k, v) in [(3, "c"), (1, "a"), (2, "b")] {
            assert_eq!(map.put(k, v), None);
        }
        assert_eq!(map.put(2, "B"), Some("b"));
    }

    fn sorted_keys<M: SortedMap<i32, &'static str>>(map: &M) -> Vec<i32> {
        map.keys().iter().copied().collect()
    }

    #[test]
    fn tree_maps_share_the_sorted_contract() {
        let mut avl: AvlSortedMap<i32, &str> = AvlSortedMap::new();
        let mut bst: BstSortedMap<i32, &str> = BstSortedMap::new();
        fill(&mut avl);
        fill(&mut bst);
        assert_eq!(sorted_keys(&avl), vec![1, 2, 3]);
        assert_eq!(sorted_keys(&bst), vec![1, 2, 3]);
        assert_eq!(SortedMap::min_entry(&avl).unwrap().key(), &1);
        assert_eq!(SortedMap::max_entry(&bst).unwrap().value(), &"c");
    }

    #[test]
    fn hash_map_satisfies_the_map_contract() {
        let mut map: ClosedHashMap<i32, &'static str> = ClosedHashMap::new();
        fill(&mut map);
        assert_eq!(Map::size(&map), 3);
        assert_eq!(Map::get(&map, &2), Some(&"B"));
        let mut values: Vec<_> = map.values().iter().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec!["B", "a", "c"]);
        assert_eq!(Map::remove(&mut map, &1), Some("a"));
        assert!(!Map::is_empty(&map));
    }
}
