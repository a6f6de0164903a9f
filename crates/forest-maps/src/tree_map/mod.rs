//! Arena-backed search-tree map core shared by [`crate::BstSortedMap`] and
//! [`crate::AvlSortedMap`].
//!
//! The container owns the node arena, the root index, the live-entry counter
//! and the injected comparator. Attachment and removal are plain
//! search-tree surgery ([`crate::bst::util`]); a [`TreeOps`] policy is then
//! given the chance to repair the shape bottom-up.

pub mod in_order;

use std::fmt;
use std::marker::PhantomData;

use crate::bst::util::{attach, remove, Removal};
use crate::entry::Entry;
use crate::error::CollectionError;
use crate::iter::Cursor;
use crate::types::{default_comparator, EntryNode};
use crate::util::{first, height, last, locate, next, relocate, Location};

pub use in_order::InOrder;

/// Shape-repair callbacks run after structural changes.
pub trait TreeOps<K, V, N>
where
    N: EntryNode<K, V>,
{
    /// Runs after `leaf` was attached. Returns the tree root.
    fn after_insert(arena: &mut [N], root: Option<u32>, leaf: u32) -> Option<u32>;

    /// Runs after a node was unlinked, while the detached node is still in
    /// the arena. Returns the tree root.
    fn after_remove(arena: &mut [N], root: Option<u32>, removal: &Removal) -> Option<u32>;

    /// Policy-specific structural checks.
    fn validate(_arena: &[N], _root: Option<u32>) -> Result<(), String> {
        Ok(())
    }
}

/// Ordered map over an arena search tree.
///
/// Keys are ordered by the comparator `C`; `O` decides whether (and how) the
/// tree is rebalanced.
#[derive(Clone)]
pub struct SearchTreeMap<K, V, N, O, C = fn(&K, &K) -> i32>
where
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<N>,
    root: Option<u32>,
    len: usize,
    comparator: C,
    _kv: PhantomData<(K, V)>,
    _ops: PhantomData<O>,
}

impl<K, V, N, O> SearchTreeMap<K, V, N, O, fn(&K, &K) -> i32>
where
    K: Ord,
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V, N, O> Default for SearchTreeMap<K, V, N, O, fn(&K, &K) -> i32>
where
    K: Ord,
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, N, O, C> SearchTreeMap<K, V, N, O, C>
where
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            len: 0,
            comparator,
            _kv: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    fn find(&self, key: &K) -> Option<u32> {
        match locate(&self.arena, self.root, key, &self.comparator) {
            Location::Found(i) => Some(i),
            Location::Vacant(_) => None,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena[i as usize].entry().value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena[idx as usize].entry_mut().value_mut())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Inserts or replaces. A present key keeps its node; only the entry is
    /// swapped. Returns the previous value.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match locate(&self.arena, self.root, &key, &self.comparator) {
            Location::Found(i) => {
                let old = self.arena[i as usize].replace_entry(Entry::new(key, value));
                Some(old.into_value())
            }
            Location::Vacant(at) => {
                self.arena.push(N::new_leaf(Entry::new(key, value)));
                let idx = (self.arena.len() - 1) as u32;
                let root = attach(&mut self.arena, self.root, idx, at);
                self.root = O::after_insert(&mut self.arena, root, idx);
                self.len += 1;
                None
            }
        }
    }

    /// Removes `key`, returning its value. Absent keys leave the map untouched.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.find(key)?;
        let (root, removal) = remove(&mut self.arena, self.root, node);
        let mut root = O::after_remove(&mut self.arena, root, &removal);
        let detached = relocate(&mut self.arena, &mut root, node);
        self.root = root;
        self.len -= 1;
        Some(detached.into_entry().into_value())
    }

    pub fn min_entry(&self) -> Result<&Entry<K, V>, CollectionError> {
        first(&self.arena, self.root)
            .map(|i| self.arena[i as usize].entry())
            .ok_or(CollectionError::EmptyContainer)
    }

    pub fn max_entry(&self) -> Result<&Entry<K, V>, CollectionError> {
        last(&self.arena, self.root)
            .map(|i| self.arena[i as usize].entry())
            .ok_or(CollectionError::EmptyContainer)
    }

    pub fn root_entry(&self) -> Option<&Entry<K, V>> {
        self.root.map(|i| self.arena[i as usize].entry())
    }

    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Tree height measured from the shape: `-1` when empty.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Entries in ascending key order.
    pub fn iterator(&self) -> InOrder<'_, K, V, N> {
        InOrder::new(&self.arena, self.root)
    }

    /// Checks parent links, strict key order, the entry counter, arena
    /// density and then the policy's own invariants.
    pub fn assert_valid(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            if self.len != 0 || !self.arena.is_empty() {
                return Err(format!(
                    "Empty tree with len {} and {} arena nodes",
                    self.len,
                    self.arena.len()
                ));
            }
            return Ok(());
        };
        if self.arena[root as usize].p().is_some() {
            return Err("Root has parent".to_string());
        }

        let mut stack = vec![root];
        let mut reached = 0usize;
        while let Some(i) = stack.pop() {
            reached += 1;
            let node = &self.arena[i as usize];
            for child in [node.l(), node.r()].into_iter().flatten() {
                if self.arena[child as usize].p() != Some(i) {
                    return Err(format!("Broken parent link under node {i}"));
                }
                stack.push(child);
            }
        }
        if reached != self.len || self.arena.len() != self.len {
            return Err(format!(
                "Counter mismatch: len {}, reachable {reached}, arena {}",
                self.len,
                self.arena.len()
            ));
        }

        let mut curr = first(&self.arena, self.root);
        let mut prev: Option<u32> = None;
        while let Some(i) = curr {
            if let Some(p) = prev {
                let prev_key = self.arena[p as usize].key();
                if (self.comparator)(prev_key, self.arena[i as usize].key()) >= 0 {
                    return Err("Node order violated".to_string());
                }
            }
            prev = Some(i);
            curr = next(&self.arena, i);
        }

        O::validate(&self.arena, self.root)
    }
}

impl<K, V, N, O, C> SearchTreeMap<K, V, N, O, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    /// Multi-line dump of the tree shape, for diagnostics.
    pub fn print_tree(&self) -> String {
        crate::util::print::print(&self.arena, self.root, "")
    }
}

impl<K, V, N, O, C> fmt::Debug for SearchTreeMap<K, V, N, O, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
    N: EntryNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iterator().iter().map(|e| (e.key(), e.value())))
            .finish()
    }
}
