//! Unbalanced binary search tree map.
//!
//! [`BstSortedMap`] is the plain search-tree variant of
//! [`SearchTreeMap`]: no rotations, no cached heights. Its shape follows the
//! insertion order, so operations are linear in the worst case.

pub mod types;
pub mod util;

use crate::tree_map::{SearchTreeMap, TreeOps};
use crate::types::Comparator;

pub use types::BstNode;
pub use util::{attach, remove, Removal};

/// Policy that leaves the tree shape exactly as attachment and splicing left
/// it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbalanced;

impl<K, V> TreeOps<K, V, BstNode<K, V>> for Unbalanced {
    fn after_insert(_arena: &mut [BstNode<K, V>], root: Option<u32>, _leaf: u32) -> Option<u32> {
        root
    }

    fn after_remove(
        _arena: &mut [BstNode<K, V>],
        root: Option<u32>,
        _removal: &Removal,
    ) -> Option<u32> {
        root
    }
}

/// Sorted map over an unbalanced binary search tree.
pub type BstSortedMap<K, V, C = fn(&K, &K) -> i32> =
    SearchTreeMap<K, V, BstNode<K, V>, Unbalanced, C>;

/// Boxed-comparator flavour, for comparators chosen at runtime.
pub type DynBstSortedMap<K, V> = BstSortedMap<K, V, Box<Comparator<K>>>;
