//! Height-balanced (AVL) search tree map.

pub mod types;
pub mod util;

use crate::bst::Removal;
use crate::tree_map::{SearchTreeMap, TreeOps};
use crate::types::Comparator;

pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, rebalance, taller_child};

/// Rebalancing policy: after every attachment or removal, walk up from the
/// lowest changed node recomputing heights and restructuring where the
/// balance factor leaves `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AvlOps;

impl<K, V> TreeOps<K, V, AvlNode<K, V>> for AvlOps {
    fn after_insert(arena: &mut [AvlNode<K, V>], root: Option<u32>, leaf: u32) -> Option<u32> {
        match arena[leaf as usize].p {
            Some(parent) => rebalance(arena, root, parent),
            None => root,
        }
    }

    fn after_remove(arena: &mut [AvlNode<K, V>], root: Option<u32>, removal: &Removal) -> Option<u32> {
        // The successor now stands where the removed node stood; its parent
        // last saw the removed node's height there.
        if let Some(successor) = removal.successor {
            arena[successor as usize].height = arena[removal.removed as usize].height;
        }
        match removal.changed {
            Some(changed) => rebalance(arena, root, changed),
            None => root,
        }
    }

    fn validate(arena: &[AvlNode<K, V>], root: Option<u32>) -> Result<(), String> {
        assert_avl_tree(arena, root)
    }
}

/// Sorted map over an AVL tree.
pub type AvlSortedMap<K, V, C = fn(&K, &K) -> i32> = SearchTreeMap<K, V, AvlNode<K, V>, AvlOps, C>;

/// Boxed-comparator flavour, for comparators chosen at runtime.
pub type DynAvlSortedMap<K, V> = AvlSortedMap<K, V, Box<Comparator<K>>>;
