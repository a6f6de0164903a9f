//! Node trait definitions.
//!
//! Tree nodes live in a `Vec`-backed arena owned by the map. Every link is an
//! `Option<u32>` index into that arena: `l` and `r` are the owning child
//! links, `p` is a lookup-only back-reference used for upward navigation.
//! All tree-manipulation functions take the arena as `&mut [N]` and work with
//! indices.

use crate::entry::Entry;

/// Binary-tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by the tree maps: negative, zero or positive like
/// `Ordering as i32`.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Node carrying one map entry.
pub trait EntryNode<K, V>: Node {
    fn new_leaf(entry: Entry<K, V>) -> Self;
    fn entry(&self) -> &Entry<K, V>;
    fn entry_mut(&mut self) -> &mut Entry<K, V>;
    fn into_entry(self) -> Entry<K, V>;

    fn key<'a>(&'a self) -> &'a K
    where
        V: 'a,
    {
        self.entry().key()
    }

    /// Swaps in a new entry, keeping the node (and therefore its position in
    /// the tree) unchanged.
    fn replace_entry(&mut self, entry: Entry<K, V>) -> Entry<K, V> {
        std::mem::replace(self.entry_mut(), entry)
    }
}

pub fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    a.cmp(b) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avl::AvlNode;
    use crate::bst::BstNode;

    fn keys_of<K: Clone, V, N: EntryNode<K, V>>(arena: &[N]) -> Vec<K> {
        arena.iter().map(|n| n.key().clone()).collect()
    }

    #[test]
    fn key_borrows_through_any_entry_node() {
        let bst: Vec<BstNode<String, Vec<u8>>> = ["b", "a"]
            .iter()
            .map(|k| BstNode::new_leaf(Entry::new(k.to_string(), vec![1])))
            .collect();
        assert_eq!(keys_of(&bst), vec!["b".to_string(), "a".to_string()]);

        let mut avl: AvlNode<i32, &str> = AvlNode::new_leaf(Entry::new(7, "x"));
        assert_eq!(*avl.key(), 7);
        let old = avl.replace_entry(Entry::new(7, "y"));
        assert_eq!(old.value(), &"x");
        assert_eq!(keys_of(std::slice::from_ref(&avl)), vec![7]);
    }
}
