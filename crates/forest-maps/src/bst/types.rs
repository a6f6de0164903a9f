use crate::entry::Entry;
use crate::types::{EntryNode, Node};

/// Search-tree node without balancing metadata.
#[derive(Clone, Debug)]
pub struct BstNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub entry: Entry<K, V>,
}

impl<K, V> Node for BstNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> EntryNode<K, V> for BstNode<K, V> {
    fn new_leaf(entry: Entry<K, V>) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            entry,
        }
    }

    fn entry(&self) -> &Entry<K, V> {
        &self.entry
    }

    fn entry_mut(&mut self) -> &mut Entry<K, V> {
        &mut self.entry
    }

    fn into_entry(self) -> Entry<K, V> {
        self.entry
    }
}
