//! Arena-based sorted maps, a closed-addressing hash map and rewindable
//! cursors.
//!
//! Tree nodes live in a `Vec<N>` arena owned by the map; every "pointer" is
//! an `Option<u32>` index into that arena. The parent link is a plain index
//! back-reference, so rotations relink in O(1) without any shared ownership.
//!
//! - [`AvlSortedMap`]: height-balanced search tree, O(log n) operations.
//! - [`BstSortedMap`]: unbalanced search tree, shape follows insertion order.
//! - [`ClosedHashMap`]: linear probing over a prime-sized slot array with
//!   tombstone deletion and load-factor driven rehashing.
//!
//! All three are traversed with a [`Cursor`] (`has_next` / `next` /
//! `rewind`), which composes with [`Filter`], [`Keys`] and [`Values`].
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`EntryNode`] traits, comparator alias |
//! [`util`] | navigation, `locate`, arena `relocate`, tree printing |
//! [`rotation`] | `rotate_left`, `rotate_right`, `restructure` |
//! [`bst`] | attachment, splice removal, [`BstSortedMap`] |
//! [`avl`] | height walk-up rebalancing, [`AvlSortedMap`] |
//! [`tree_map`] | [`SearchTreeMap`] container and [`InOrder`] cursor |
//! [`hash`] | [`ClosedHashMap`], slots, primes |
//! [`iter`] | [`Cursor`] and its compositions |
//! [`map`] | [`Map`] / [`SortedMap`] contracts |
//! [`list`] | [`List`], [`ArrayList`], [`SinglyLinkedList`] |
//! [`persist`] | serde impls, `FromIterator` / `Extend`, `to_entries` |

pub mod avl;
pub mod bst;
pub mod entry;
pub mod error;
pub mod hash;
pub mod iter;
pub mod list;
pub mod map;
pub mod persist;
pub mod rotation;
pub mod tree_map;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlOps, AvlSortedMap, DynAvlSortedMap};
pub use bst::{BstNode, BstSortedMap, DynBstSortedMap, Unbalanced};
pub use entry::Entry;
pub use error::CollectionError;
pub use hash::{ClosedHashMap, Slot, SlotCursor};
pub use iter::{ArrayCursor, Cursor, CursorIter, Filter, Keys, Values};
pub use list::{ArrayList, List, SinglyLinkedList};
pub use map::{Map, SortedMap};
pub use rotation::{restructure, rotate_left, rotate_right, Restructured};
pub use tree_map::{InOrder, SearchTreeMap, TreeOps};
pub use types::{default_comparator, Comparator, EntryNode, Node};
