//! Arena tree utility functions shared by every tree map.
//!
//! - navigation: [`first`], [`last`], [`next`], [`prev`]
//! - measurement: [`size`], [`height`]
//! - keyed lookup: [`locate`]
//! - arena maintenance: [`relocate`]
//! - diagnostics: [`print::print`]

pub mod print;
pub mod relocate;

use crate::types::{EntryNode, Node};

pub use relocate::relocate;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Points whichever child link of `parent` currently holds `old` at `new`.
/// With no parent, `old` was the root and `new` becomes the root.
pub(crate) fn replace_child<N: Node>(
    arena: &mut [N],
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, new);
            } else {
                set_r(arena, p, new);
            }
        }
        None => *root = new,
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Height recomputed from the tree shape: `-1` for an empty subtree, `0` for
/// a leaf.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> i32 {
    match root {
        None => -1,
        Some(i) => 1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i))),
    }
}

/// Which child link of a parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Result of a keyed descent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// A node holding an equal key.
    Found(u32),
    /// The key is absent. Holds the node that would become its parent and
    /// the side to attach on, or `None` when the tree is empty.
    Vacant(Option<(u32, Side)>),
}

/// Binary search from `root`, reporting either the matching node or the
/// insertion point for `key`.
pub fn locate<K, V, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Location
where
    N: EntryNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Location::Vacant(None);
    };
    loop {
        let cmp = comparator(key, arena[curr as usize].key());
        if cmp == 0 {
            return Location::Found(curr);
        }
        let (child, side) = if cmp < 0 {
            (get_l(arena, curr), Side::Left)
        } else {
            (get_r(arena, curr), Side::Right)
        };
        match child {
            Some(c) => curr = c,
            None => return Location::Vacant(Some((curr, side))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bst::BstNode;
    use crate::entry::Entry;

    fn leaf(k: i32) -> BstNode<i32, ()> {
        BstNode::new_leaf(Entry::new(k, ()))
    }

    /// ```text
    ///      1
    ///    0   2
    /// ```
    fn three() -> Vec<BstNode<i32, ()>> {
        let mut arena = vec![leaf(10), leaf(20), leaf(30)];
        arena[1].l = Some(0);
        arena[1].r = Some(2);
        arena[0].p = Some(1);
        arena[2].p = Some(1);
        arena
    }

    #[test]
    fn navigation_walks_in_order() {
        let arena = three();
        assert_eq!(first(&arena, Some(1)), Some(0));
        assert_eq!(last(&arena, Some(1)), Some(2));
        assert_eq!(next(&arena, 0), Some(1));
        assert_eq!(next(&arena, 1), Some(2));
        assert_eq!(next(&arena, 2), None);
        assert_eq!(prev(&arena, 2), Some(1));
        assert_eq!(prev(&arena, 0), None);
        assert_eq!(first::<BstNode<i32, ()>>(&[], None), None);
    }

    #[test]
    fn size_and_height_follow_shape() {
        let arena = three();
        assert_eq!(size(&arena, Some(1)), 3);
        assert_eq!(height(&arena, Some(1)), 1);
        assert_eq!(height(&arena, Some(0)), 0);
        assert_eq!(height::<BstNode<i32, ()>>(&arena, None), -1);
    }

    #[test]
    fn locate_reports_insertion_point() {
        let arena = three();
        let cmp = crate::types::default_comparator::<i32>;
        let at = |root, key: i32| locate::<i32, (), _, _>(&arena, root, &key, &cmp);
        assert_eq!(at(Some(1), 20), Location::Found(1));
        assert_eq!(at(Some(1), 5), Location::Vacant(Some((0, Side::Left))));
        assert_eq!(at(Some(1), 25), Location::Vacant(Some((2, Side::Left))));
        assert_eq!(at(Some(1), 35), Location::Vacant(Some((2, Side::Right))));
        assert_eq!(at(None, 35), Location::Vacant(None));
    }
}
