//! Rotation primitives, independent of any balancing policy.
//!
//! Every function takes the current tree root and returns the (possibly new)
//! tree root, so a rotation at the root re-roots the tree.

use crate::types::Node;
use crate::util::{get_l, get_p, get_r, set_l, set_p, set_r};

/// Hangs `new` where `old` used to hang under `parent` (or at the root).
fn reattach<N: Node>(arena: &mut [N], root: u32, parent: Option<u32>, old: u32, new: u32) -> u32 {
    set_p(arena, new, parent);
    match parent {
        Some(p) => {
            if get_l(arena, p) == Some(old) {
                set_l(arena, p, Some(new));
            } else {
                set_r(arena, p, Some(new));
            }
            root
        }
        None => new,
    }
}

/// Single left rotation at `z`.
///
/// ```text
///   z                y
///  / \              / \
/// a   y     =>     z   c
///    / \          / \
///   b   c        a   b
/// ```
///
/// `z` must have a right child; otherwise the tree is returned unchanged.
pub fn rotate_left<N: Node>(arena: &mut [N], root: u32, z: u32) -> u32 {
    let Some(y) = get_r(arena, z) else {
        return root;
    };
    let zp = get_p(arena, z);
    let b = get_l(arena, y);

    set_r(arena, z, b);
    if let Some(b) = b {
        set_p(arena, b, Some(z));
    }
    set_l(arena, y, Some(z));
    set_p(arena, z, Some(y));
    reattach(arena, root, zp, z, y)
}

/// Single right rotation at `z`, the mirror image of [`rotate_left`].
///
/// `z` must have a left child; otherwise the tree is returned unchanged.
pub fn rotate_right<N: Node>(arena: &mut [N], root: u32, z: u32) -> u32 {
    let Some(y) = get_l(arena, z) else {
        return root;
    };
    let zp = get_p(arena, z);
    let b = get_r(arena, y);

    set_l(arena, z, b);
    if let Some(b) = b {
        set_p(arena, b, Some(z));
    }
    set_r(arena, y, Some(z));
    set_p(arena, z, Some(y));
    reattach(arena, root, zp, z, y)
}

/// Outcome of a [`restructure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Restructured {
    /// Tree root after the rotations.
    pub root: u32,
    /// Node now occupying the position the grandparent held.
    pub top: u32,
}

/// Tri-node restructuring of `x`, its parent `y` and grandparent `z`.
///
/// Straight chains (left-left, right-right) take a single rotation at `z`
/// and leave `y` on top. Bent chains (left-right, right-left) rotate the
/// `y`/`x` pair first and then `z`, leaving `x` on top.
///
/// Without a grandparent nothing moves and `x` is reported as the top.
pub fn restructure<N: Node>(arena: &mut [N], root: u32, x: u32) -> Restructured {
    let Some(y) = get_p(arena, x) else {
        return Restructured { root, top: x };
    };
    let Some(z) = get_p(arena, y) else {
        return Restructured { root, top: x };
    };

    let y_is_left = get_l(arena, z) == Some(y);
    let x_is_left = get_l(arena, y) == Some(x);
    tracing::trace!(x, y, z, y_is_left, x_is_left, "restructure");

    let (root, top) = match (y_is_left, x_is_left) {
        (true, true) => (rotate_right(arena, root, z), y),
        (false, false) => (rotate_left(arena, root, z), y),
        (true, false) => {
            let root = rotate_left(arena, root, y);
            (rotate_right(arena, root, z), x)
        }
        (false, true) => {
            let root = rotate_right(arena, root, y);
            (rotate_left(arena, root, z), x)
        }
    };
    Restructured { root, top }
}
