use crate::rotation::restructure;
use crate::util::{get_l, get_p, get_r, height, Side};

use super::types::AvlNodeLike;

/// Cached height of a possibly empty subtree.
#[inline]
fn h<N: AvlNodeLike>(arena: &[N], i: Option<u32>) -> i32 {
    i.map_or(-1, |i| arena[i as usize].height())
}

/// Recomputes `n`'s cached height from its children and returns it.
pub fn update_height<N: AvlNodeLike>(arena: &mut [N], n: u32) -> i32 {
    let height = 1 + h(arena, get_l(arena, n)).max(h(arena, get_r(arena, n)));
    arena[n as usize].set_height(height);
    height
}

/// `height(left) - height(right)` from cached heights.
pub fn balance_factor<N: AvlNodeLike>(arena: &[N], n: u32) -> i32 {
    h(arena, get_l(arena, n)) - h(arena, get_r(arena, n))
}

pub fn is_balanced<N: AvlNodeLike>(arena: &[N], n: u32) -> bool {
    balance_factor(arena, n).abs() <= 1
}

/// Taller child of `n`; the right child wins a tie.
pub fn taller_child<N: AvlNodeLike>(arena: &[N], n: u32) -> Option<u32> {
    taller_child_towards(arena, n, Side::Right)
}

fn taller_child_towards<N: AvlNodeLike>(arena: &[N], n: u32, tie: Side) -> Option<u32> {
    match (get_l(arena, n), get_r(arena, n)) {
        (None, None) => None,
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (Some(l), Some(r)) => {
            let (lh, rh) = (h(arena, Some(l)), h(arena, Some(r)));
            if lh > rh || (lh == rh && tie == Side::Left) {
                Some(l)
            } else {
                Some(r)
            }
        }
    }
}

/// Grandchild of the unbalanced node `z` to restructure around.
///
/// `y` is `z`'s taller child. Below `y` a tie goes to the child on the same
/// side as `y`, which keeps the chain straight and makes the repair a single
/// rotation.
fn pivot<N: AvlNodeLike>(arena: &[N], z: u32) -> Option<(u32, u32)> {
    let y = taller_child(arena, z)?;
    let side = if get_l(arena, z) == Some(y) {
        Side::Left
    } else {
        Side::Right
    };
    let x = taller_child_towards(arena, y, side)?;
    Some((y, x))
}

/// Bottom-up repair walk starting at `from`.
///
/// At each node: recompute the height, restructure if unbalanced, then move
/// to the parent. The walk stops at the root or as soon as a subtree's
/// height equals the height its parent saw before the change, since nothing
/// above can have changed.
///
/// Returns the tree root.
pub fn rebalance<N: AvlNodeLike>(arena: &mut [N], root: Option<u32>, from: u32) -> Option<u32> {
    let mut root = root?;
    let mut z = from;
    loop {
        let before = arena[z as usize].height();
        update_height(arena, z);

        let mut top = z;
        if !is_balanced(arena, z) {
            if let Some((y, x)) = pivot(arena, z) {
                let restructured = restructure(arena, root, x);
                root = restructured.root;
                top = restructured.top;
                let (a, b) = if top == y { (x, z) } else { (z, y) };
                update_height(arena, a);
                update_height(arena, b);
                update_height(arena, top);
            }
        }

        let after = arena[top as usize].height();
        match get_p(arena, top) {
            Some(p) if after != before => z = p,
            _ => break,
        }
    }
    Some(root)
}

/// Checks that every cached height matches the height recomputed from the
/// tree shape and that every balance factor lies in `[-1, 1]`.
pub fn assert_avl_tree<N: AvlNodeLike>(arena: &[N], root: Option<u32>) -> Result<(), String> {
    fn validate<N: AvlNodeLike>(arena: &[N], node: u32) -> Result<(), String> {
        let l = get_l(arena, node);
        let r = get_r(arena, node);
        if let Some(l) = l {
            validate(arena, l)?;
        }
        if let Some(r) = r {
            validate(arena, r)?;
        }

        let expected = height(arena, Some(node));
        let actual = arena[node as usize].height();
        if actual != expected {
            return Err(format!(
                "Height mismatch at node {node}: expected {expected}, got {actual}"
            ));
        }
        let bf = height(arena, l) - height(arena, r);
        if !(-1..=1).contains(&bf) {
            return Err(format!("AVL balance violated at node {node}: bf={bf}"));
        }
        Ok(())
    }

    match root {
        Some(root) => validate(arena, root),
        None => Ok(()),
    }
}
