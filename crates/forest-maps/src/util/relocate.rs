use crate::types::Node;

use super::{get_l, get_p, get_r, set_p};

/// Releases the detached node at `idx` from the arena and returns it.
///
/// The arena stays dense: the last node is moved into `idx` with
/// `swap_remove`, and the links that pointed at its old index (its parent's
/// child link, its children's parent links, or `root`) are rewritten.
///
/// The node at `idx` must already be unlinked from the tree.
pub fn relocate<N: Node>(arena: &mut Vec<N>, root: &mut Option<u32>, idx: u32) -> N {
    let moved = (arena.len() - 1) as u32;
    let removed = arena.swap_remove(idx as usize);
    if moved == idx {
        return removed;
    }

    match get_p(arena, idx) {
        Some(p) => {
            if get_l(arena, p) == Some(moved) {
                arena[p as usize].set_l(Some(idx));
            } else {
                arena[p as usize].set_r(Some(idx));
            }
        }
        None => {
            if *root == Some(moved) {
                *root = Some(idx);
            }
        }
    }
    if let Some(l) = get_l(arena, idx) {
        set_p(arena, l, Some(idx));
    }
    if let Some(r) = get_r(arena, idx) {
        set_p(arena, r, Some(idx));
    }
    removed
}
