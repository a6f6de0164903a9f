use crate::types::Node;
use crate::util::{get_l, get_p, get_r, replace_child, set_l, set_p, set_r, Side};

/// Structural summary of a [`remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removal {
    /// The unlinked node. It is still in the arena, with no links.
    pub removed: u32,
    /// In-order successor installed at the removed node's position, when the
    /// removed node had two children.
    pub successor: Option<u32>,
    /// Lowest node whose child links changed, i.e. where a bottom-up repair
    /// walk has to start. `None` when the tree became empty or the root was
    /// replaced by its only child.
    pub changed: Option<u32>,
}

/// Links the detached `node` as a new leaf at `at` (as found by
/// [`crate::util::locate`]); `None` makes it the root of an empty tree.
///
/// Returns the tree root.
pub fn attach<N: Node>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    at: Option<(u32, Side)>,
) -> Option<u32> {
    let Some((parent, side)) = at else {
        set_p(arena, node, None);
        return Some(node);
    };
    match side {
        Side::Left => set_l(arena, parent, Some(node)),
        Side::Right => set_r(arena, parent, Some(node)),
    }
    set_p(arena, node, Some(parent));
    root
}

/// Unlinks `n` from the tree rooted at `root`.
///
/// - no children: `n` is cut from its parent (or the tree becomes empty);
/// - one child: the child takes `n`'s place;
/// - two children: the in-order successor `s` (leftmost node of the right
///   subtree) takes `n`'s place. When `s` is the right child itself it just
///   adopts `n`'s left subtree; otherwise `s` is first spliced out (its right
///   child moves up under its old parent) and then adopts both subtrees.
///
/// Entries never move between nodes. Returns the new root and a [`Removal`]
/// describing where the structure changed.
pub fn remove<N: Node>(arena: &mut [N], root: Option<u32>, n: u32) -> (Option<u32>, Removal) {
    let mut root = root;
    let p = get_p(arena, n);
    let l = get_l(arena, n);
    let r = get_r(arena, n);
    set_p(arena, n, None);
    set_l(arena, n, None);
    set_r(arena, n, None);

    let removal = match (l, r) {
        (None, None) => {
            replace_child(arena, &mut root, p, n, None);
            Removal {
                removed: n,
                successor: None,
                changed: p,
            }
        }
        (Some(c), None) | (None, Some(c)) => {
            replace_child(arena, &mut root, p, n, Some(c));
            set_p(arena, c, p);
            Removal {
                removed: n,
                successor: None,
                changed: p,
            }
        }
        (Some(l), Some(r)) => {
            let mut s = r;
            while let Some(sl) = get_l(arena, s) {
                s = sl;
            }

            let changed = if s == r {
                Some(s)
            } else {
                let sp = get_p(arena, s);
                let sr = get_r(arena, s);
                if let Some(sp) = sp {
                    set_l(arena, sp, sr);
                }
                if let Some(sr) = sr {
                    set_p(arena, sr, sp);
                }
                set_r(arena, s, Some(r));
                set_p(arena, r, Some(s));
                sp
            };

            set_l(arena, s, Some(l));
            set_p(arena, l, Some(s));
            set_p(arena, s, p);
            replace_child(arena, &mut root, p, n, Some(s));
            Removal {
                removed: n,
                successor: Some(s),
                changed,
            }
        }
    };
    (root, removal)
}
