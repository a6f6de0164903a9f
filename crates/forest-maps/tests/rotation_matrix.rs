use forest_maps::bst::{attach, BstNode};
use forest_maps::util::{first, locate, next, Location};
use forest_maps::{default_comparator, restructure, rotate_left, rotate_right, Entry, EntryNode};

type Arena = Vec<BstNode<i32, ()>>;

fn build(keys: &[i32]) -> (Arena, u32) {
    let cmp = default_comparator::<i32>;
    let mut arena: Arena = Vec::new();
    let mut root: Option<u32> = None;
    for &k in keys {
        if let Location::Vacant(at) = locate::<i32, (), _, _>(&arena, root, &k, &cmp) {
            arena.push(BstNode::new_leaf(Entry::new(k, ())));
            let idx = (arena.len() - 1) as u32;
            root = attach(&mut arena, root, idx, at);
        }
    }
    (arena, root.expect("non-empty"))
}

fn idx(arena: &Arena, key: i32) -> u32 {
    arena.iter().position(|n| *n.key() == key).expect("key present") as u32
}

fn key(arena: &Arena, i: Option<u32>) -> Option<i32> {
    i.map(|i| *arena[i as usize].key())
}

/// `(key, parent, left, right)` for every node, in key order.
fn shape(arena: &Arena, root: u32) -> Vec<(i32, Option<i32>, Option<i32>, Option<i32>)> {
    let mut out = Vec::new();
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        let n = &arena[i as usize];
        out.push((*n.key(), key(arena, n.p), key(arena, n.l), key(arena, n.r)));
        curr = next(arena, i);
    }
    out
}

#[test]
fn rotate_left_at_root_matrix() {
    // 10 -> (5, 20 -> (15, 25))
    let (mut arena, root) = build(&[10, 5, 20, 15, 25]);
    let z = idx(&arena, 10);
    let root = rotate_left(&mut arena, root, z);
    assert_eq!(key(&arena, Some(root)), Some(20));
    assert_eq!(
        shape(&arena, root),
        vec![
            (5, Some(10), None, None),
            (10, Some(20), Some(5), Some(15)),
            (15, Some(10), None, None),
            (20, None, Some(10), Some(25)),
            (25, Some(20), None, None),
        ]
    );
}

#[test]
fn rotate_right_below_root_relinks_parent_matrix() {
    // 50 -> (30 -> (20, 40), 60)
    let (mut arena, root) = build(&[50, 30, 60, 20, 40]);
    let z = idx(&arena, 30);
    let new_root = rotate_right(&mut arena, root, z);
    assert_eq!(new_root, root);
    assert_eq!(
        shape(&arena, root),
        vec![
            (20, Some(50), None, Some(30)),
            (30, Some(20), None, Some(40)),
            (40, Some(30), None, None),
            (50, None, Some(20), Some(60)),
            (60, Some(50), None, None),
        ]
    );
}

#[test]
fn rotation_without_child_is_noop_matrix() {
    let (mut arena, root) = build(&[10, 5]);
    let before = shape(&arena, root);
    assert_eq!(rotate_left(&mut arena, root, root), root);
    assert_eq!(shape(&arena, root), before);
}

#[test]
fn restructure_straight_line_matrix() {
    let (mut arena, root) = build(&[30, 20, 10]);
    let x = idx(&arena, 10);
    let out = restructure(&mut arena, root, x);
    assert_eq!(key(&arena, Some(out.top)), Some(20));
    assert_eq!(out.root, out.top);
    assert_eq!(
        shape(&arena, out.root),
        vec![
            (10, Some(20), None, None),
            (20, None, Some(10), Some(30)),
            (30, Some(20), None, None),
        ]
    );
}

#[test]
fn restructure_bent_matrix() {
    // 100 -> (50 -> (10, 80 -> (70, 90)), 150): x = 80, y = 50, z = 100.
    let (mut arena, root) = build(&[100, 50, 150, 10, 80, 70, 90]);
    let x = idx(&arena, 80);
    let out = restructure(&mut arena, root, x);
    assert_eq!(key(&arena, Some(out.top)), Some(80));
    assert_eq!(out.root, out.top);
    assert_eq!(
        shape(&arena, out.root),
        vec![
            (10, Some(50), None, None),
            (50, Some(80), Some(10), Some(70)),
            (70, Some(50), None, None),
            (80, None, Some(50), Some(100)),
            (90, Some(100), None, None),
            (100, Some(80), Some(90), Some(150)),
            (150, Some(100), None, None),
        ]
    );
}

#[test]
fn restructure_inside_subtree_keeps_root_matrix() {
    // 40 -> (20, 60 -> (_, 70 -> (_, 80)))
    let (mut arena, root) = build(&[40, 20, 60, 70, 80]);
    let x = idx(&arena, 80);
    let out = restructure(&mut arena, root, x);
    assert_eq!(out.root, root);
    assert_eq!(key(&arena, Some(out.top)), Some(70));
    assert_eq!(key(&arena, arena[out.top as usize].p), Some(40));
    assert_eq!(key(&arena, arena[root as usize].r), Some(70));
}

#[test]
fn restructure_without_grandparent_matrix() {
    let (mut arena, root) = build(&[10, 20]);
    let x = idx(&arena, 20);
    let out = restructure(&mut arena, root, x);
    assert_eq!(out.root, root);
    assert_eq!(out.top, x);
}
