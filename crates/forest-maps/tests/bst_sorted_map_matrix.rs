use forest_maps::{BstSortedMap, CollectionError, Cursor, Entry};

fn keys<V>(map: &BstSortedMap<i32, V>) -> Vec<i32> {
    map.iterator().iter().map(|e| *e.key()).collect()
}

fn build(keys: &[i32]) -> BstSortedMap<i32, String> {
    let mut map = BstSortedMap::new();
    for &k in keys {
        map.put(k, format!("v{k}"));
    }
    map.assert_valid().unwrap();
    map
}

#[test]
fn shape_follows_insertion_order_matrix() {
    let mut map = BstSortedMap::new();
    for i in 0..64 {
        map.put(i, ());
    }
    map.assert_valid().unwrap();
    assert_eq!(map.height(), 63);
    assert_eq!(map.root_entry().map(Entry::key), Some(&0));

    let balanced = build(&[4, 2, 6, 1, 3, 5, 7]);
    assert_eq!(balanced.height(), 2);
}

#[test]
fn remove_leaf_matrix() {
    let mut map = build(&[20, 10, 30]);
    assert_eq!(map.remove(&10), Some("v10".to_string()));
    map.assert_valid().unwrap();
    assert_eq!(keys(&map), vec![20, 30]);
    assert_eq!(map.root_entry().map(Entry::key), Some(&20));
}

#[test]
fn remove_single_child_matrix() {
    let mut map = build(&[20, 10, 5, 30, 40]);
    assert_eq!(map.remove(&10), Some("v10".to_string()));
    assert_eq!(map.remove(&30), Some("v30".to_string()));
    map.assert_valid().unwrap();
    assert_eq!(keys(&map), vec![5, 20, 40]);
    assert_eq!(map.height(), 1);
}

#[test]
fn remove_root_with_direct_right_successor_matrix() {
    let mut map = build(&[20, 10, 30, 40]);
    map.remove(&20);
    map.assert_valid().unwrap();
    assert_eq!(map.root_entry().map(Entry::key), Some(&30));
    assert_eq!(keys(&map), vec![10, 30, 40]);
}

#[test]
fn remove_root_with_deep_successor_matrix() {
    let mut map = build(&[20, 10, 40, 30, 50, 35]);
    map.remove(&20);
    map.assert_valid().unwrap();
    assert_eq!(map.root_entry().map(Entry::key), Some(&30));
    assert_eq!(keys(&map), vec![10, 30, 35, 40, 50]);
    assert_eq!(map.get(&35).map(String::as_str), Some("v35"));
}

#[test]
fn remove_everything_matrix() {
    let order = [50, 30, 70, 20, 40, 60, 80, 35, 45, 65];
    let mut map = build(&order);
    for (n, k) in [30, 50, 65, 20, 80, 35, 70, 45, 40, 60].into_iter().enumerate() {
        assert!(map.remove(&k).is_some(), "key {k}");
        map.assert_valid().unwrap();
        assert_eq!(map.size(), order.len() - n - 1);
        assert_eq!(map.arena().len(), map.size());
    }
    assert!(map.is_empty());
    assert_eq!(map.height(), -1);
}

#[test]
fn min_max_matrix() {
    let map: BstSortedMap<i32, String> = BstSortedMap::new();
    assert_eq!(map.min_entry(), Err(CollectionError::EmptyContainer));
    assert_eq!(map.max_entry(), Err(CollectionError::EmptyContainer));

    let map = build(&[8, 3, 12, 1, 15]);
    assert_eq!(map.min_entry().map(Entry::key), Ok(&1));
    assert_eq!(map.max_entry().map(Entry::key), Ok(&15));
}

#[test]
fn put_replaces_entry_matrix() {
    let mut map = build(&[2, 1, 3]);
    assert_eq!(map.put(1, "one".to_string()), Some("v1".to_string()));
    assert_eq!(map.size(), 3);
    assert_eq!(map.get(&1).map(String::as_str), Some("one"));
    assert!(map.contains_key(&3));
    assert!(!map.contains_key(&4));
}

#[test]
fn comparator_on_tuple_field_matrix() {
    let mut map: BstSortedMap<(u8, &str), u32, _> =
        BstSortedMap::with_comparator(|a: &(u8, &str), b: &(u8, &str)| a.1.cmp(b.1) as i32);
    map.put((3, "carol"), 3);
    map.put((1, "alice"), 1);
    map.put((2, "bob"), 2);
    // Only the name participates in ordering and equality.
    assert_eq!(map.put((9, "bob"), 20), Some(2));
    let names: Vec<&str> = map.iterator().iter().map(|e| e.key().1).collect();
    assert_eq!(names, vec!["alice", "bob", "carol"]);
    map.assert_valid().unwrap();
}
