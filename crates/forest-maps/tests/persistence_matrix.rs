use std::collections::BTreeMap;

use forest_maps::{AvlSortedMap, BstSortedMap, ClosedHashMap, Cursor};
use forest_maps_util::Fuzzer;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Grade {
    component: String,
    score: f32,
}

fn grade(component: &str, score: f32) -> Grade {
    Grade {
        component: component.to_string(),
        score,
    }
}

#[test]
fn sorted_map_round_trip_preserves_order_matrix() {
    let fuzzer = Fuzzer::from_u64(77);
    let mut map = AvlSortedMap::new();
    for k in fuzzer.shuffled(0..100u32) {
        map.put(k, grade(&format!("c{k}"), k as f32 / 2.0));
    }
    for k in (0..100).step_by(4) {
        map.remove(&k);
    }

    let json = serde_json::to_string(&map).unwrap();
    let back: AvlSortedMap<u32, Grade> = serde_json::from_str(&json).unwrap();
    back.assert_valid().unwrap();
    assert_eq!(back.size(), 75);
    assert_eq!(back.to_entries(), map.to_entries());
}

#[test]
fn unbalanced_map_decodes_through_puts_matrix() {
    let map: BstSortedMap<String, u8> = [("m", 1), ("c", 2), ("x", 3), ("a", 4)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let value = serde_json::to_value(&map).unwrap();
    assert_eq!(
        value,
        serde_json::json!([["a", 4], ["c", 2], ["m", 1], ["x", 3]])
    );

    // Encoded in key order, so the decoded tree is a right-leaning chain
    // even though the contents match.
    let back: BstSortedMap<String, u8> = serde_json::from_value(value).unwrap();
    assert_eq!(back.to_entries(), map.to_entries());
    assert_eq!(back.height(), 3);
    assert_eq!(map.height(), 2);
}

#[test]
fn hash_map_round_trip_matrix() {
    let mut map: ClosedHashMap<u64, Grade> = ClosedHashMap::with_capacity(4);
    for i in 0..50u64 {
        map.put(i, grade("exam", i as f32));
    }
    for i in 0..10u64 {
        map.remove(&i);
    }
    let json = serde_json::to_string(&map).unwrap();
    let back: ClosedHashMap<u64, Grade> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.size(), 40);

    let expected: BTreeMap<u64, Grade> = map.to_entries().into_iter().collect();
    let actual: BTreeMap<u64, Grade> = back.to_entries().into_iter().collect();
    assert_eq!(actual, expected);
    assert_eq!(back.tombstones(), 0);
}

#[test]
fn empty_maps_round_trip_matrix() {
    let tree: AvlSortedMap<i32, i32> = AvlSortedMap::new();
    assert_eq!(serde_json::to_string(&tree).unwrap(), "[]");
    let back: AvlSortedMap<i32, i32> = serde_json::from_str("[]").unwrap();
    assert!(back.is_empty());

    let hash: ClosedHashMap<i32, i32> = serde_json::from_str("[]").unwrap();
    assert!(hash.is_empty());
}

#[test]
fn malformed_input_is_rejected_matrix() {
    assert!(serde_json::from_str::<AvlSortedMap<i32, i32>>("[[1]]").is_err());
    assert!(serde_json::from_str::<ClosedHashMap<i32, i32>>(r#"[["k", 1]]"#).is_err());
    assert!(serde_json::from_str::<BstSortedMap<i32, i32>>("7").is_err());
}

#[test]
fn extend_merges_matrix() {
    let mut map: AvlSortedMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    map.extend([("b", 20), ("c", 3)]);
    let values: Vec<i32> = map.iterator().iter().map(|e| *e.value()).collect();
    assert_eq!(values, vec![1, 20, 3]);

    let mut hash: ClosedHashMap<&str, i32> = ClosedHashMap::new();
    hash.extend(map.to_entries());
    assert_eq!(hash.get(&"b"), Some(&20));
    assert_eq!(hash.size(), 3);
}
