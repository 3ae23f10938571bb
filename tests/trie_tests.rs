//! End-to-end scenarios: staged builds, lookups, and trie merging.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use louds_trie::{merge_trie, LoudsTrie};

fn build_trie(keys: &[String]) -> LoudsTrie {
    let mut trie = LoudsTrie::new();
    for key in keys {
        trie.add(key.as_bytes()).unwrap();
    }
    trie.build().unwrap();
    trie
}

#[test]
fn test_basic_functionality() {
    let keys: Vec<String> = ["apple", "banana", "cherry", "date", "elderberry", "fig"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let trie = build_trie(&keys);

    assert_eq!(trie.n_keys().unwrap(), keys.len());
    assert!(trie.n_nodes().unwrap() > 0);
    assert!(trie.size().unwrap() > 0);

    let mut ids = Vec::new();
    for key in &keys {
        let id = trie.lookup(key.as_bytes()).unwrap();
        assert!(id.is_some(), "expected key {key} not found");
        ids.push(id.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), keys.len(), "key IDs must be unique");

    assert_eq!(trie.lookup(b"grape").unwrap(), None);
}

#[test]
fn test_merge_functionality() {
    let keys1: Vec<String> = ["apple", "cherry", "fig", "grape", "lemon"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let keys2: Vec<String> = ["banana", "cherry", "date", "fig", "kiwi"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let trie1 = build_trie(&keys1);
    let trie2 = build_trie(&keys2);

    let merged = merge_trie(&trie1, &trie2).unwrap();

    let expected = [
        "apple", "banana", "cherry", "date", "fig", "grape", "kiwi", "lemon",
    ];
    assert_eq!(merged.n_keys().unwrap(), expected.len());
    for key in expected {
        assert!(
            merged.lookup(key.as_bytes()).unwrap().is_some(),
            "expected key {key} not found in merged trie"
        );
    }

    // Instance merge: fold trie2 into a third trie.
    let keys3: Vec<String> = ["apple", "orange", "pear", "quince"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut trie3 = build_trie(&keys3);
    trie3.merge(&trie2).unwrap();

    let expected3 = [
        "apple", "banana", "cherry", "date", "fig", "kiwi", "orange", "pear", "quince",
    ];
    assert_eq!(trie3.n_keys().unwrap(), expected3.len());
    for key in expected3 {
        assert!(
            trie3.lookup(key.as_bytes()).unwrap().is_some(),
            "expected key {key} not found after instance merge"
        );
    }
}

#[test]
fn test_empty_trie_merges() {
    let mut empty = LoudsTrie::new();
    empty.build().unwrap();

    let keys: Vec<String> = ["apple", "banana", "cherry"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let non_empty = build_trie(&keys);

    let merged1 = merge_trie(&empty, &non_empty).unwrap();
    let merged2 = merge_trie(&non_empty, &empty).unwrap();
    for key in &keys {
        assert!(merged1.lookup(key.as_bytes()).unwrap().is_some());
        assert!(merged2.lookup(key.as_bytes()).unwrap().is_some());
    }
    assert_eq!(merged1.n_keys().unwrap(), keys.len());
    assert_eq!(merged2.n_keys().unwrap(), keys.len());

    let mut empty2 = LoudsTrie::new();
    empty2.build().unwrap();
    let merged3 = merge_trie(&empty, &empty2).unwrap();
    assert_eq!(merged3.n_keys().unwrap(), 0);
    assert_eq!(merged3.lookup(b"apple").unwrap(), None);
}

#[test]
fn test_prefix_lookups() {
    let keys: Vec<String> = ["a", "apple", "application", "banana", "bat", "batch"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let trie = build_trie(&keys);

    assert_eq!(trie.lookup(b"app").unwrap(), None);
    assert_eq!(trie.lookup(b"appl").unwrap(), None);
    assert_eq!(trie.lookup(b"ba").unwrap(), None);

    assert!(trie.lookup(b"a").unwrap().is_some());
    assert!(trie.lookup(b"apple").unwrap().is_some());
}

#[test]
fn test_large_trie_merge() {
    let mut rng = StdRng::seed_from_u64(0x1005);

    let mut keys1: Vec<String> = (0..1000).map(|i| format!("key_a_{i}")).collect();
    let mut keys2: Vec<String> = (0..1000).map(|i| format!("key_b_{i}")).collect();
    for i in 0..100 {
        let key = format!("key_common_{i}");
        keys1.push(key.clone());
        keys2.push(key);
    }
    // Build order must not matter.
    keys1.shuffle(&mut rng);
    keys2.shuffle(&mut rng);

    let trie1 = build_trie(&keys1);
    let trie2 = build_trie(&keys2);
    assert_eq!(trie1.n_keys().unwrap(), 1100);
    assert_eq!(trie2.n_keys().unwrap(), 1100);

    let merged = merge_trie(&trie1, &trie2).unwrap();

    let all_keys: BTreeSet<&String> = keys1.iter().chain(keys2.iter()).collect();
    assert_eq!(merged.n_keys().unwrap(), all_keys.len());

    for key in &all_keys {
        assert!(
            merged.lookup(key.as_bytes()).unwrap().is_some(),
            "expected key {key} not found in merged trie"
        );
    }
    assert_eq!(merged.lookup(b"key_c_1").unwrap(), None);
    assert_eq!(merged.lookup(b"key_a_").unwrap(), None);
}

#[test]
fn test_stats_reporting() {
    let keys: Vec<String> = ["apple", "banana", "cherry", "date"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let trie = build_trie(&keys);

    let stats = trie.stats().unwrap();
    assert_eq!(stats.num_keys, 4);
    assert_eq!(stats.num_nodes, trie.n_nodes().unwrap());
    assert_eq!(stats.memory_usage, trie.size().unwrap());
    assert!(stats.bits_per_key > 0.0);
}
