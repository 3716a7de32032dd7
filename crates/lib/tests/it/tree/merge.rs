//! Merge semantics: recursive for maps, appending for sequences,
//! overwriting for everything else.

use acorn::{Tree, Value};

use crate::helpers::{assert_key_order, assert_path_eq};

#[test]
fn test_merge_adds_missing_keys_in_source_order() {
    let mut base = Tree::new().with("a", 1);
    let incoming = Tree::new().with("b", 2).with("c", 3);

    base.merge(&incoming);
    assert_key_order(&base, &["a", "b", "c"]);
    assert_path_eq(&base, "b", 2);
}

#[test]
fn test_merge_maps_recursively() {
    let mut base = Tree::new().with("cfg.host", "localhost").with("cfg.port", 8080);
    let incoming = Tree::new().with("cfg.port", 9090).with("cfg.tls", true);

    base.merge(&incoming);
    assert_path_eq(&base, "cfg.host", "localhost");
    assert_path_eq(&base, "cfg.port", 9090);
    assert_path_eq(&base, "cfg.tls", true);
}

#[test]
fn test_merge_appends_sequences() {
    let mut base = Tree::new().with("tags", vec!["a", "b"]);
    let incoming = Tree::new().with("tags", vec!["b", "c"]);

    base.merge(&incoming);
    // All incoming elements append, duplicates included
    assert_path_eq(&base, "tags.0", "a");
    assert_path_eq(&base, "tags.1", "b");
    assert_path_eq(&base, "tags.2", "b");
    assert_path_eq(&base, "tags.3", "c");
    assert_eq!(base.get("tags.4"), None);
}

#[test]
fn test_merge_conflicting_shapes_overwrite() {
    let mut base = Tree::new()
        .with("a", 1)
        .with("b", vec![1, 2])
        .with("c.nested", true);
    let incoming = Tree::new()
        .with("a", vec![9])
        .with("b", "text")
        .with("c", 7);

    base.merge(&incoming);
    assert_path_eq(&base, "a.0", 9);
    assert_path_eq(&base, "b", "text");
    assert_path_eq(&base, "c", 7);
}

#[test]
fn test_merge_keeps_existing_key_positions() {
    let mut base = Tree::new().with("first", 1).with("second", 2);
    let incoming = Tree::new().with("second", 20).with("zeroth", 0);

    base.merge(&incoming);
    assert_key_order(&base, &["first", "second", "zeroth"]);
    assert_path_eq(&base, "second", 20);
}

#[test]
fn test_merge_does_not_mutate_source() {
    let mut base = Tree::new().with("a", 1);
    let incoming = Tree::new().with("a.deep", 2);
    let snapshot = incoming.clone();

    base.merge(&incoming);
    assert_eq!(incoming, snapshot);
}

#[test]
fn test_merge_all_applies_in_sequence() {
    let mut base = Tree::new().with("v", 1);
    let second = Tree::new().with("v", 2);
    let third = Tree::new().with("v", 3).with("extra", true);

    base.merge_all([&second, &third]);
    assert_path_eq(&base, "v", 3);
    assert_path_eq(&base, "extra", true);
}

#[test]
fn test_merge_empty_trees() {
    let mut base = Tree::new().with("a", 1);
    base.merge(&Tree::new());
    assert_path_eq(&base, "a", 1);

    let mut empty = Tree::new();
    empty.merge(&Tree::new().with("a", Value::Null));
    assert_eq!(empty.get("a"), Some(&Value::Null));
}
