//! Positional insertion, key renaming, and prepending.

use acorn::{Tree, Value, tree::TreeError};

use crate::helpers::{assert_key_order, assert_path_eq};

fn three_entries() -> Tree {
    Tree::new().with("a", 1).with("b", 2).with("c", 3)
}

#[test]
fn test_insert_at_positive_position() {
    let mut tree = three_entries();
    tree.insert("new", 1).unwrap();

    assert_key_order(&tree, &["a", "0", "b", "c"]);
    assert_path_eq(&tree, "0", "new");
}

#[test]
fn test_insert_at_ends() {
    let mut tree = three_entries();
    tree.insert("head", 0).unwrap();
    tree.insert("tail", 4).unwrap();

    assert_key_order(&tree, &["0", "a", "b", "c", "1"]);
    assert_path_eq(&tree, "0", "head");
    assert_path_eq(&tree, "1", "tail");
}

#[test]
fn test_insert_at_negative_position() {
    let mut tree = three_entries();
    // -1 inserts before the last entry
    tree.insert("new", -1).unwrap();

    assert_key_order(&tree, &["a", "b", "0", "c"]);
}

#[test]
fn test_insert_out_of_range_leaves_tree_unmodified() {
    let mut tree = three_entries();
    let snapshot = tree.clone();

    let err = tree.insert("new", 4).unwrap_err();
    assert_eq!(err, TreeError::OutOfRange { position: 4, len: 3 });
    assert!(err.is_out_of_range());

    let err = tree.insert("new", -4).unwrap_err();
    assert_eq!(err, TreeError::OutOfRange { position: -4, len: 3 });

    assert_eq!(tree, snapshot);
}

#[test]
fn test_insert_synthesizes_next_numeric_key() {
    let mut tree = Tree::new().with("7", "seven").with("name", "x");
    tree.insert("new", 0).unwrap();

    // Largest numeric key is 7, so the new entry gets 8
    assert_key_order(&tree, &["8", "7", "name"]);
    assert_path_eq(&tree, "8", "new");
}

#[test]
fn test_two_step_splice() {
    let mut tree = Tree::new()
        .with("a", 1)
        .with("b", 2)
        .with("c", 3)
        .with("d", 4)
        .with("e", 5);

    tree.insert("v", 2).unwrap();
    tree.insert("w", -1).unwrap();

    assert_eq!(tree.len(), 7);
    assert_key_order(&tree, &["a", "b", "0", "c", "d", "1", "e"]);
    assert_path_eq(&tree, "0", "v");
    assert_path_eq(&tree, "1", "w");
}

#[test]
fn test_insert_before_key() {
    let mut tree = three_entries();
    tree.insert_before_key("new", "b").unwrap();

    assert_key_order(&tree, &["a", "0", "b", "c"]);
}

#[test]
fn test_insert_after_key() {
    let mut tree = three_entries();
    tree.insert_after_key("new", "b").unwrap();

    assert_key_order(&tree, &["a", "b", "0", "c"]);
}

#[test]
fn test_insert_anchor_key_not_found() {
    let mut tree = three_entries();

    let err = tree.insert_before_key("new", "missing").unwrap_err();
    assert_eq!(err.key(), Some("missing"));
    assert!(err.is_not_found());

    let err = tree.insert_after_key("new", "missing").unwrap_err();
    assert!(matches!(err, TreeError::KeyNotFound { .. }));
    assert_eq!(tree, three_entries());
}

#[test]
fn test_insert_after_value() {
    let mut tree = three_entries();
    tree.insert_after_value("new", &Value::Int(2)).unwrap();

    assert_key_order(&tree, &["a", "b", "0", "c"]);
    assert_path_eq(&tree, "0", "new");
}

#[test]
fn test_insert_after_value_uses_first_match() {
    let mut tree = Tree::new().with("x", 1).with("y", 1).with("z", 2);
    tree.insert_after_value("new", &Value::Int(1)).unwrap();

    assert_key_order(&tree, &["x", "0", "y", "z"]);
}

#[test]
fn test_insert_after_value_not_found() {
    let mut tree = three_entries();
    let err = tree.insert_after_value("new", &Value::Int(99)).unwrap_err();

    assert_eq!(err, TreeError::ValueNotFound);
    assert!(err.is_not_found());
    assert_eq!(tree, three_entries());
}

#[test]
fn test_replace_key_keeps_position_and_value() {
    let mut tree = three_entries();
    assert!(tree.replace_key("b", "renamed"));

    assert_key_order(&tree, &["a", "renamed", "c"]);
    assert_path_eq(&tree, "renamed", 2);
    assert!(!tree.contains("b"));
}

#[test]
fn test_replace_key_missing_is_noop() {
    let mut tree = three_entries();
    assert!(!tree.replace_key("missing", "renamed"));
    assert_eq!(tree, three_entries());
}

#[test]
fn test_prepend() {
    let mut tree = three_entries();
    tree.prepend("first", 0);

    assert_key_order(&tree, &["first", "a", "b", "c"]);
}

#[test]
fn test_prepend_existing_key_moves_to_front() {
    let mut tree = three_entries();
    tree.prepend("c", 30);

    assert_key_order(&tree, &["c", "a", "b"]);
    assert_path_eq(&tree, "c", 30);
}

#[test]
fn test_insert_into_empty_tree() {
    let mut tree = Tree::new();
    tree.insert("only", 0).unwrap();

    assert_key_order(&tree, &["0"]);
    assert!(tree.insert("bad", 2).is_err());
}
