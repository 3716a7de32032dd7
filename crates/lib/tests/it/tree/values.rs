//! Value conversions, sequence operations, and display formatting.

use acorn::{List, Tree, Value, tree::TreeError};

#[test]
fn test_value_conversions_in() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(42i64), Value::Int(42));
    assert_eq!(Value::from(42i32), Value::Int(42));
    assert_eq!(Value::from(1.5f64), Value::Float(1.5));
    assert_eq!(Value::from("text"), Value::Text("text".to_string()));
    assert_eq!(Value::from(Some(1)), Value::Int(1));
    assert_eq!(Value::from(None::<i64>), Value::Null);
}

#[test]
fn test_value_conversions_out() {
    let value = Value::Int(42);
    assert_eq!(i64::try_from(&value), Ok(42));
    assert_eq!(f64::try_from(&value), Ok(42.0));

    let err = bool::try_from(&value).unwrap_err();
    assert_eq!(
        err,
        TreeError::TypeMismatch {
            expected: "bool".to_string(),
            actual: "int".to_string()
        }
    );
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(1).as_bool(), None);
    assert_eq!(Value::Text("x".to_string()).as_text(), Some("x"));
    assert!(Value::Null.is_null());
    assert!(Value::Map(Tree::new()).is_branch());
    assert!(Value::Int(0).is_leaf());
}

#[test]
fn test_list_splice_insert() {
    let mut list = List::from(vec![1, 2, 3]);

    list.insert(1, 10).unwrap();
    let items: Vec<i64> = list.iter().filter_map(Value::as_int).collect();
    assert_eq!(items, [1, 10, 2, 3]);

    list.insert(-1, 20).unwrap();
    let items: Vec<i64> = list.iter().filter_map(Value::as_int).collect();
    assert_eq!(items, [1, 10, 2, 20, 3]);
}

#[test]
fn test_list_insert_out_of_range() {
    let mut list = List::from(vec![1, 2]);

    let err = list.insert(3, 9).unwrap_err();
    assert_eq!(err, TreeError::OutOfRange { position: 3, len: 2 });
    let err = list.insert(-3, 9).unwrap_err();
    assert_eq!(err, TreeError::OutOfRange { position: -3, len: 2 });
    assert_eq!(list.len(), 2);
}

#[test]
fn test_list_in_tree_mutation() {
    let mut tree = Tree::new().with("items", vec![1, 2, 3]);

    if let Some(Value::List(items)) = tree.get_mut("items") {
        items.push(4);
    }
    assert_eq!(tree.get("items.3"), Some(&Value::Int(4)));

    if let Some(slot) = tree.get_mut("items.0") {
        *slot = Value::Int(100);
    }
    assert_eq!(tree.get("items.0"), Some(&Value::Int(100)));
}

#[test]
fn test_nested_value_display() {
    let tree = Tree::new()
        .with("name", "app")
        .with("nested.flag", true)
        .with("items", vec![1, 2]);

    // Display renders text unquoted; quoting is serialization's job
    let rendered = tree.to_string();
    assert_eq!(rendered, "{name: app, nested: {flag: true}, items: [1, 2]}");
}

#[test]
fn test_json_serialization_shape() {
    let tree = Tree::new()
        .with("name", "app")
        .with("count", 2)
        .with("items", vec!["a", "b"])
        .with("empty", Value::Null);

    let json = tree.to_json_string();
    assert_eq!(
        json,
        r#"{"name":"app","count":2,"items":["a","b"],"empty":null}"#
    );
}

#[test]
fn test_json_deserialization_types() {
    let tree: Tree = r#"{"b":true,"i":3,"f":1.5,"s":"x","l":[1],"m":{"k":null}}"#
        .parse()
        .unwrap();

    assert!(tree.get("b").is_some_and(|v| v.as_bool() == Some(true)));
    assert_eq!(tree.get("i"), Some(&Value::Int(3)));
    assert_eq!(tree.get("f"), Some(&Value::Float(1.5)));
    assert_eq!(tree.get("s"), Some(&Value::Text("x".to_string())));
    assert_eq!(tree.get("l.0"), Some(&Value::Int(1)));
    assert_eq!(tree.get("m.k"), Some(&Value::Null));
}

#[test]
fn test_value_equality_with_primitives() {
    let value = Value::Int(5);
    assert_eq!(value, 5);
    assert_eq!(5, value);

    let value = Value::Text("hi".to_string());
    assert_eq!(value, "hi");
    assert_ne!(value, "other");
}
