//! Unit tests for TreeNode construction and JSON loading.

use treedot_tree::{NodeKind, ParseNode, TreeError, TreeNode};

#[test]
fn test_from_json_defaults_missing_fields() {
    let tree = TreeNode::from_json(r#"{"value": "expr"}"#).unwrap();

    assert_eq!(tree.kind(), NodeKind::Ordinary);
    assert_eq!(tree.value(), Some("expr"));
    assert_eq!(tree.token(), None);
    assert!(tree.is_leaf());
}

#[test]
fn test_from_json_nested() {
    let json = r#"{
        "value": "expr",
        "children": [
            {"kind": "capture", "value": "num:5"},
            {"token": "+"}
        ]
    }"#;

    let tree = TreeNode::from_json(json).unwrap();

    let expected = TreeNode::interior("expr")
        .with_child(TreeNode::capture("num:5"))
        .with_child(TreeNode::leaf("+"));
    assert_eq!(tree, expected);
    assert_eq!(tree.node_count(), 3);
}

#[test]
fn test_from_json_empty_object_is_blank_node() {
    let tree = TreeNode::from_json("{}").unwrap();
    assert_eq!(tree, TreeNode::new(NodeKind::Ordinary));
}

#[test]
fn test_from_json_rejects_unknown_kind() {
    let result = TreeNode::from_json(r#"{"kind": "regex"}"#);
    assert!(matches!(result, Err(TreeError::Json(_))));
}

#[test]
fn test_from_json_rejects_malformed_document() {
    let err = TreeNode::from_json("{\"value\": ").unwrap_err();
    assert!(err.to_string().starts_with("Tree JSON error:"));
}

#[test]
fn test_to_json_omits_absent_fields() {
    let json = TreeNode::leaf("foo").to_json().unwrap();
    assert_eq!(json, r#"{"kind":"ordinary","token":"foo"}"#);
}

#[test]
fn test_add_child_in_place() {
    let mut root = TreeNode::interior("list");
    for item in ["a", "b", "c"] {
        root.add_child(TreeNode::leaf(item));
    }

    assert_eq!(root.children().len(), 3);
    assert_eq!(root.children()[2].token(), Some("c"));
}

#[test]
fn test_value_and_token_together() {
    let node = TreeNode::interior("ident").with_token("x");
    assert_eq!(node.value(), Some("ident"));
    assert_eq!(node.token(), Some("x"));
}

// `levels` nested nodes, the innermost one a token leaf
fn nested_json(levels: usize) -> String {
    let mut json = r#"{"value":"n","children":["#.repeat(levels - 1);
    json.push_str(r#"{"token":"x"}"#);
    json.push_str(&"]}".repeat(levels - 1));
    json
}

#[test]
fn test_from_json_loads_moderately_deep_tree() {
    let tree = TreeNode::from_json(&nested_json(50)).unwrap();
    assert_eq!(tree.node_count(), 50);
}

#[test]
fn test_from_json_rejects_tree_past_nesting_limit() {
    let err = TreeNode::from_json(&nested_json(200)).unwrap_err();
    assert!(matches!(err, TreeError::Json(_)));
    assert!(err.to_string().contains("recursion limit exceeded"));
}
