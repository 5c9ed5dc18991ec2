//! Unit tests for GraphvizConfig defaults, builders and JSON loading.

use treedot::{to_dot_with, DotError, GraphvizConfig, Palette, TreeNode};

#[test]
fn test_default_config() {
    let config = GraphvizConfig::default();

    assert_eq!(config.tool_name, "Bullwinkle");
    assert_eq!(config.graph_name, "G");
    assert_eq!(config.missing_label, "null");
    assert_eq!(config.palette.interior_fill, "blue");
    assert_eq!(config.palette.interior_font, "white");
    assert_eq!(config.palette.leaf_fill, "white");
    assert_eq!(config.palette.leaf_font, "black");
}

#[test]
fn test_builder_overrides() {
    let config = GraphvizConfig::default()
        .with_tool_name("treedot")
        .with_graph_name("parse")
        .with_missing_label("?");

    let dot = to_dot_with(&TreeNode::default(), config);

    assert!(dot.starts_with("# File auto-generated by treedot\n\ndigraph parse {\n"));
    assert!(dot.contains("label=\"?\""));
}

#[test]
fn test_custom_palette() {
    let palette = Palette {
        interior_fill: "#90CAF9".to_string(),
        interior_font: "black".to_string(),
        leaf_fill: "#E0E0E0".to_string(),
        leaf_font: "#333333".to_string(),
    };
    let tree = TreeNode::interior("expr").with_child(TreeNode::leaf("1"));

    let dot = to_dot_with(&tree, GraphvizConfig::default().with_palette(palette));

    assert!(dot.contains("  0 [fontcolor=\"black\",style=\"filled\",fillcolor=\"#90CAF9\",shape=\"oval\""));
    assert!(dot.contains("  1 [fontcolor=\"#333333\",style=\"filled\",fillcolor=\"#E0E0E0\",shape=\"rect\""));
}

#[test]
fn test_from_json_partial() {
    let config = GraphvizConfig::from_json(
        r#"{"tool_name": "mytool", "palette": {"interior_fill": "red"}}"#,
    )
    .unwrap();

    assert_eq!(config.tool_name, "mytool");
    assert_eq!(config.graph_name, "G");
    assert_eq!(config.palette.interior_fill, "red");
    assert_eq!(config.palette.leaf_fill, "white");
}

#[test]
fn test_from_json_empty_is_default() {
    assert_eq!(GraphvizConfig::from_json("{}").unwrap(), GraphvizConfig::default());
}

#[test]
fn test_from_json_invalid() {
    let err = GraphvizConfig::from_json(r#"{"tool_name": 3}"#).unwrap_err();
    assert!(matches!(err, DotError::Config { .. }));
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = GraphvizConfig::default().with_graph_name("T");
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(GraphvizConfig::from_json(&json).unwrap(), config);
}
