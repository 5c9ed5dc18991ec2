//! Parse tree nodes: the read-only view visitors consume and an owned tree type.

use crate::errors::TreeResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a parse tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Plain grammar node
    #[default]
    Ordinary,
    /// Captured sub-match, e.g. the group of a regex terminal
    Capture,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Ordinary => write!(f, "ordinary"),
            NodeKind::Capture => write!(f, "capture"),
        }
    }
}

/// Read-only view of a parse tree node.
///
/// Interior nodes normally carry a `value` (the non-terminal they stand for)
/// and leaves carry a `token` (the matched text). Visitors prefer `value`
/// whenever it is present.
pub trait ParseNode {
    /// Category of this node
    fn kind(&self) -> NodeKind;

    /// Semantic label, if any
    fn value(&self) -> Option<&str>;

    /// Raw lexical text, if any
    fn token(&self) -> Option<&str>;

    /// Children in source order
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// Owned parse tree node.
///
/// Every field is optional in serialized form, so JSON fixtures only need
/// to spell out what they use:
///
/// ```rust
/// use treedot_tree::{NodeKind, ParseNode, TreeNode};
///
/// let tree = TreeNode::from_json(r#"{"value": "num", "children": [{"token": "5"}]}"#).unwrap();
/// assert_eq!(tree.kind(), NodeKind::Ordinary);
/// assert_eq!(tree.children()[0].token(), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeNode {
    /// Category of the node
    #[serde(default)]
    pub kind: NodeKind,
    /// Semantic label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Raw lexical text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Child nodes in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node of the given kind with no value, token or children.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            value: None,
            token: None,
            children: Vec::new(),
        }
    }

    /// Create an ordinary node labelled by a value.
    pub fn interior(value: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Ordinary);
        node.value = Some(value.into());
        node
    }

    /// Create a capture node labelled by a value.
    pub fn capture(value: impl Into<String>) -> Self {
        let mut node = Self::new(NodeKind::Capture);
        node.value = Some(value.into());
        node
    }

    /// Create a terminal node carrying only its token text.
    pub fn leaf(token: impl Into<String>) -> Self {
        Self::new(NodeKind::Ordinary).with_token(token)
    }

    /// Set the token text.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a child in place.
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }

    /// Load a tree from its JSON representation.
    ///
    /// Parsing goes through `serde_json`, which caps nesting at 128 JSON
    /// levels. Each tree level uses two of them (the node object and its
    /// `children` array), so documents deeper than about 60 tree levels are
    /// rejected with [`TreeError::Json`](crate::TreeError::Json). Build
    /// deeper trees in code; [`walk`](crate::walk) and dropping have no
    /// depth limit.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`](crate::TreeError::Json) if the document
    /// is not a valid node layout.
    pub fn from_json(json: &str) -> TreeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the tree to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::Json`](crate::TreeError::Json) if serialization
    /// fails.
    pub fn to_json(&self) -> TreeResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// Dropping frees children from a work list so deep chains do not recurse.
impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl ParseNode for TreeNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
