//! # treedot
//!
//! Renders parse trees as Graphviz DOT documents.
//!
//! ## Architecture
//!
//! ```text
//! Parse tree (any ParseNode implementation)
//!     ↓
//! Traversal driver (treedot_tree::walk, or your own)
//!     ↓  enter / leave
//! GraphvizVisitor (ids, ancestry stack, styling, escaping)
//!     ↓
//! render() → DOT text
//! ```
//!
//! The crate performs no I/O; callers decide where the document goes.
//!
//! ## Example
//!
//! ```rust
//! use treedot::{to_dot, TreeNode};
//!
//! let tree = TreeNode::interior("expr")
//!     .with_child(TreeNode::capture("num:5"))
//!     .with_child(TreeNode::leaf("+"));
//!
//! let dot = to_dot(&tree);
//! assert!(dot.starts_with("# File auto-generated by Bullwinkle\n\ndigraph G {\n"));
//! assert!(dot.contains("0 -> 2;\n"));
//! ```
//!
//! ## Known limitation
//!
//! Labels only have double quotes escaped (as `&quot;`). Backslashes and
//! newlines are written verbatim, matching the output of earlier releases.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;

// Re-export main types
pub use config::{GraphvizConfig, Palette};
pub use error::{DotError, Result};
pub use export::{
    classify, escape_label, to_dot, to_dot_with, GraphvizVisitor, NodeClass, NodeId, NodeStyle,
};
pub use treedot_tree::{
    walk, NodeKind, OutputFormatVisitor, ParseNode, ParseNodeVisitor, TreeNode,
};
