//! treedot tree API
//!
//! Shared node abstraction and traversal driver for treedot output visitors.
//!
//! This crate defines:
//!
//! - **ParseNode trait**: What a visitor may read from a parse tree node
//! - **TreeNode**: An owned, serde-loadable tree implementing `ParseNode`
//! - **Visitor traits**: `ParseNodeVisitor` and `OutputFormatVisitor`
//! - **walk**: Depth-first pre-order driver issuing balanced enter/leave calls
//! - **Error handling**: Errors raised while loading trees
//!
//! # Example
//!
//! ```rust
//! use treedot_tree::{walk, ParseNode, ParseNodeVisitor, TreeNode};
//!
//! #[derive(Default)]
//! struct Depth {
//!     current: usize,
//!     max: usize,
//! }
//!
//! impl ParseNodeVisitor for Depth {
//!     fn enter<N: ParseNode + ?Sized>(&mut self, _node: &N) {
//!         self.current += 1;
//!         self.max = self.max.max(self.current);
//!     }
//!
//!     fn leave(&mut self) {
//!         self.current -= 1;
//!     }
//! }
//!
//! let tree = TreeNode::interior("expr")
//!     .with_child(TreeNode::leaf("1"))
//!     .with_child(TreeNode::interior("term").with_child(TreeNode::leaf("2")));
//!
//! let mut depth = Depth::default();
//! walk(&tree, &mut depth);
//! assert_eq!(depth.max, 3);
//! ```

pub mod errors;
pub mod node;
pub mod visitor;

// Re-export commonly used types
pub use errors::{TreeError, TreeResult};
pub use node::{NodeKind, ParseNode, TreeNode};
pub use visitor::{walk, OutputFormatVisitor, ParseNodeVisitor};
