//! DOT format export for Graphviz visualization.
//!
//! [`GraphvizVisitor`] turns a stream of pre-order `enter`/`leave` events
//! into a Graphviz digraph. Nodes are numbered in arrival order starting at
//! zero, and each non-root node gets one `parent -> child` edge written just
//! before its own declaration:
//!
//! ```text
//! # File auto-generated by Bullwinkle
//!
//! digraph G {
//!   0 [fontcolor="white",style="filled",fillcolor="blue",shape="oval",label="expr"];
//! 0 -> 1;
//!   1 [fontcolor="black",style="filled",fillcolor="white",shape="rect",label="+"];
//! }
//! ```
//!
//! A visitor holds the state of a single conversion and takes `&mut self`
//! for every event; use one instance per tree.

use super::style::{classify, escape_label, label_source};
use crate::config::GraphvizConfig;
use crate::error::{DotError, Result};
use log::{debug, trace};
use treedot_tree::{walk, OutputFormatVisitor, ParseNode, ParseNodeVisitor};

/// Identifier assigned to a node in visitation order.
pub type NodeId = usize;

/// Visitor that builds a Graphviz DOT document from a parse tree.
#[derive(Debug, Clone)]
pub struct GraphvizVisitor {
    config: GraphvizConfig,
    /// Ids of the nodes on the path from the root to the current parent
    parents: Vec<NodeId>,
    next_id: NodeId,
    /// Edge and node declarations in emission order
    output: String,
}

impl GraphvizVisitor {
    /// Create a visitor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphvizConfig::default())
    }

    /// Create a visitor with a custom configuration.
    pub fn with_config(config: GraphvizConfig) -> Self {
        debug!(
            "Creating Graphviz visitor: graph={}, tool={}",
            config.graph_name, config.tool_name
        );
        Self {
            config,
            parents: Vec::new(),
            next_id: 0,
            output: String::new(),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &GraphvizConfig {
        &self.config
    }

    /// Number of nodes entered so far.
    pub fn node_count(&self) -> usize {
        self.next_id
    }

    /// Number of entered nodes not yet left.
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    /// Consume the visitor and return the finished document.
    ///
    /// # Errors
    ///
    /// Returns [`DotError::IncompleteTraversal`] if some entered nodes were
    /// never left.
    pub fn finish(self) -> Result<String> {
        if !self.parents.is_empty() {
            return Err(DotError::IncompleteTraversal {
                open: self.parents.len(),
            });
        }
        Ok(self.render())
    }

    fn next_node_id(&mut self) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for GraphvizVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseNodeVisitor for GraphvizVisitor {
    fn enter<N: ParseNode + ?Sized>(&mut self, node: &N) {
        let id = self.next_node_id();
        if let Some(parent) = self.parents.last() {
            self.output.push_str(&format!("{parent} -> {id};\n"));
        }

        let class = classify(node);
        let style = class.style(&self.config.palette);
        let label = escape_label(label_source(node).unwrap_or(self.config.missing_label.as_str()));
        trace!("Entering node {id}: kind={}, class={class:?}", node.kind());

        self.output.push_str(&format!(
            "  {id} [fontcolor=\"{}\",style=\"filled\",fillcolor=\"{}\",shape=\"{}\",label=\"{label}\"];\n",
            style.font_color, style.fill_color, style.shape
        ));
        self.parents.push(id);
    }

    /// # Panics
    ///
    /// Panics if no entered node is left to close. Drivers must issue
    /// balanced calls; an extra `leave` is a bug in the caller.
    fn leave(&mut self) {
        match self.parents.pop() {
            Some(id) => trace!("Leaving node {id}"),
            None => panic!(
                "GraphvizVisitor::leave called with no entered node (unbalanced traversal)"
            ),
        }
    }
}

impl OutputFormatVisitor for GraphvizVisitor {
    fn render(&self) -> String {
        debug!("Rendering DOT document with {} nodes", self.next_id);
        format!(
            "# File auto-generated by {}\n\ndigraph {} {{\n{}}}",
            self.config.tool_name, self.config.graph_name, self.output
        )
    }
}

/// Render a parse tree to Graphviz DOT with the default configuration.
pub fn to_dot<N: ParseNode>(root: &N) -> String {
    to_dot_with(root, GraphvizConfig::default())
}

/// Render a parse tree to Graphviz DOT with a custom configuration.
pub fn to_dot_with<N: ParseNode>(root: &N, config: GraphvizConfig) -> String {
    let mut visitor = GraphvizVisitor::with_config(config);
    walk(root, &mut visitor);
    visitor.render()
}
