//! Export module for handing parse trees to external tools.
//!
//! - **DOT**: Graphviz visualization through [`GraphvizVisitor`]
//! - **Style**: node classification and label escaping shared by exporters

pub mod dot;
pub mod style;

pub use dot::{to_dot, to_dot_with, GraphvizVisitor, NodeId};
pub use style::{classify, escape_label, label_source, NodeClass, NodeStyle};
