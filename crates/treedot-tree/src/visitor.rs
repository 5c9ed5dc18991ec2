//! Visitor traits and the depth-first traversal driver.

use crate::node::{ParseNode, TreeNode};
use log::trace;

/// Receives pre-order traversal events.
///
/// A driver calls `enter` when it reaches a node and `leave` when it
/// backtracks past that node's subtree. Calls are always balanced: every
/// `leave` closes the most recent unclosed `enter`.
pub trait ParseNodeVisitor {
    /// Called on pre-order descent into `node`
    fn enter<N: ParseNode + ?Sized>(&mut self, node: &N);

    /// Called after the subtree of the most recently entered node is done
    fn leave(&mut self);
}

/// A visitor that accumulates a textual document.
pub trait OutputFormatVisitor: ParseNodeVisitor {
    /// Return the document built so far. Must not change visitor state.
    fn render(&self) -> String;
}

/// Walk `root` depth-first in pre-order, driving `visitor`.
///
/// The traversal keeps its own stack of child iterators instead of
/// recursing, so arbitrarily deep trees are safe to visit. Each node gets
/// exactly one `enter` and one `leave`.
pub fn walk<N, V>(root: &N, visitor: &mut V)
where
    N: ParseNode,
    V: ParseNodeVisitor,
{
    visitor.enter(root);
    let mut pending = vec![root.children().iter()];
    while let Some(children) = pending.last_mut() {
        match children.next() {
            Some(child) => {
                visitor.enter(child);
                pending.push(child.children().iter());
            }
            None => {
                pending.pop();
                visitor.leave();
            }
        }
    }
    trace!("Walk complete");
}

impl TreeNode {
    /// Drive `visitor` over this subtree. Same as [`walk`].
    pub fn accept<V: ParseNodeVisitor>(&self, visitor: &mut V) {
        walk(self, visitor);
    }
}
