//! Node classification and label escaping.
//!
//! Every visited node falls into exactly one [`NodeClass`], which fixes its
//! shape and picks its colors from the configured [`Palette`].

use crate::config::Palette;
use treedot_tree::{NodeKind, ParseNode};

/// Visual family of a rendered node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    /// Ordinary node labelled by its value
    Interior,
    /// Capture node labelled by its value
    Capture,
    /// Node without a value, labelled by its token
    Leaf,
}

impl NodeClass {
    /// Graphviz shape name for this class
    pub fn shape(self) -> &'static str {
        match self {
            NodeClass::Interior => "oval",
            NodeClass::Capture => "rectangle",
            NodeClass::Leaf => "rect",
        }
    }

    /// Resolve shape and colors against a palette
    pub fn style(self, palette: &Palette) -> NodeStyle<'_> {
        let (font_color, fill_color) = match self {
            NodeClass::Interior | NodeClass::Capture => {
                (&palette.interior_font, &palette.interior_fill)
            }
            NodeClass::Leaf => (&palette.leaf_font, &palette.leaf_fill),
        };
        NodeStyle {
            font_color,
            fill_color,
            shape: self.shape(),
        }
    }
}

/// Attributes of one node declaration, apart from its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle<'a> {
    /// Value of the `fontcolor` attribute
    pub font_color: &'a str,
    /// Value of the `fillcolor` attribute
    pub fill_color: &'a str,
    /// Value of the `shape` attribute
    pub shape: &'static str,
}

/// Classify a node.
///
/// A missing value wins over the capture kind: such a node is always
/// drawn as a leaf.
pub fn classify<N: ParseNode + ?Sized>(node: &N) -> NodeClass {
    match (node.value(), node.kind()) {
        (None, _) => NodeClass::Leaf,
        (Some(_), NodeKind::Capture) => NodeClass::Capture,
        (Some(_), NodeKind::Ordinary) => NodeClass::Interior,
    }
}

/// Text a node is labelled with before escaping: its value, else its token.
pub fn label_source<N: ParseNode + ?Sized>(node: &N) -> Option<&str> {
    node.value().or_else(|| node.token())
}

/// Escape a label for a quoted DOT attribute.
///
/// Only double quotes are rewritten (to `&quot;`). Backslashes, newlines and
/// everything else pass through untouched, which keeps output identical to
/// earlier releases but means such characters can still change how Graphviz
/// reads the label.
pub fn escape_label(label: &str) -> String {
    label.replace('"', "&quot;")
}
