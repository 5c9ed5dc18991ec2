//! Output configuration for the Graphviz exporter.

use crate::error::{DotError, Result};
use serde::{Deserialize, Serialize};

/// Colors used for the two families of rendered nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill color of nodes labelled by their value
    pub interior_fill: String,

    /// Font color of nodes labelled by their value
    pub interior_font: String,

    /// Fill color of token-labelled (terminal) nodes
    pub leaf_fill: String,

    /// Font color of token-labelled (terminal) nodes
    pub leaf_font: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            interior_fill: "blue".to_string(),
            interior_font: "white".to_string(),
            leaf_fill: "white".to_string(),
            leaf_font: "black".to_string(),
        }
    }
}

/// Configuration for Graphviz output
///
/// The default reproduces the historical output byte for byte. Every field
/// may be omitted when loading from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphvizConfig {
    /// Tool named in the `# File auto-generated by ...` preamble
    pub tool_name: String,

    /// Identifier of the emitted digraph
    pub graph_name: String,

    /// Label used for nodes that carry neither a value nor a token
    pub missing_label: String,

    /// Node colors
    pub palette: Palette,
}

impl Default for GraphvizConfig {
    fn default() -> Self {
        Self {
            tool_name: "Bullwinkle".to_string(),
            graph_name: "G".to_string(),
            missing_label: "null".to_string(),
            palette: Palette::default(),
        }
    }
}

impl GraphvizConfig {
    /// Load a config from JSON, filling omitted fields with defaults
    ///
    /// # Errors
    ///
    /// Returns [`DotError::Config`] if the document cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DotError::config("Failed to parse Graphviz config", e))
    }

    /// Set the tool named in the preamble
    pub fn with_tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self
    }

    /// Set the digraph identifier
    pub fn with_graph_name(mut self, name: impl Into<String>) -> Self {
        self.graph_name = name.into();
        self
    }

    /// Set the placeholder label for nodes without value or token
    pub fn with_missing_label(mut self, label: impl Into<String>) -> Self {
        self.missing_label = label.into();
        self
    }

    /// Replace the palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
