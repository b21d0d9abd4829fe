use crate::registry::NodeKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A point on the editor canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered size of a node. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSize {
    pub width: f64,
    pub height: f64,
}

impl Default for NodeSize {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
        }
    }
}

/// The fields a node editor exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeField {
    Model,
    Input,
    NegativePrompt,
}

impl NodeField {
    pub const ALL: [NodeField; 3] = [NodeField::Model, NodeField::Input, NodeField::NegativePrompt];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeField::Model => "model",
            NodeField::Input => "input",
            NodeField::NegativePrompt => "negativePrompt",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for NodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single pipeline step.
///
/// Serializes in the shape the canvas library consumes: `kind` becomes `type`, the field
/// map becomes `data` and the size becomes `style`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    #[serde(rename = "data", default)]
    pub fields: BTreeMap<String, String>,
    #[serde(rename = "style", default)]
    pub size: NodeSize,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, position: Position, size: NodeSize) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            fields: BTreeMap::new(),
            size,
        }
    }

    pub fn field(&self, field: NodeField) -> Option<&str> {
        self.fields.get(field.as_str()).map(String::as_str)
    }

    /// The selected model, falling back to the first model of the node's kind.
    pub fn model(&self) -> &str {
        self.field(NodeField::Model)
            .unwrap_or_else(|| self.kind.default_model())
    }

    pub fn input(&self) -> &str {
        self.field(NodeField::Input).unwrap_or_default()
    }

    pub fn negative_prompt(&self) -> &str {
        self.field(NodeField::NegativePrompt).unwrap_or_default()
    }
}
