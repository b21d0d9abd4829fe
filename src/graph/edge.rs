use serde::{Deserialize, Serialize};

/// Stroke styling for an edge. Carries no pipeline semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: String,
    pub stroke_width: u32,
    pub stroke_dasharray: String,
    pub animation: String,
}

impl Default for EdgeStyle {
    /// Light grey, dashed, slowly animated.
    fn default() -> Self {
        Self {
            stroke: "#a0a0a0".to_string(),
            stroke_width: 2,
            stroke_dasharray: "5, 5".to_string(),
            animation: "dashdraw 30s linear infinite".to_string(),
        }
    }
}

/// A directed data-flow connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub style: EdgeStyle,
}

impl Edge {
    /// Builds an animated edge whose id is derived from the ordered endpoint pair.
    pub fn between(source: &str, target: &str) -> Self {
        Self {
            id: Self::id_for(source, target),
            source: source.to_string(),
            target: target.to_string(),
            animated: true,
            style: EdgeStyle::default(),
        }
    }

    pub fn id_for(source: &str, target: &str) -> String {
        format!("e{}-{}", source, target)
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
