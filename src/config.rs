use crate::error::ConfigError;
use crate::export::ExportTarget;
use crate::graph::{LayoutConfig, PipelineGraph};
use serde::{Deserialize, Serialize};
use std::fs;

/// Editor settings, loadable from a JSON file. Missing keys fall back to the defaults.
///
/// ```json
/// {
///   "layout": { "node_width": 300, "node_height": 300 },
///   "viewport_width": 1280,
///   "default_target": "python"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub layout: LayoutConfig,
    pub viewport_width: Option<f64>,
    pub default_target: ExportTarget,
}

impl EditorConfig {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses a config and rejects layout values that would stack or flip nodes.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.layout.validate()?;
        Ok(config)
    }

    /// An empty pipeline using this configuration's layout.
    pub fn new_graph(&self) -> PipelineGraph {
        let builder = PipelineGraph::builder().layout(self.layout);
        match self.viewport_width {
            Some(width) => builder.viewport_width(width).build(),
            None => builder.build(),
        }
    }
}
