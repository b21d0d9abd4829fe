//! Renders a pipeline snapshot as a source-code snippet.
//!
//! The export is a structural re-encoding: nodes and edges are embedded as an inline JSON
//! literal that is valid in the target language, followed by a one-line usage comment. Node
//! kinds and fields are not interpreted.

use crate::error::ExportError;
use crate::graph::{Edge, Node};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

mod exporter;
mod targets;

pub use exporter::{Exporter, ExporterBuilder};
pub use targets::{JavaScriptExporter, PythonExporter};

/// Returned by [`generate_for`] when the requested language is not supported.
pub const UNSUPPORTED_TARGET: &str = "Unsupported language";

/// Defines the contract for rendering a pipeline into one target language.
pub trait CodeExporter: Send + Sync {
    /// The name this exporter is looked up by.
    fn target_name(&self) -> &str;
    fn render(&self, nodes: &[Node], edges: &[Edge]) -> Result<String, ExportError>;
}

/// The built-in export languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    #[default]
    JavaScript,
    Python,
}

impl ExportTarget {
    pub const ALL: [ExportTarget; 2] = [ExportTarget::JavaScript, ExportTarget::Python];

    pub fn name(self) -> &'static str {
        match self {
            ExportTarget::JavaScript => "javascript",
            ExportTarget::Python => "python",
        }
    }

    pub fn exporter(self) -> Box<dyn CodeExporter> {
        match self {
            ExportTarget::JavaScript => Box::new(JavaScriptExporter),
            ExportTarget::Python => Box::new(PythonExporter),
        }
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportTarget {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportTarget::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ExportError::UnknownTarget(s.to_string()))
    }
}

/// Renders `nodes` and `edges` for a built-in target.
///
/// Pure and deterministic: the same snapshot and target always yield the same text.
pub fn generate(nodes: &[Node], edges: &[Edge], target: ExportTarget) -> String {
    target.exporter().render(nodes, edges).unwrap_or_else(|e| {
        warn!(export_target = %target, error = %e, "Pipeline export failed");
        e.to_string()
    })
}

/// Like [`generate`], but takes the target by name. Unknown names yield
/// [`UNSUPPORTED_TARGET`] instead of an error.
pub fn generate_for(nodes: &[Node], edges: &[Edge], target: &str) -> String {
    match target.parse::<ExportTarget>() {
        Ok(target) => generate(nodes, edges, target),
        Err(_) => UNSUPPORTED_TARGET.to_string(),
    }
}

/// Two-space indented JSON, matching what browser tooling prints.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    serde_json::to_string_pretty(value).map_err(|e| ExportError::Serialization(e.to_string()))
}
