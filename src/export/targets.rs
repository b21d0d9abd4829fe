use super::{CodeExporter, to_pretty_json};
use crate::error::ExportError;
use crate::graph::{Edge, Node};

const USAGE_HINT: &str = "Use these nodes and edges with your ReactFlow component";

/// Emits `const nodes = [...]; const edges = [...];`.
pub struct JavaScriptExporter;

impl CodeExporter for JavaScriptExporter {
    fn target_name(&self) -> &str {
        "javascript"
    }

    fn render(&self, nodes: &[Node], edges: &[Edge]) -> Result<String, ExportError> {
        let nodes_json = to_pretty_json(nodes)?;
        let edges_json = to_pretty_json(edges)?;
        Ok(format!(
            "\nconst nodes = {};\nconst edges = {};\n\n// {}\n",
            nodes_json, edges_json, USAGE_HINT
        ))
    }
}

/// Emits `json.loads(r'''...''')` calls for nodes and edges.
pub struct PythonExporter;

impl PythonExporter {
    /// Single quotes only ever appear inside JSON strings, so the `\u0027` escape keeps the
    /// JSON equivalent while guaranteeing the raw triple-quoted literal cannot close early.
    fn escape_for_raw_literal(json: &str) -> String {
        json.replace('\'', "\\u0027")
    }
}

impl CodeExporter for PythonExporter {
    fn target_name(&self) -> &str {
        "python"
    }

    fn render(&self, nodes: &[Node], edges: &[Edge]) -> Result<String, ExportError> {
        let nodes_json = Self::escape_for_raw_literal(&to_pretty_json(nodes)?);
        let edges_json = Self::escape_for_raw_literal(&to_pretty_json(edges)?);
        Ok(format!(
            "\nimport json\n\nnodes = json.loads(r'''{}''')\nedges = json.loads(r'''{}''')\n\n# {}\n",
            nodes_json, edges_json, USAGE_HINT
        ))
    }
}
