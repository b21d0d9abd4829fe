//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to build, edit and export a pipeline.
//!
//! # Example
//!
//! ```rust,no_run
//! use promptflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = EditorConfig::from_file("path/to/editor.json")?;
//! let mut graph = config.new_graph();
//! graph.add_node(NodeKind::TextGeneration);
//! graph.add_node(NodeKind::ImageGeneration);
//!
//! println!("{}", generate(graph.nodes(), graph.edges(), config.default_target));
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{
    Edge, GraphSnapshot, LayoutConfig, Node, NodeField, PipelineGraph, Position,
};
pub use crate::registry::{NodeKind, NodeKindConfig};

// Export
pub use crate::export::{
    CodeExporter, ExportTarget, Exporter, UNSUPPORTED_TARGET, generate, generate_for,
};

// Configuration
pub use crate::config::EditorConfig;

// Error types
pub use crate::error::{ExportError, GraphError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
