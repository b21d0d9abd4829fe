use crate::registry::NodeKind;
use thiserror::Error;

/// Errors raised by structural edits on a [`PipelineGraph`](crate::graph::PipelineGraph).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node '{id}' not found in the pipeline")]
    NodeNotFound { id: String },

    #[error("Model '{model}' is not available for {kind} nodes")]
    UnknownModel { kind: NodeKind, model: String },

    #[error("Node id '{id}' appears more than once")]
    DuplicateNode { id: String },
}

/// Errors that can occur while rendering a pipeline snapshot into source text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error("Failed to serialize pipeline: {0}")]
    Serialization(String),

    #[error("No exporter registered for target '{0}'")]
    UnknownTarget(String),
}

/// Errors surfaced by a [`PromptStore`](crate::catalog::PromptStore).
///
/// The display string is the message shown to the user; underlying causes are logged, not
/// forwarded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Collection '{0}' does not exist")]
    CollectionNotFound(String),

    #[error("{0}")]
    CreateFailed(&'static str),

    #[error("Variation '{0}' does not exist")]
    VariationNotFound(String),
}

/// Errors that can occur when loading an [`EditorConfig`](crate::config::EditorConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid layout setting: {0}")]
    Invalid(String),
}

/// Error for a node kind name that is not one of the six known kinds.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown node kind '{0}'")]
pub struct NodeKindParseError(pub String);
