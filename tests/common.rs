//! Common test utilities for building pipelines and catalog fixtures.
use promptflow::catalog::{Author, MemoryStore, NewCollection, NewVersion, OutputType, VersionOutput};
use promptflow::prelude::*;

/// Builds a graph by adding `kinds` in order with the default single-column layout.
#[allow(dead_code)]
pub fn graph_with(kinds: &[NodeKind]) -> PipelineGraph {
    let mut graph = PipelineGraph::new();
    for kind in kinds {
        graph.add_node(*kind);
    }
    graph
}

/// A three-step text → image → video pipeline.
///
/// Node 1 has a model and prompt, node 2 a negative prompt, node 3 no fields.
#[allow(dead_code)]
pub fn create_media_pipeline() -> PipelineGraph {
    let mut graph = graph_with(&[
        NodeKind::TextGeneration,
        NodeKind::ImageGeneration,
        NodeKind::VideoGeneration,
    ]);
    graph
        .update_node_field("1", NodeField::Model, "GPT-4o")
        .expect("GPT-4o is a text model");
    graph
        .update_node_field("1", NodeField::Input, "Describe a lighthouse at dusk")
        .expect("node 1 exists");
    graph
        .update_node_field("2", NodeField::NegativePrompt, "blurry")
        .expect("node 2 exists");
    graph
}

#[allow(dead_code)]
pub fn create_store() -> MemoryStore {
    MemoryStore::new(Author {
        name: "TechLead".to_string(),
        email: "lead@example.com".to_string(),
    })
}

#[allow(dead_code)]
pub fn new_collection(name: &str) -> NewCollection {
    NewCollection {
        name: name.to_string(),
        icon: "⚡".to_string(),
        model: "GPT-4-Turbo".to_string(),
        description: Some("Code and documentation generation".to_string()),
        is_public: true,
        fork_count: 0,
        star_count: 0,
        tags: vec!["development".to_string()],
    }
}

#[allow(dead_code)]
pub fn new_version(variation_id: &str, note: &str) -> NewVersion {
    NewVersion {
        variation_id: variation_id.to_string(),
        note: note.to_string(),
        prompt: "Write a React component for a login form".to_string(),
        output: VersionOutput {
            kind: OutputType::Code,
            content: "export function Login() {}".to_string(),
        },
        prompt_tokens: 12,
        output_tokens: 48,
        metadata: None,
        tags: Vec::new(),
    }
}
