//! # promptflow - Pipeline Graph Model and Code Export
//!
//! **promptflow** is the core of a visual pipeline editor for generative-AI prompts. A
//! pipeline is a directed graph of typed nodes (text, image and video generation, LLM,
//! function and API calls) connected by data-flow edges. The crate maintains that graph for
//! one editing session and turns it into a copyable code snippet on demand.
//!
//! ## Core Workflow
//!
//! 1.  **Create a session**: Build a [`PipelineGraph`](graph::PipelineGraph), optionally from an
//!     [`EditorConfig`](config::EditorConfig).
//! 2.  **Edit**: Add nodes (each new node is placed on the grid and chained to the previous
//!     one), draw extra connections, and edit node fields.
//! 3.  **Resize**: Tell the graph the viewport width; every node is re-placed.
//! 4.  **Export**: Render the snapshot for a target language with [`generate`](export::generate).
//!
//! Pipelines are never executed by this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use promptflow::prelude::*;
//!
//! let mut graph = PipelineGraph::new();
//! graph.add_node(NodeKind::LlmCall);
//! graph.add_node(NodeKind::ApiCall);
//! graph.update_node_field("1", NodeField::Model, "GPT-4").unwrap();
//! graph.update_node_field("1", NodeField::Input, "Summarise the ticket").unwrap();
//!
//! assert_eq!(graph.edges()[0].id, "e1-2");
//!
//! let code = generate(graph.nodes(), graph.edges(), ExportTarget::JavaScript);
//! assert!(code.contains("const nodes = ["));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod prelude;
pub mod registry;
