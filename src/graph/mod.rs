//! The editable pipeline graph for one editing session.
//!
//! A [`PipelineGraph`] owns the node and edge collections. Structural edits go through its
//! methods so that ids stay unique, new nodes are placed on the grid and chained to the
//! previous node, and edges never point at nodes that were not present when they were made.

use crate::error::GraphError;
use crate::registry::NodeKind;
use ahash::AHashSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use tracing::{debug, trace, warn};

mod edge;
pub mod layout;
mod node;

pub use edge::{Edge, EdgeStyle};
pub use layout::{GridLayout, LayoutConfig};
pub use node::{Node, NodeField, NodeSize, Position};

/// A point-in-time copy of a pipeline, in the shape exported to code and saved to disk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Load a snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    /// Write the snapshot to a JSON file.
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PipelineGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    layout: GridLayout,
    next_id: u64,
}

#[derive(Debug, Clone)]
pub struct PipelineGraphBuilder {
    layout: LayoutConfig,
    viewport_width: Option<f64>,
}

impl PipelineGraphBuilder {
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            viewport_width: None,
        }
    }
    pub fn layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }
    pub fn viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = Some(width);
        self
    }
    pub fn build(self) -> PipelineGraph {
        let layout = match self.viewport_width {
            Some(width) => GridLayout::for_width(self.layout, width),
            None => GridLayout::new(self.layout),
        };
        PipelineGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            layout,
            next_id: 0,
        }
    }
}

impl Default for PipelineGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for PipelineGraph {
    fn default() -> Self {
        PipelineGraphBuilder::new().build()
    }
}

impl PipelineGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> PipelineGraphBuilder {
        PipelineGraphBuilder::new()
    }

    /// Restores an editing session from a saved snapshot.
    ///
    /// Positions are kept as saved. Repeated node ids are rejected. The id counter resumes
    /// after the highest numeric id named by any node or edge endpoint, so new nodes never
    /// pick up an edge that was left dangling.
    pub fn from_snapshot(
        snapshot: GraphSnapshot,
        layout: GridLayout,
    ) -> Result<Self, GraphError> {
        let mut seen = AHashSet::with_capacity(snapshot.nodes.len());
        if let Some(node) = snapshot.nodes.iter().find(|n| !seen.insert(n.id.as_str())) {
            warn!(id = %node.id, "Restored pipeline repeats a node id");
            return Err(GraphError::DuplicateNode {
                id: node.id.clone(),
            });
        }

        let next_id = snapshot
            .nodes
            .iter()
            .map(|n| n.id.as_str())
            .chain(
                snapshot
                    .edges
                    .iter()
                    .flat_map(|e| [e.source.as_str(), e.target.as_str()]),
            )
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let graph = Self {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            layout,
            next_id,
        };
        let dangling = graph.dangling_edges().len();
        if dangling > 0 {
            warn!(dangling, "Restored pipeline contains edges to missing nodes");
        }
        Ok(graph)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Appends a node of `kind` at the next grid cell and chains it to the previous node.
    pub fn add_node(&mut self, kind: NodeKind) -> &Node {
        let index = self.nodes.len();
        self.next_id += 1;
        let node = Node::new(
            self.next_id.to_string(),
            kind,
            self.layout.position(index),
            self.layout.config().node_size(),
        );

        if let Some(previous) = self.nodes.last() {
            let edge = Edge::between(&previous.id, &node.id);
            debug!(edge = %edge.id, "Auto-chained new node");
            self.edges.push(edge);
        }

        debug!(id = %node.id, %kind, x = node.position.x, y = node.position.y, "Added node");
        self.nodes.push(node);
        &self.nodes[index]
    }

    /// Connects two existing nodes. Connecting an already connected pair returns the
    /// existing edge.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<&Edge, GraphError> {
        self.require_node(source)?;
        self.require_node(target)?;

        let id = Edge::id_for(source, target);
        if let Some(index) = self.edges.iter().position(|e| e.id == id) {
            trace!(edge = %id, "Edge already present");
            return Ok(&self.edges[index]);
        }

        let index = self.edges.len();
        self.edges.push(Edge::between(source, target));
        debug!(edge = %id, "Connected nodes");
        Ok(&self.edges[index])
    }

    /// Merges `{field: value}` into the addressed node's fields.
    pub fn update_node_field(
        &mut self,
        id: &str,
        field: NodeField,
        value: impl Into<String>,
    ) -> Result<(), GraphError> {
        self.update_node_fields(id, [(field, value.into())])
    }

    /// Merges several fields at once. Either every field is applied or none is.
    pub fn update_node_fields<I>(&mut self, id: &str, patch: I) -> Result<(), GraphError>
    where
        I: IntoIterator<Item = (NodeField, String)>,
    {
        let patch: Vec<(NodeField, String)> = patch.into_iter().collect();
        let node = self.node_mut(id)?;

        if let Some((_, model)) = patch
            .iter()
            .find(|(field, value)| *field == NodeField::Model && !node.kind.supports_model(value))
        {
            warn!(id, %model, kind = %node.kind, "Rejected unknown model");
            return Err(GraphError::UnknownModel {
                kind: node.kind,
                model: model.clone(),
            });
        }

        for (field, value) in patch {
            trace!(id, %field, "Updated node field");
            node.fields.insert(field.as_str().to_string(), value);
        }
        Ok(())
    }

    /// Moves a node to a user-chosen position. Manual placement may overlap other nodes.
    pub fn move_node(&mut self, id: &str, position: Position) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        node.position = Position {
            x: position.x.max(0.0),
            y: position.y.max(0.0),
        };
        Ok(())
    }

    /// Removes a node together with every edge that touches it, then reflows the
    /// remaining nodes so automatic placement stays overlap-free.
    pub fn remove_node(&mut self, id: &str) -> Result<Node, GraphError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound { id: id.to_string() })?;

        let node = self.nodes.remove(index);
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        debug!(id, dropped_edges = before - self.edges.len(), "Removed node");

        self.reflow();
        Ok(node)
    }

    /// Drops every node and edge and restarts id assignment.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_id = 0;
        debug!("Cleared pipeline");
    }

    /// Recomputes every node's position from its insertion index.
    pub fn reflow(&mut self) {
        for (index, node) in self.nodes.iter_mut().enumerate() {
            node.position = self.layout.position(index);
        }
        trace!(columns = self.layout.columns(), nodes = self.nodes.len(), "Reflowed pipeline");
    }

    /// Adapts the grid to a new viewport width and reflows all nodes.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.layout = GridLayout::for_width(*self.layout.config(), width);
        self.reflow();
    }

    /// Edges whose source or target is not a current node.
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        let ids: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
            .collect()
    }

    fn require_node(&self, id: &str) -> Result<(), GraphError> {
        if self.node(id).is_some() {
            Ok(())
        } else {
            warn!(id, "Edit referenced a missing node");
            Err(GraphError::NodeNotFound { id: id.to_string() })
        }
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut Node, GraphError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound { id: id.to_string() })
    }
}

impl fmt::Display for PipelineGraph {
    /// One line per edge, e.g. `1:llmCall -> 2:apiCall`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |id: &str| match self.node(id) {
            Some(node) => format!("{}:{}", node.id, node.kind),
            None => format!("{}:?", id),
        };
        let lines = self
            .edges
            .iter()
            .map(|e| format!("{} -> {}", label(&e.source), label(&e.target)))
            .join("\n");
        f.write_str(&lines)
    }
}
