//! The directed feature graph
//!
//! Represented as explicit node and edge lists rather than a library graph
//! object: the structure is persisted verbatim in the case document and
//! edited by hand after initial construction, so every mutation is a plain
//! list operation with explicit not-found signaling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from graph edit operations
///
/// All failures are local to the offending edit; the graph is never left in
/// a partially-mutated state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Referenced node does not exist
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Referenced edge does not exist
    #[error("Edge not found: {0} -> {1}")]
    EdgeNotFound(String, String),

    /// Node id already present
    #[error("Node already exists: {0}")]
    DuplicateNode(String),
}

/// A graph node: one distinct introduced feature string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The feature string (node identity)
    pub id: String,

    /// Display color, assigned per first-introducing claim
    pub color: String,
}

/// A directed edge from an antecedent feature to a newly introduced one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Antecedent node id
    pub source: String,

    /// Introduced node id
    pub target: String,

    /// Connective text between the two positions (may be empty)
    #[serde(default)]
    pub label: String,
}

/// Directed feature graph with colored nodes and labeled edges
///
/// Node ids are unique; parallel edges between the same pair are permitted
/// (distinct rule firings are not merged). Iteration order is insertion
/// order for both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes in insertion order
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// Edges in insertion order
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a node with this id exists
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Look up a node by id
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Node ids in insertion order
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Add a node, failing if the id is already present
    pub fn add_node(
        &mut self,
        id: impl Into<String>,
        color: impl Into<String>,
    ) -> Result<(), GraphError> {
        let id = id.into();
        if self.contains_node(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.nodes.push(Node {
            id,
            color: color.into(),
        });
        Ok(())
    }

    /// Add a node if absent; returns true if it was newly created
    ///
    /// Re-introduction of an existing feature keeps the original node and
    /// its first-assigned color.
    pub fn ensure_node(&mut self, id: &str, color: &str) -> bool {
        if self.contains_node(id) {
            return false;
        }
        self.nodes.push(Node {
            id: id.to_string(),
            color: color.to_string(),
        });
        true
    }

    /// Remove a node and every edge incident to it
    pub fn remove_node(&mut self, id: &str) -> Result<(), GraphError> {
        let pos = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        self.nodes.remove(pos);
        self.edges.retain(|e| e.source != id && e.target != id);
        Ok(())
    }

    /// Add a directed edge between two existing nodes
    ///
    /// Parallel edges are allowed; endpoints must already exist.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), GraphError> {
        let source = source.into();
        let target = target.into();
        if !self.contains_node(&source) {
            return Err(GraphError::NodeNotFound(source));
        }
        if !self.contains_node(&target) {
            return Err(GraphError::NodeNotFound(target));
        }
        self.edges.push(Edge {
            source,
            target,
            label: label.into(),
        });
        Ok(())
    }

    /// Remove the first edge matching source and target
    pub fn remove_edge(&mut self, source: &str, target: &str) -> Result<(), GraphError> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.source == source && e.target == target)
            .ok_or_else(|| GraphError::EdgeNotFound(source.to_string(), target.to_string()))?;
        self.edges.remove(pos);
        Ok(())
    }

    /// Number of edges pointing at this node
    pub fn in_degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.target == id).count()
    }

    /// Successor node ids in edge insertion order (duplicates preserved)
    pub fn neighbors<'a>(&'a self, id: &str) -> Vec<&'a str> {
        self.edges
            .iter()
            .filter(|e| e.source == id)
            .map(|e| e.target.as_str())
            .collect()
    }

    /// True if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
