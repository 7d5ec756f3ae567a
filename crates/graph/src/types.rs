use autodoc_ingest::EntryKind;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One node per ingested entry; `id` is the entry's unique path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: EntryKind,
}

/// Directed parent→child relation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Flattened structure graph, derived from a snapshot and never persisted.
#[derive(Debug, Default)]
pub struct FileGraph {
    pub(crate) graph: DiGraph<GraphNode, GraphEdge>,
    path_to_node: HashMap<String, NodeIndex>,
}

impl FileGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        let path = node.id.clone();
        let idx = self.graph.add_node(node);
        self.path_to_node.insert(path, idx);
        idx
    }

    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: GraphEdge) {
        self.graph.add_edge(from, to, edge);
    }

    /// Look up a node by entry path.
    #[must_use]
    pub fn find_node(&self, path: &str) -> Option<NodeIndex> {
        self.path_to_node.get(path).copied()
    }

    #[must_use]
    pub fn get_node(&self, idx: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(idx)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes and edges in insertion (pre-order) order, for serialization
    /// to the rendering layer.
    #[must_use]
    pub fn elements(&self) -> (Vec<GraphNode>, Vec<GraphEdge>) {
        let nodes = self.graph.node_weights().cloned().collect();
        let edges = self.graph.edge_weights().cloned().collect();
        (nodes, edges)
    }
}
