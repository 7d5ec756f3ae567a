use crate::types::FileGraph;
use petgraph::graph::NodeIndex;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Grid spacing for the layered layout, top-to-bottom.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Vertical gap between adjacent ranks.
    pub rank_sep: f64,
    /// Horizontal gap between nodes within a rank.
    pub node_sep: f64,
    /// Barycenter ordering passes (one down + one up sweep each).
    pub sweeps: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 220.0,
            node_height: 80.0,
            rank_sep: 120.0,
            node_sep: 60.0,
            sweeps: 4,
        }
    }
}

/// Final node placement; top-left corner coordinates on the layout grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositionedNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// Layered layout of a structure graph.
///
/// Rank equals depth from the forest root (multiple roots share rank 0).
/// Within a rank, nodes are reordered by a fixed number of deterministic
/// barycenter sweeps to reduce crossings between adjacent ranks; ties keep
/// their current order, so identical input always yields bit-identical
/// coordinates.
#[must_use]
pub fn layout(graph: &FileGraph, config: &LayoutConfig) -> Vec<PositionedNode> {
    let ranks = assign_ranks(graph);
    let mut layers = build_layers(graph, &ranks);

    for _ in 0..config.sweeps {
        sweep(graph, &mut layers, Direction::Incoming);
        sweep(graph, &mut layers, Direction::Outgoing);
    }

    assign_coordinates(graph, &layers, config)
}

/// Depth of each node from its forest root. Parents precede children in
/// insertion order, so a single pass suffices.
fn assign_ranks(graph: &FileGraph) -> HashMap<NodeIndex, usize> {
    let mut ranks = HashMap::new();
    for idx in graph.graph.node_indices() {
        let rank = graph
            .graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
            .and_then(|parent| ranks.get(&parent).copied())
            .map_or(0, |parent_rank| parent_rank + 1);
        ranks.insert(idx, rank);
    }
    ranks
}

/// Nodes grouped by rank, initially in insertion (pre-order) order.
fn build_layers(graph: &FileGraph, ranks: &HashMap<NodeIndex, usize>) -> Vec<Vec<NodeIndex>> {
    let max_rank = ranks.values().copied().max().unwrap_or(0);
    let mut layers = vec![Vec::new(); max_rank + 1];
    for idx in graph.graph.node_indices() {
        layers[ranks[&idx]].push(idx);
    }
    layers
}

/// One ordering pass. `Incoming` walks ranks top-down ordering each layer
/// by the mean position of its parents; `Outgoing` walks bottom-up using
/// children.
fn sweep(graph: &FileGraph, layers: &mut [Vec<NodeIndex>], direction: Direction) {
    let order: Vec<usize> = match direction {
        Direction::Incoming => (1..layers.len()).collect(),
        Direction::Outgoing => (0..layers.len().saturating_sub(1)).rev().collect(),
    };

    for layer_idx in order {
        let fixed_idx = match direction {
            Direction::Incoming => layer_idx - 1,
            Direction::Outgoing => layer_idx + 1,
        };
        let positions: HashMap<NodeIndex, usize> = layers[fixed_idx]
            .iter()
            .enumerate()
            .map(|(pos, &idx)| (idx, pos))
            .collect();

        let current: HashMap<NodeIndex, usize> = layers[layer_idx]
            .iter()
            .enumerate()
            .map(|(pos, &idx)| (idx, pos))
            .collect();

        let mut keyed: Vec<(f64, NodeIndex)> = layers[layer_idx]
            .iter()
            .map(|&idx| {
                let neighbors: Vec<usize> = graph
                    .graph
                    .neighbors_directed(idx, direction)
                    .filter_map(|n| positions.get(&n).copied())
                    .collect();
                let barycenter = if neighbors.is_empty() {
                    // No anchor in the fixed layer: hold the current slot.
                    current[&idx] as f64
                } else {
                    neighbors.iter().sum::<usize>() as f64 / neighbors.len() as f64
                };
                (barycenter, idx)
            })
            .collect();

        // Stable: ties keep their current relative order.
        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        layers[layer_idx] = keyed.into_iter().map(|(_, idx)| idx).collect();
    }
}

/// Place each rank on the grid, centered against the widest rank.
fn assign_coordinates(
    graph: &FileGraph,
    layers: &[Vec<NodeIndex>],
    config: &LayoutConfig,
) -> Vec<PositionedNode> {
    let step = config.node_width + config.node_sep;
    let rank_width = |count: usize| -> f64 {
        if count == 0 {
            0.0
        } else {
            count as f64 * config.node_width + (count - 1) as f64 * config.node_sep
        }
    };
    let max_width = layers
        .iter()
        .map(|layer| rank_width(layer.len()))
        .fold(0.0_f64, f64::max);

    let mut positioned = Vec::with_capacity(graph.node_count());
    for (rank, layer) in layers.iter().enumerate() {
        let offset = (max_width - rank_width(layer.len())) / 2.0;
        let y = rank as f64 * (config.node_height + config.rank_sep);
        for (slot, &idx) in layer.iter().enumerate() {
            if let Some(node) = graph.get_node(idx) {
                positioned.push(PositionedNode {
                    id: node.id.clone(),
                    x: offset + slot as f64 * step,
                    y,
                });
            }
        }
    }
    positioned
}
