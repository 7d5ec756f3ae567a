use crate::types::{FileGraph, GraphEdge, GraphNode};
use autodoc_ingest::Entry;
use petgraph::graph::NodeIndex;

/// Flatten an entry forest into a structure graph: one node per entry,
/// one directed parent→child edge per relation, in pre-order.
#[must_use]
pub fn build_graph(forest: &[Entry]) -> FileGraph {
    let mut graph = FileGraph::new();
    traverse(forest, None, &mut graph);

    log::debug!(
        "Built structure graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

fn traverse(items: &[Entry], parent: Option<NodeIndex>, graph: &mut FileGraph) {
    for item in items {
        let idx = graph.add_node(GraphNode {
            id: item.path.clone(),
            label: item.name.clone(),
            kind: item.kind,
        });

        if let Some(parent_idx) = parent {
            // The parent node was inserted earlier in this traversal.
            let parent_id = graph
                .get_node(parent_idx)
                .map(|node| node.id.clone())
                .unwrap_or_default();
            graph.add_edge(
                parent_idx,
                idx,
                GraphEdge {
                    id: format!("{parent_id}-{}", item.path),
                    source: parent_id,
                    target: item.path.clone(),
                },
            );
        }

        if let Some(children) = &item.children {
            traverse(children, Some(idx), graph);
        }
    }
}
