//! Tests for graph building and the layered layout.

use autodoc_graph::{build_graph, layout, FileGraph, GraphEdge, GraphNode, LayoutConfig};
use autodoc_ingest::{Entry, EntryKind};
use pretty_assertions::assert_eq;

fn file(name: &str, path: &str) -> Entry {
    Entry::file(name, path, Some("x".to_string()))
}

fn sample_forest() -> Vec<Entry> {
    vec![
        Entry::directory(
            "src",
            "/src",
            vec![
                file("main.ts", "/src/main.ts"),
                Entry::directory("api", "/src/api", vec![file("routes.ts", "/src/api/routes.ts")]),
            ],
        ),
        file("package.json", "/package.json"),
    ]
}

fn make_node(id: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        label: id.trim_start_matches('/').to_string(),
        kind: EntryKind::Directory,
    }
}

fn make_edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge {
        id: format!("{source}-{target}"),
        source: source.to_string(),
        target: target.to_string(),
    }
}

#[test]
fn one_node_per_entry_one_edge_per_relation() {
    let graph = build_graph(&sample_forest());

    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 3);

    let (nodes, edges) = graph.elements();
    let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "/src",
            "/src/main.ts",
            "/src/api",
            "/src/api/routes.ts",
            "/package.json",
        ]
    );

    assert_eq!(edges[0].source, "/src");
    assert_eq!(edges[0].target, "/src/main.ts");
    assert_eq!(edges[0].id, "/src-/src/main.ts");
    assert_eq!(edges[2].source, "/src/api");
    assert_eq!(edges[2].target, "/src/api/routes.ts");
}

#[test]
fn roots_have_no_incoming_edges() {
    let graph = build_graph(&sample_forest());
    let (_, edges) = graph.elements();

    assert!(edges.iter().all(|e| e.target != "/src"));
    assert!(edges.iter().all(|e| e.target != "/package.json"));
}

#[test]
fn rank_equals_depth() {
    let graph = build_graph(&sample_forest());
    let config = LayoutConfig::default();
    let positioned = layout(&graph, &config);

    let y_of = |id: &str| {
        positioned
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.y)
            .unwrap()
    };
    let rank_step = config.node_height + config.rank_sep;

    assert_eq!(y_of("/src"), 0.0);
    assert_eq!(y_of("/package.json"), 0.0);
    assert_eq!(y_of("/src/main.ts"), rank_step);
    assert_eq!(y_of("/src/api"), rank_step);
    assert_eq!(y_of("/src/api/routes.ts"), 2.0 * rank_step);
}

#[test]
fn layout_is_bit_identical_across_calls() {
    let graph = build_graph(&sample_forest());
    let config = LayoutConfig::default();

    let first = layout(&graph, &config);
    let second = layout(&graph, &config);

    assert_eq!(first, second);
}

#[test]
fn single_parent_is_centered_over_children() {
    let forest = vec![Entry::directory(
        "src",
        "/src",
        vec![file("a.ts", "/src/a.ts"), file("b.ts", "/src/b.ts")],
    )];
    let config = LayoutConfig::default();
    let positioned = layout(&build_graph(&forest), &config);

    let pos = |id: &str| positioned.iter().find(|p| p.id == id).unwrap();

    // Child rank is the widest: 2 * 220 + 60 = 500. The root rank is 220
    // wide and offset by (500 - 220) / 2.
    assert_eq!(pos("/src").x, 140.0);
    assert_eq!(pos("/src/a.ts").x, 0.0);
    assert_eq!(pos("/src/b.ts").x, 280.0);
}

#[test]
fn barycenter_sweep_removes_crossing() {
    // Two roots whose children start in crossing order: a's child is
    // inserted after b's child.
    let mut graph = FileGraph::new();
    let a = graph.add_node(make_node("/a"));
    let b = graph.add_node(make_node("/b"));
    let b_child = graph.add_node(make_node("/b/child"));
    let a_child = graph.add_node(make_node("/a/child"));
    graph.add_edge(b, b_child, make_edge("/b", "/b/child"));
    graph.add_edge(a, a_child, make_edge("/a", "/a/child"));

    let positioned = layout(&graph, &LayoutConfig::default());
    let x_of = |id: &str| positioned.iter().find(|p| p.id == id).map(|p| p.x).unwrap();

    // After ordering, each child sits under its own parent.
    assert!(x_of("/a") < x_of("/b"));
    assert!(x_of("/a/child") < x_of("/b/child"));
}

#[test]
fn empty_forest_lays_out_nothing() {
    let graph = build_graph(&[]);
    assert!(layout(&graph, &LayoutConfig::default()).is_empty());
}
