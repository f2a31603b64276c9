//! Tests for depth-first traversal and bridge detection.

use roaring::RoaringTreemap;

use super::edge_store::Graph;
use super::traversal::{depth_first_order, is_bridge, reachable_count, GraphTraversal};
use super::UnvisitedEdges;

/// Simple path A-B-C-D-E-F.
fn build_path() -> Graph<char> {
    Graph::from_edges([
        ('A', 'B', 1.0),
        ('B', 'C', 1.0),
        ('C', 'D', 1.0),
        ('D', 'E', 1.0),
        ('E', 'F', 1.0),
    ])
    .unwrap()
}

fn build_triangle() -> Graph<u32> {
    Graph::from_edges([(1, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)]).unwrap()
}

#[test]
fn test_every_path_edge_is_bridge() {
    let graph = build_path();
    for id in graph.edge_ids() {
        assert!(graph.is_bridge(id).unwrap(), "edge {id} should be a bridge");
    }
}

#[test]
fn test_no_triangle_edge_is_bridge() {
    let graph = build_triangle();
    for id in graph.edge_ids() {
        assert!(!graph.is_bridge(id).unwrap(), "edge {id} is on a cycle");
    }
}

#[test]
fn test_parallel_edge_is_not_bridge() {
    let graph = Graph::from_edges([(1, 2, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    assert!(!graph.is_bridge(0).unwrap());
    assert!(!graph.is_bridge(1).unwrap());
    assert!(graph.is_bridge(2).unwrap());
}

#[test]
fn test_self_loop_is_not_bridge() {
    let graph = Graph::from_edges([(1, 1, 1.0), (1, 2, 1.0)]).unwrap();
    assert!(!graph.is_bridge(0).unwrap());
}

#[test]
fn test_depth_first_order_ascending_tie_break() {
    // Star around 1 plus a tail: 1-4, 1-2, 1-3, 2-5.
    let graph = Graph::from_edges([(1, 4, 1.0), (1, 2, 1.0), (1, 3, 1.0), (2, 5, 1.0)]).unwrap();
    let order = depth_first_order(&graph, &1, None);
    assert_eq!(order, vec![1, 2, 5, 3, 4]);
}

#[test]
fn test_depth_first_order_with_excluded_edge() {
    let graph = build_path();
    // Removing C-D (id 2) leaves A, B, C reachable from A.
    let order = depth_first_order(&graph, &'A', Some(2));
    assert_eq!(order, vec!['A', 'B', 'C']);
}

#[test]
fn test_reachable_count_unknown_start() {
    let graph = build_triangle();
    assert_eq!(reachable_count(&graph, &99, None), 1);
}

#[test]
fn test_graph_incident_edges() {
    let graph = build_triangle();
    let mut neighbours: Vec<u32> = graph
        .incident_edges(&1)
        .into_iter()
        .map(|(_, n)| n)
        .collect();
    neighbours.sort_unstable();
    assert_eq!(neighbours, vec![2, 3]);
}

#[test]
fn test_unvisited_edges_hides_visited() {
    let graph = build_triangle();
    let mut visited = RoaringTreemap::new();
    visited.insert(0);
    let view = UnvisitedEdges::new(&graph, &visited);

    assert_eq!(view.remaining(), 2);
    let ids: Vec<u64> = view.incident_edges(&1).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![2]);
    assert!(view.endpoints(0).is_none());
    assert!(is_bridge(&view, 0).is_none());
}

#[test]
fn test_bridge_in_reduced_view() {
    // Triangle with edge 1-2 used: the remaining 2-3, 3-1 form a path.
    let graph = build_triangle();
    let mut visited = RoaringTreemap::new();
    visited.insert(0);
    let view = UnvisitedEdges::new(&graph, &visited);

    assert_eq!(is_bridge(&view, 1), Some(true));
    assert_eq!(is_bridge(&view, 2), Some(true));
    assert_eq!(is_bridge(&graph, 1), Some(false));
}
