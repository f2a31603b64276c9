//! Tests for Dijkstra shortest paths.

use super::error::Error;
use super::graph::Graph;
use super::shortest_path::find_cost;

fn build_square() -> Graph<u32> {
    Graph::from_edges([(1, 2, 1.0), (2, 3, 1.0), (3, 4, 5.0), (4, 1, 5.0)]).unwrap()
}

#[test]
fn test_find_cost_easy() {
    let graph = build_square();
    let path = find_cost(&graph, &1, &3).unwrap();
    assert!((path.cost - 2.0).abs() < f64::EPSILON);
    assert_eq!(path.nodes, vec![1, 2, 3]);
    assert_eq!(path.edges, vec![0, 1]);
}

#[test]
fn test_find_cost_symmetric() {
    let graph = Graph::from_edges([
        ('A', 'B', 8.0),
        ('A', 'E', 4.0),
        ('A', 'H', 3.0),
        ('B', 'C', 9.0),
        ('B', 'G', 6.0),
        ('C', 'D', 5.0),
        ('C', 'F', 3.0),
        ('D', 'E', 5.0),
        ('D', 'F', 1.0),
        ('E', 'F', 2.0),
        ('E', 'G', 3.0),
        ('G', 'H', 1.0),
    ])
    .unwrap();
    let nodes: Vec<char> = graph.nodes().copied().collect();
    for a in &nodes {
        for b in &nodes {
            let there = find_cost(&graph, a, b).unwrap().cost;
            let back = find_cost(&graph, b, a).unwrap().cost;
            assert!((there - back).abs() < 1e-9, "{a}->{b} = {there}, back = {back}");
        }
    }
}

#[test]
fn test_cost_matches_path_weights() {
    let graph = build_square();
    let path = find_cost(&graph, &2, &4).unwrap();
    let summed: f64 = path
        .edges
        .iter()
        .map(|id| graph.edge(*id).unwrap().weight())
        .sum();
    assert!((path.cost - summed).abs() < f64::EPSILON);
    assert_eq!(path.nodes.first(), Some(&2));
    assert_eq!(path.nodes.last(), Some(&4));
    assert_eq!(path.nodes.len(), path.edges.len() + 1);
}

#[test]
fn test_uses_cheapest_parallel_edge() {
    let graph = Graph::from_edges([(1, 2, 7.0), (1, 2, 3.0)]).unwrap();
    let path = find_cost(&graph, &1, &2).unwrap();
    assert!((path.cost - 3.0).abs() < f64::EPSILON);
    assert_eq!(path.edges, vec![1]);
}

#[test]
fn test_same_source_and_target() {
    let graph = build_square();
    let path = find_cost(&graph, &3, &3).unwrap();
    assert!(path.cost.abs() < f64::EPSILON);
    assert_eq!(path.nodes, vec![3]);
    assert!(path.edges.is_empty());
}

#[test]
fn test_unknown_node_is_invalid_argument() {
    let graph = build_square();
    assert!(matches!(
        find_cost(&graph, &9, &1),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        find_cost(&graph, &1, &9),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn test_disconnected_target_is_unreachable() {
    let graph = Graph::from_edges([(1, 2, 1.0), (3, 4, 1.0)]).unwrap();
    let result = find_cost(&graph, &1, &4);
    assert!(matches!(result, Err(Error::Unreachable { .. })));
}

#[test]
fn test_reversed_path() {
    let graph = build_square();
    let path = find_cost(&graph, &1, &3).unwrap();
    let back = path.reversed();
    assert_eq!(back.nodes, vec![3, 2, 1]);
    assert_eq!(back.edges, vec![1, 0]);
    assert!((back.cost - path.cost).abs() < f64::EPSILON);
}

#[test]
fn test_zero_weight_edges() {
    let graph = Graph::from_edges([(1, 2, 0.0), (2, 3, 0.0), (1, 3, 1.0)]).unwrap();
    let path = find_cost(&graph, &1, &3).unwrap();
    assert!(path.cost.abs() < f64::EPSILON);
    assert_eq!(path.nodes, vec![1, 2, 3]);
}
