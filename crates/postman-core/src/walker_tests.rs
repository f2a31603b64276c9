//! Tests for the Fleury circuit walker.

use std::collections::BTreeSet;

use super::error::Error;
use super::eulerize::make_eulerian;
use super::graph::{Graph, NodeId};
use super::walker::{CircuitWalker, Walk};
use crate::config::WalkConfig;

fn build_square() -> Graph<u32> {
    Graph::from_edges([(1, 2, 1.0), (2, 3, 1.0), (3, 4, 5.0), (4, 1, 5.0)]).unwrap()
}

fn build_diamond() -> Graph<u32> {
    Graph::from_edges([(1, 2, 4.0), (1, 3, 4.0), (2, 3, 1.0), (2, 4, 4.0), (3, 4, 4.0)]).unwrap()
}

/// Two triangles joined at node 3 (a bow tie), Eulerian.
fn build_bow_tie() -> Graph<u32> {
    Graph::from_edges([
        (1, 2, 1.0),
        (2, 3, 1.0),
        (3, 1, 1.0),
        (3, 4, 1.0),
        (4, 5, 1.0),
        (5, 3, 1.0),
    ])
    .unwrap()
}

/// Checks that `walk` uses every edge once and each step follows its edge.
fn assert_valid_route<N: NodeId>(graph: &Graph<N>, walk: &Walk<N>) {
    assert!(walk.is_complete());
    assert_eq!(walk.edges.len(), graph.edge_count());
    assert_eq!(walk.route.len(), walk.edges.len() + 1);

    let distinct: BTreeSet<_> = walk.edges.iter().copied().collect();
    assert_eq!(distinct.len(), walk.edges.len(), "edge used twice");

    for (step, id) in walk.edges.iter().enumerate() {
        let edge = graph.edge(*id).unwrap();
        assert!(
            edge.joins(&walk.route[step], &walk.route[step + 1]),
            "edge {id} does not join step {step}"
        );
    }
}

#[test]
fn test_square_from_node_one() {
    let graph = build_square();
    let walk = CircuitWalker::seeded(1).walk(&graph, Some(&1)).unwrap();

    assert_valid_route(&graph, &walk);
    assert_eq!(walk.route.first(), Some(&1));
    assert!(walk.is_closed());
    assert_eq!(walk.attempts, 1);
}

#[test]
fn test_walk_does_not_mutate_graph() {
    let graph = build_square();
    let _ = CircuitWalker::seeded(3).walk(&graph, None).unwrap();
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_augmented_diamond_walk() {
    let augmented = make_eulerian(&build_diamond()).unwrap().graph;
    let walk = CircuitWalker::seeded(11).walk(&augmented, None).unwrap();

    assert_valid_route(&augmented, &walk);
    assert_eq!(walk.edges.len(), 6);
    assert!(walk.is_closed());
}

#[test]
fn test_bow_tie_many_seeds() {
    let graph = build_bow_tie();
    for seed in 0..50 {
        let walk = CircuitWalker::seeded(seed).walk(&graph, None).unwrap();
        assert_valid_route(&graph, &walk);
        assert!(walk.is_closed());
    }
}

#[test]
fn test_seeded_walk_is_reproducible() {
    let graph = build_bow_tie();
    let first = CircuitWalker::seeded(99).walk(&graph, None).unwrap();
    let second = CircuitWalker::seeded(99).walk(&graph, None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_semi_eulerian_walk_starts_at_odd_node() {
    let graph = build_diamond();
    for seed in 0..20 {
        let walk = CircuitWalker::seeded(seed).walk(&graph, None).unwrap();
        assert_valid_route(&graph, &walk);
        let start = walk.route.first().copied();
        let end = walk.route.last().copied();
        assert!(matches!(start, Some(2 | 3)));
        assert!(matches!(end, Some(2 | 3)));
        assert_ne!(start, end);
    }
}

#[test]
fn test_semi_eulerian_forced_even_start_rejected() {
    let graph = build_diamond();
    let result = CircuitWalker::seeded(0).walk(&graph, Some(&1));
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_unknown_start_rejected() {
    let graph = build_square();
    let result = CircuitWalker::seeded(0).walk(&graph, Some(&42));
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_unwalkable_graphs_rejected() {
    let mut walker = CircuitWalker::seeded(0);

    let empty: Graph<u32> = Graph::new();
    assert!(matches!(walker.walk(&empty, None), Err(Error::InvalidGraph(_))));

    let k4 = Graph::from_edges([
        (1, 2, 1.0),
        (1, 3, 1.0),
        (1, 4, 1.0),
        (2, 3, 1.0),
        (2, 4, 1.0),
        (3, 4, 1.0),
    ])
    .unwrap();
    assert!(matches!(walker.walk(&k4, None), Err(Error::InvalidGraph(_))));

    let split = Graph::from_edges([(1, 2, 1.0), (2, 1, 1.0), (3, 4, 1.0), (4, 3, 1.0)]).unwrap();
    assert!(matches!(walker.walk(&split, None), Err(Error::InvalidGraph(_))));

    let mut directed = build_square();
    directed.add_directed_edge(1, 3, 1.0).unwrap();
    directed.add_directed_edge(3, 1, 1.0).unwrap();
    assert!(matches!(walker.walk(&directed, None), Err(Error::InvalidGraph(_))));
}

#[test]
fn test_walk_once_from_middle_of_path_strands() {
    let graph = Graph::from_edges([(1, 2, 1.0), (2, 3, 1.0)]).unwrap();
    let attempt = CircuitWalker::seeded(5).walk_once(&graph, &2);

    assert_eq!(attempt.edges.len(), 1);
    assert_eq!(attempt.route.len(), 2);
    assert_eq!(attempt.route[0], 2);
}

#[test]
fn test_walk_once_never_reuses_edges() {
    let graph = build_bow_tie();
    for seed in 0..20 {
        let attempt = CircuitWalker::seeded(seed).walk_once(&graph, &3);
        let distinct: BTreeSet<_> = attempt.edges.iter().collect();
        assert_eq!(distinct.len(), attempt.edges.len());
        assert!(attempt.edges.len() <= graph.edge_count());
    }
}

#[test]
fn test_self_loop_and_parallel_edges() {
    let graph = Graph::from_edges([(1, 1, 1.0), (1, 2, 1.0), (2, 1, 1.0)]).unwrap();
    let walk = CircuitWalker::seeded(4).walk(&graph, Some(&2)).unwrap();
    assert_valid_route(&graph, &walk);
    assert!(walk.is_closed());
}

#[test]
fn test_from_config_and_attempt_cap() {
    let walker = CircuitWalker::from_config(&WalkConfig {
        max_attempts: 3,
        seed: Some(8),
    });
    assert_eq!(walker.max_attempts(), 3);
    assert_eq!(CircuitWalker::seeded(0).with_max_attempts(0).max_attempts(), 1);
}
