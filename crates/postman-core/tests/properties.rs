//! Property-based tests over random connected graphs.
//!
//! Graphs are a random spanning tree on up to 8 nodes plus a few extra
//! edges (self-loops and parallel edges included), which keeps the odd-node
//! count within the default brute-force ceiling.

use std::collections::BTreeSet;

use postman_core::eulerize::{Eulerizer, GreedyPairing};
use postman_core::{find_cost, make_eulerian, CircuitWalker, Graph};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const GRAPH_PROP_CASES: u32 = 96;

fn connected_graph_strategy() -> impl Strategy<Value = Graph<u32>> {
    (2_usize..=8)
        .prop_flat_map(|n| {
            let nodes = n as u32;
            (
                vec((0_u32..1000, 1_u32..=20), n - 1),
                vec((0..nodes, 0..nodes, 1_u32..=20), 0..8),
            )
        })
        .prop_map(|(tree, extra)| {
            let mut graph = Graph::new();
            for (i, (parent_seed, weight)) in tree.into_iter().enumerate() {
                let child = i as u32 + 1;
                graph
                    .add_edge(parent_seed % child, child, f64::from(weight))
                    .unwrap();
            }
            for (a, b, weight) in extra {
                graph.add_edge(a, b, f64::from(weight)).unwrap();
            }
            graph
        })
}

fn graph_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: GRAPH_PROP_CASES,
        ..ProptestConfig::default()
    }
}

fn degree_sum(graph: &Graph<u32>) -> usize {
    graph.node_degrees().values().sum()
}

proptest! {
    #![proptest_config(graph_proptest_config())]

    #[test]
    fn test_degree_sum_is_twice_edge_count(graph in connected_graph_strategy()) {
        prop_assert_eq!(degree_sum(&graph), 2 * graph.edge_count());
        let result = make_eulerian(&graph).unwrap();
        prop_assert_eq!(degree_sum(&result.graph), 2 * result.graph.edge_count());
    }

    #[test]
    fn test_eulerize_is_eulerian_and_additive(graph in connected_graph_strategy()) {
        let result = make_eulerian(&graph).unwrap();
        prop_assert!(result.graph.is_eulerian());
        prop_assert_eq!(result.original_edge_count(), graph.edge_count());
        for (id, edge) in graph.edges() {
            prop_assert_eq!(result.graph.edge(id), Some(edge));
        }
        let delta = result.graph.total_weight() - graph.total_weight();
        prop_assert!((delta - result.added_cost).abs() < 1e-6);
        prop_assert_eq!(
            result.dead_end_doublings + result.matching_edges_added(),
            result.edges_added()
        );
    }

    #[test]
    fn test_eulerize_twice_is_noop(graph in connected_graph_strategy()) {
        let once = make_eulerian(&graph).unwrap();
        let twice = make_eulerian(&once.graph).unwrap();
        prop_assert!(twice.is_unchanged());
    }

    #[test]
    fn test_brute_force_never_worse_than_greedy(graph in connected_graph_strategy()) {
        let exact = make_eulerian(&graph).unwrap();
        let greedy = Eulerizer::new(GreedyPairing).eulerize(&graph).unwrap();
        prop_assert!(greedy.graph.is_eulerian());
        prop_assert!(exact.added_cost <= greedy.added_cost + 1e-6);
    }

    #[test]
    fn test_find_cost_is_symmetric(graph in connected_graph_strategy(), a in 0_u32..8, b in 0_u32..8) {
        let n = graph.node_count() as u32;
        let (a, b) = (a % n, b % n);
        let there = find_cost(&graph, &a, &b).unwrap();
        let back = find_cost(&graph, &b, &a).unwrap();
        prop_assert!((there.cost - back.cost).abs() < 1e-6);

        let summed: f64 = there.edges.iter().map(|id| graph.edge(*id).unwrap().weight()).sum();
        prop_assert!((there.cost - summed).abs() < 1e-6);
    }

    #[test]
    fn test_walk_covers_every_edge_once(graph in connected_graph_strategy(), seed in 0_u64..1000) {
        let augmented = make_eulerian(&graph).unwrap().graph;
        let walk = CircuitWalker::seeded(seed).walk(&augmented, None).unwrap();

        prop_assert!(walk.is_complete());
        prop_assert!(walk.is_closed());
        prop_assert_eq!(walk.edges.len(), augmented.edge_count());
        let distinct: BTreeSet<_> = walk.edges.iter().copied().collect();
        prop_assert_eq!(distinct.len(), walk.edges.len());
        for (step, id) in walk.edges.iter().enumerate() {
            let edge = augmented.edge(*id).unwrap();
            prop_assert!(edge.joins(&walk.route[step], &walk.route[step + 1]));
        }
    }
}
