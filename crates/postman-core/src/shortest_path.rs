//! Minimum-cost paths with Dijkstra's algorithm.
//!
//! Edges are followed in both directions. Every node starts at an infinite
//! tentative cost, the source at zero; the frontier pops the cheapest node
//! first and, among equal costs, the smallest node id.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, NodeId, Weight};

/// A minimum-cost path between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<N> {
    /// Sum of the weights of `edges`.
    pub cost: Weight,
    /// Nodes from source to target, both inclusive.
    pub nodes: Vec<N>,
    /// Edge ids between consecutive `nodes`.
    pub edges: Vec<EdgeId>,
}

impl<N: Clone> ShortestPath<N> {
    /// Returns the same path walked from target to source.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            cost: self.cost,
            nodes: self.nodes.iter().rev().cloned().collect(),
            edges: self.edges.iter().rev().copied().collect(),
        }
    }
}

/// Frontier entry ordered so that `BinaryHeap` pops the cheapest node,
/// then the smallest node id.
#[derive(Debug)]
struct Frontier<N> {
    cost: Weight,
    node: N,
}

impl<N: Ord> Ord for Frontier<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for Frontier<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord> PartialEq for Frontier<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord> Eq for Frontier<N> {}

/// Returns the cheapest path from `source` to `target`.
///
/// # Errors
///
/// - `Error::InvalidArgument` if either node is not in the graph.
/// - `Error::Unreachable` if no path joins them.
///
/// # Example
///
/// ```rust
/// use postman_core::graph::Graph;
/// use postman_core::shortest_path::find_cost;
///
/// let graph = Graph::from_edges([(1, 2, 1.0), (2, 3, 1.0), (3, 4, 5.0), (4, 1, 5.0)]).unwrap();
/// let path = find_cost(&graph, &1, &3).unwrap();
/// assert_eq!(path.cost, 2.0);
/// assert_eq!(path.nodes, vec![1, 2, 3]);
/// ```
pub fn find_cost<N: NodeId>(graph: &Graph<N>, source: &N, target: &N) -> Result<ShortestPath<N>> {
    for (role, node) in [("source", source), ("target", target)] {
        if !graph.has_node(node) {
            return Err(Error::InvalidArgument(format!(
                "unknown {role} node {node:?}"
            )));
        }
    }

    let mut costs: BTreeMap<N, Weight> = graph
        .nodes()
        .map(|n| (n.clone(), Weight::INFINITY))
        .collect();
    let mut previous: BTreeMap<N, (N, EdgeId)> = BTreeMap::new();
    let mut settled: BTreeSet<N> = BTreeSet::new();
    let mut frontier = BinaryHeap::new();

    costs.insert(source.clone(), 0.0);
    frontier.push(Frontier {
        cost: 0.0,
        node: source.clone(),
    });

    while let Some(Frontier { cost, node }) = frontier.pop() {
        if !settled.insert(node.clone()) {
            continue;
        }
        if &node == target {
            break;
        }

        for (edge_id, edge) in graph.edges_incident(&node) {
            let next = edge.other_end(&node)?;
            if settled.contains(next) {
                continue;
            }
            let candidate = cost + edge.weight();
            let best = costs.get(next).copied().unwrap_or(Weight::INFINITY);
            if candidate < best {
                costs.insert(next.clone(), candidate);
                previous.insert(next.clone(), (node.clone(), edge_id));
                frontier.push(Frontier {
                    cost: candidate,
                    node: next.clone(),
                });
            }
        }
    }

    let cost = costs.get(target).copied().unwrap_or(Weight::INFINITY);
    if cost.is_infinite() {
        return Err(Error::Unreachable {
            from: format!("{source:?}"),
            to: format!("{target:?}"),
        });
    }

    let mut nodes = vec![target.clone()];
    let mut edges = Vec::new();
    let mut current = target;
    while let Some((prev, edge_id)) = previous.get(current) {
        nodes.push(prev.clone());
        edges.push(*edge_id);
        current = prev;
    }
    nodes.reverse();
    edges.reverse();

    Ok(ShortestPath { cost, nodes, edges })
}
