//! Augmentation of a connected graph into an Eulerian one.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

use crate::config::{PairingConfig, PairingStrategyKind};
use crate::error::{Error, Result};
use crate::graph::{EdgeId, Graph, NodeId, Weight};
use crate::shortest_path::{find_cost, ShortestPath};

use super::pairing::{BruteForcePairing, CostMatrix, GreedyPairing, PairingStrategy};

/// Result of augmenting a graph.
#[derive(Debug, Clone)]
pub struct Eulerization<N: NodeId> {
    /// The input graph plus every duplicated edge.
    pub graph: Graph<N>,
    /// Edges duplicated because one endpoint had degree 1.
    pub dead_end_doublings: usize,
    /// Odd-node pairs joined by a duplicated shortest path, smaller node first.
    pub pairing: Vec<(N, N)>,
    /// Total weight of all duplicated edges.
    pub added_cost: Weight,
    original_edge_count: usize,
}

impl<N: NodeId> Eulerization<N> {
    /// Edge count of the graph before augmentation.
    #[must_use]
    pub fn original_edge_count(&self) -> usize {
        self.original_edge_count
    }

    /// Edges added along shortest paths between paired odd nodes.
    #[must_use]
    pub fn matching_edges_added(&self) -> usize {
        self.graph.edge_count() - self.original_edge_count - self.dead_end_doublings
    }

    /// All edges added by augmentation.
    #[must_use]
    pub fn edges_added(&self) -> usize {
        self.graph.edge_count() - self.original_edge_count
    }

    /// True if the input needed no augmentation.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.edges_added() == 0
    }
}

/// Turns connected undirected graphs into Eulerian ones by duplicating edges.
///
/// Dead-end edges are doubled first; the remaining odd nodes are then paired
/// by the configured [`PairingStrategy`] and each pair's shortest path is
/// duplicated edge by edge.
///
/// # Example
///
/// ```rust
/// use postman_core::eulerize::Eulerizer;
/// use postman_core::graph::Graph;
///
/// let graph = Graph::from_edges([(1, 2, 4.0), (1, 3, 4.0), (2, 3, 1.0), (2, 4, 4.0), (3, 4, 4.0)])
///     .unwrap();
/// let result = Eulerizer::default().eulerize(&graph).unwrap();
/// assert!(result.graph.is_eulerian());
/// assert_eq!(result.graph.total_weight(), 18.0);
/// assert_eq!(result.pairing, vec![(2, 3)]);
/// ```
#[derive(Debug)]
pub struct Eulerizer {
    strategy: Box<dyn PairingStrategy>,
}

impl Default for Eulerizer {
    fn default() -> Self {
        Self::new(BruteForcePairing::default())
    }
}

impl Eulerizer {
    /// Creates an eulerizer with the given pairing strategy.
    pub fn new(strategy: impl PairingStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Creates an eulerizer from the `[pairing]` configuration section.
    #[must_use]
    pub fn from_config(config: &PairingConfig) -> Self {
        match config.strategy {
            PairingStrategyKind::BruteForce => Self::new(BruteForcePairing::new(config.max_odd_nodes)),
            PairingStrategyKind::Greedy => Self::new(GreedyPairing),
        }
    }

    /// Name of the active pairing strategy.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Returns an Eulerian copy of `graph`.
    ///
    /// `graph` itself is left untouched; an already Eulerian graph comes back
    /// as an identical copy.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidGraph` for directed or disconnected input, or if no
    ///   finite-cost pairing exists.
    /// - `Error::PairingLimitExceeded` if the strategy refuses the odd-node
    ///   count.
    pub fn eulerize<N: NodeId>(&self, graph: &Graph<N>) -> Result<Eulerization<N>> {
        if graph.has_directed_edges() {
            return Err(Error::InvalidGraph(
                "directed edges are not supported".to_string(),
            ));
        }
        if !graph.is_connected() {
            return Err(Error::InvalidGraph("graph is not connected".to_string()));
        }

        let mut augmented = graph.clone();
        let mut added_cost = 0.0;

        let dead_ends = find_dead_ends(graph);
        for &id in &dead_ends {
            added_cost += duplicate_edge(&mut augmented, id)?;
        }
        tracing::debug!(doubled = dead_ends.len(), "Doubled dead-end edges");

        let odd = augmented.odd_nodes();
        if odd.len() % 2 == 1 {
            return Err(Error::InvalidGraph(format!(
                "{} odd-degree nodes after dead-end doubling",
                odd.len()
            )));
        }

        let mut pairing = Vec::new();
        if !odd.is_empty() {
            if let Some(limit) = self.strategy.node_limit() {
                if odd.len() > limit {
                    return Err(Error::PairingLimitExceeded {
                        odd_nodes: odd.len(),
                        limit,
                    });
                }
            }

            let paths = pair_paths(&augmented, &odd)?;
            let costs = cost_matrix(&odd, &paths);
            let chosen = self.strategy.best_pairing(&costs)?;
            let pairing_cost = costs.pairing_cost(&chosen);
            if !pairing_cost.is_finite() {
                return Err(Error::InvalidGraph(
                    "odd-degree nodes cannot be paired by finite paths".to_string(),
                ));
            }
            tracing::debug!(
                strategy = self.strategy.name(),
                odd_nodes = odd.len(),
                cost = pairing_cost,
                "Chose odd-node pairing"
            );

            for (i, j) in chosen {
                let key = (odd[i].clone(), odd[j].clone());
                if let Some(path) = paths.get(&key).and_then(Option::as_ref) {
                    for &id in &path.edges {
                        added_cost += duplicate_edge(&mut augmented, id)?;
                    }
                }
                pairing.push(key);
            }
        }

        tracing::info!(
            original_edges = graph.edge_count(),
            augmented_edges = augmented.edge_count(),
            dead_end_doublings = dead_ends.len(),
            added_cost,
            "Eulerized graph"
        );

        Ok(Eulerization {
            graph: augmented,
            dead_end_doublings: dead_ends.len(),
            pairing,
            added_cost,
            original_edge_count: graph.edge_count(),
        })
    }
}

/// Eulerizes `graph` with the default brute-force pairing.
///
/// # Errors
///
/// See [`Eulerizer::eulerize`].
pub fn make_eulerian<N: NodeId>(graph: &Graph<N>) -> Result<Eulerization<N>> {
    Eulerizer::default().eulerize(graph)
}

/// Returns the ids of edges touching a degree-1 node, ascending.
///
/// An edge whose endpoints both have degree 1 is listed once.
#[must_use]
pub fn find_dead_ends<N: NodeId>(graph: &Graph<N>) -> Vec<EdgeId> {
    let ids: BTreeSet<EdgeId> = graph
        .nodes()
        .filter(|n| graph.degree(n) == 1)
        .flat_map(|n| graph.incident_ids(n).iter().copied())
        .collect();
    ids.into_iter().collect()
}

fn duplicate_edge<N: NodeId>(graph: &mut Graph<N>, edge_id: EdgeId) -> Result<Weight> {
    let edge = graph
        .edge(edge_id)
        .cloned()
        .ok_or(Error::InvalidReference(edge_id))?;
    let weight = edge.weight();
    graph.insert_edge(edge)?;
    Ok(weight)
}

/// Shortest paths between every pair of `odd` (ascending), keyed by
/// `(smaller, larger)`. `None` marks an unreachable pair.
fn pair_paths<N: NodeId>(
    graph: &Graph<N>,
    odd: &[N],
) -> Result<FxHashMap<(N, N), Option<ShortestPath<N>>>> {
    let mut paths = FxHashMap::default();
    for (i, a) in odd.iter().enumerate() {
        for b in &odd[i + 1..] {
            let key = (a.clone(), b.clone());
            if paths.contains_key(&key) {
                continue;
            }
            let path = match find_cost(graph, a, b) {
                Ok(path) => Some(path),
                Err(Error::Unreachable { .. }) => None,
                Err(err) => return Err(err),
            };
            paths.insert(key, path);
        }
    }
    Ok(paths)
}

fn cost_matrix<N: NodeId>(
    odd: &[N],
    paths: &FxHashMap<(N, N), Option<ShortestPath<N>>>,
) -> CostMatrix {
    let mut costs = CostMatrix::new(odd.len());
    for i in 0..odd.len() {
        for j in (i + 1)..odd.len() {
            let cost = paths
                .get(&(odd[i].clone(), odd[j].clone()))
                .and_then(Option::as_ref)
                .map_or(Weight::INFINITY, |p| p.cost);
            costs.set(i, j, cost);
        }
    }
    costs
}
