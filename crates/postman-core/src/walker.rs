//! Randomized Fleury walk over an Eulerian or semi-Eulerian graph.
//!
//! Each attempt starts from a fresh visited-edge bitmap over the same
//! borrowed graph. At every step the walker prefers a random non-bridge of
//! the still-unvisited edges and only crosses a bridge when nothing else is
//! left. Attempts that strand themselves are retried up to a cap.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use roaring::RoaringTreemap;

use crate::config::{WalkConfig, DEFAULT_MAX_ATTEMPTS};
use crate::error::{Error, Result};
use crate::graph::traversal::{is_bridge, GraphTraversal};
use crate::graph::{EdgeId, Graph, NodeId, UnvisitedEdges};

/// Outcome of [`CircuitWalker::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walk<N> {
    /// Visited nodes in order, start included. Empty if every attempt failed.
    pub route: Vec<N>,
    /// Edge ids in traversal order (`route.len() - 1` entries).
    pub edges: Vec<EdgeId>,
    /// Attempts used: the successful attempt's number, or the cap.
    pub attempts: usize,
}

impl<N: PartialEq> Walk<N> {
    /// True if the walk covers every edge.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.route.is_empty()
    }

    /// True if the walk ends where it started.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.route.len() > 1 && self.route.first() == self.route.last()
    }
}

/// Single attempt result: the route so far and the edges taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt<N> {
    /// Nodes visited, start included.
    pub route: Vec<N>,
    /// Edges taken, in order.
    pub edges: Vec<EdgeId>,
}

/// Builds edge-covering walks with Fleury's algorithm.
///
/// # Example
///
/// ```rust
/// use postman_core::graph::Graph;
/// use postman_core::walker::CircuitWalker;
///
/// let graph = Graph::from_edges([(1, 2, 1.0), (2, 3, 1.0), (3, 4, 5.0), (4, 1, 5.0)]).unwrap();
/// let walk = CircuitWalker::seeded(7).walk(&graph, Some(&1)).unwrap();
/// assert_eq!(walk.edges.len(), 4);
/// assert_eq!(walk.attempts, 1);
/// assert!(walk.is_closed());
/// ```
#[derive(Debug)]
pub struct CircuitWalker<R: Rng = StdRng> {
    rng: R,
    max_attempts: usize,
}

impl CircuitWalker<StdRng> {
    /// Walker with a reproducible `StdRng`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Walker seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Walker built from the `[walk]` configuration section.
    #[must_use]
    pub fn from_config(config: &WalkConfig) -> Self {
        let walker = match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        };
        walker.with_max_attempts(config.max_attempts)
    }
}

impl<R: Rng> CircuitWalker<R> {
    /// Walker drawing its choices from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the attempt cap (at least 1).
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns the attempt cap.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Walks every edge of `graph` exactly once.
    ///
    /// Without `start`, an Eulerian graph starts at a random node and a
    /// semi-Eulerian one at a random odd node. Exhausting the attempt cap is
    /// not an error: the returned walk has an empty route and
    /// `attempts == max_attempts`.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidGraph` if the graph is empty, disconnected, directed
    ///   or has more than two odd nodes.
    /// - `Error::InvalidArgument` if `start` is not a node, or is not an odd
    ///   node of a semi-Eulerian graph.
    pub fn walk<N: NodeId>(&mut self, graph: &Graph<N>, start: Option<&N>) -> Result<Walk<N>> {
        let odd = check_walkable(graph)?;
        if let Some(node) = start {
            if !graph.has_node(node) {
                return Err(Error::InvalidArgument(format!(
                    "start node {node:?} is not in the graph"
                )));
            }
            if !odd.is_empty() && !odd.contains(node) {
                return Err(Error::InvalidArgument(format!(
                    "a semi-Eulerian walk must start at {:?} or {:?}, not {node:?}",
                    odd[0], odd[1]
                )));
            }
        }

        let nodes: Vec<N> = graph.nodes().cloned().collect();
        let total = graph.edge_count();
        for attempt in 1..=self.max_attempts {
            let from = match start {
                Some(node) => node.clone(),
                None => {
                    let pool = if odd.is_empty() { &nodes } else { &odd };
                    match pool.choose(&mut self.rng) {
                        Some(node) => node.clone(),
                        None => break,
                    }
                }
            };

            let Attempt { route, edges } = self.walk_once(graph, &from);
            if edges.len() == total {
                tracing::debug!(attempt, edges = total, "Walk complete");
                return Ok(Walk {
                    route,
                    edges,
                    attempts: attempt,
                });
            }
            tracing::debug!(
                attempt,
                visited = edges.len(),
                total,
                "Walk attempt stranded"
            );
        }

        tracing::warn!(
            attempts = self.max_attempts,
            "Gave up without covering every edge"
        );
        Ok(Walk {
            route: Vec::new(),
            edges: Vec::new(),
            attempts: self.max_attempts,
        })
    }

    /// Runs one attempt from `start` and returns how far it got.
    ///
    /// No validation: a stranded attempt simply returns a partial route.
    pub fn walk_once<N: NodeId>(&mut self, graph: &Graph<N>, start: &N) -> Attempt<N> {
        let mut visited = RoaringTreemap::new();
        let mut route = vec![start.clone()];
        let mut edges = Vec::new();
        let mut current = start.clone();

        loop {
            let view = UnvisitedEdges::new(graph, &visited);
            let options = view.incident_edges(&current);
            if options.is_empty() {
                break;
            }

            let (bridges, non_bridges): (Vec<_>, Vec<_>) = options
                .into_iter()
                .partition(|(id, _)| is_bridge(&view, *id).unwrap_or(false));

            let chosen = non_bridges
                .choose(&mut self.rng)
                .or_else(|| bridges.choose(&mut self.rng))
                .cloned();
            let Some((edge_id, next)) = chosen else {
                break;
            };

            visited.insert(edge_id);
            edges.push(edge_id);
            route.push(next.clone());
            current = next;
        }

        Attempt { route, edges }
    }
}

/// Returns the odd nodes of a walkable graph (none or two).
fn check_walkable<N: NodeId>(graph: &Graph<N>) -> Result<Vec<N>> {
    if graph.is_empty() {
        return Err(Error::InvalidGraph("graph has no edges".to_string()));
    }
    if graph.has_directed_edges() {
        return Err(Error::InvalidGraph(
            "directed edges are not supported".to_string(),
        ));
    }
    if !graph.is_connected() {
        return Err(Error::InvalidGraph("graph is not connected".to_string()));
    }
    let odd = graph.odd_nodes();
    if odd.len() > 2 {
        return Err(Error::InvalidGraph(format!(
            "{} odd-degree nodes; eulerize the graph first",
            odd.len()
        )));
    }
    Ok(odd)
}
