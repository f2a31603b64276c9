//! End-to-end solve: eulerize, then walk the augmented graph.

use crate::config::PostmanConfig;
use crate::error::Result;
use crate::eulerize::{Eulerization, Eulerizer};
use crate::graph::{Graph, NodeId, Weight};
use crate::walker::{CircuitWalker, Walk};

/// Route inspection result.
#[derive(Debug, Clone)]
pub struct Solution<N: NodeId> {
    /// Augmentation applied to the input graph.
    pub eulerization: Eulerization<N>,
    /// Walk over the augmented graph.
    pub walk: Walk<N>,
}

impl<N: NodeId> Solution<N> {
    /// Cost of the input graph.
    #[must_use]
    pub fn original_cost(&self) -> Weight {
        self.eulerization.graph.total_weight() - self.eulerization.added_cost
    }

    /// Cost of the route, i.e. of the augmented graph.
    #[must_use]
    pub fn route_cost(&self) -> Weight {
        self.eulerization.graph.total_weight()
    }

    /// True if the walker covered every edge.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.walk.is_complete()
    }
}

/// Eulerizes `graph` and walks the result.
///
/// On a semi-Eulerian input the augmentation pairs the two odd nodes, so the
/// route is always closed. `start` must be a node of `graph`.
///
/// # Errors
///
/// Anything [`Eulerizer::eulerize`] or [`CircuitWalker::walk`] reports.
///
/// # Example
///
/// ```rust
/// use postman_core::config::PostmanConfig;
/// use postman_core::graph::Graph;
/// use postman_core::solve;
///
/// let graph = Graph::from_edges([(1, 2, 4.0), (1, 3, 4.0), (2, 3, 1.0), (2, 4, 4.0), (3, 4, 4.0)])
///     .unwrap();
/// let mut config = PostmanConfig::default();
/// config.walk.seed = Some(1);
/// let solution = solve(&graph, Some(&1), &config).unwrap();
/// assert_eq!(solution.route_cost(), 18.0);
/// assert_eq!(solution.walk.edges.len(), 6);
/// ```
pub fn solve<N: NodeId>(
    graph: &Graph<N>,
    start: Option<&N>,
    config: &PostmanConfig,
) -> Result<Solution<N>> {
    let eulerizer = Eulerizer::from_config(&config.pairing);
    let eulerization = eulerizer.eulerize(graph)?;
    let walk = CircuitWalker::from_config(&config.walk).walk(&eulerization.graph, start)?;
    Ok(Solution { eulerization, walk })
}
