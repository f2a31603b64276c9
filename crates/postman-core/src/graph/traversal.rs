//! Depth-first traversal and bridge detection.
//!
//! Generic over [`GraphTraversal`], so the same DFS runs on a whole
//! [`Graph`] and on an [`UnvisitedEdges`] overlay that hides the edges a walk
//! has already used.

use roaring::RoaringTreemap;
use std::collections::BTreeSet;

use super::edge_store::Graph;
use super::types::{EdgeId, NodeId};

/// Trait for graph traversal; any edge view can implement this.
///
/// Edges are treated as undirected.
pub trait GraphTraversal {
    /// Node identifier of the underlying graph.
    type Node: NodeId;

    /// Returns `(edge_id, neighbour)` for every edge touching `node`.
    ///
    /// A self-loop is reported once, with `node` as its own neighbour.
    fn incident_edges(&self, node: &Self::Node) -> Vec<(EdgeId, Self::Node)>;

    /// Returns the endpoints of an edge visible in this view.
    fn endpoints(&self, edge_id: EdgeId) -> Option<(Self::Node, Self::Node)>;
}

impl<N: NodeId> GraphTraversal for Graph<N> {
    type Node = N;

    fn incident_edges(&self, node: &N) -> Vec<(EdgeId, N)> {
        self.edges_incident(node)
            .into_iter()
            .filter_map(|(id, e)| e.other_end(node).ok().map(|n| (id, n.clone())))
            .collect()
    }

    fn endpoints(&self, edge_id: EdgeId) -> Option<(N, N)> {
        self.edge(edge_id)
            .map(|e| (e.head().clone(), e.tail().clone()))
    }
}

/// A graph restricted to the edges not yet marked visited.
///
/// Borrowing both the base graph and the visited set keeps a walk attempt
/// from ever cloning the graph.
#[derive(Debug, Clone)]
pub struct UnvisitedEdges<'a, N: NodeId> {
    graph: &'a Graph<N>,
    visited: &'a RoaringTreemap,
}

impl<'a, N: NodeId> UnvisitedEdges<'a, N> {
    /// Creates a view of `graph` without the edges in `visited`.
    #[must_use]
    pub fn new(graph: &'a Graph<N>, visited: &'a RoaringTreemap) -> Self {
        Self { graph, visited }
    }

    /// Returns the number of edges still visible.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.graph.edge_count() as u64 - self.visited.len()
    }
}

impl<N: NodeId> GraphTraversal for UnvisitedEdges<'_, N> {
    type Node = N;

    fn incident_edges(&self, node: &N) -> Vec<(EdgeId, N)> {
        self.graph
            .incident_edges(node)
            .into_iter()
            .filter(|(id, _)| !self.visited.contains(*id))
            .collect()
    }

    fn endpoints(&self, edge_id: EdgeId) -> Option<(N, N)> {
        if self.visited.contains(edge_id) {
            return None;
        }
        self.graph.endpoints(edge_id)
    }
}

/// Returns the nodes reachable from `start`, in depth-first visiting order.
///
/// From each node the walk moves to the smallest unvisited neighbour and
/// backtracks when none is left. `excluded` hides one edge, as if removed.
#[must_use]
pub fn depth_first_order<G>(graph: &G, start: &G::Node, excluded: Option<EdgeId>) -> Vec<G::Node>
where
    G: GraphTraversal + ?Sized,
{
    let mut visited = BTreeSet::new();
    let mut order = vec![start.clone()];
    let mut stack = vec![start.clone()];
    visited.insert(start.clone());

    while let Some(current) = stack.last() {
        let next = graph
            .incident_edges(current)
            .into_iter()
            .filter(|(id, _)| Some(*id) != excluded)
            .map(|(_, neighbour)| neighbour)
            .filter(|neighbour| !visited.contains(neighbour))
            .min();

        match next {
            Some(node) => {
                visited.insert(node.clone());
                order.push(node.clone());
                stack.push(node);
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Counts the nodes reachable from `start` (including `start`).
#[must_use]
pub fn reachable_count<G>(graph: &G, start: &G::Node, excluded: Option<EdgeId>) -> usize
where
    G: GraphTraversal + ?Sized,
{
    depth_first_order(graph, start, excluded).len()
}

/// Returns whether `edge_id` is a bridge of `graph`, or `None` if the view
/// does not contain the edge.
///
/// Runs a DFS from the edge's tail with the edge removed and compares the
/// visit count with the count reachable when the edge is present. Equal
/// counts mean the endpoints stay connected. Self-loops are never bridges.
#[must_use]
pub fn is_bridge<G>(graph: &G, edge_id: EdgeId) -> Option<bool>
where
    G: GraphTraversal + ?Sized,
{
    let (head, tail) = graph.endpoints(edge_id)?;
    if head == tail {
        return Some(false);
    }
    let with_edge = reachable_count(graph, &tail, None);
    let without_edge = reachable_count(graph, &tail, Some(edge_id));
    Some(without_edge < with_edge)
}
