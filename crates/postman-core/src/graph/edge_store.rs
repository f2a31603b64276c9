//! Edge-indexed graph store.
//!
//! Edges live in an id-keyed map; nodes are derived from edge endpoints and
//! indexed to their incident edge ids. Ids are handed out from a counter and
//! never reused, so an id stays valid for as long as its edge exists.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};

use super::traversal;
use super::types::{EdgeId, GraphEdge, NodeId, Weight};

/// Weighted multigraph keyed by stable edge ids.
///
/// Parallel edges and self-loops are allowed. All node-level views
/// (`nodes`, `odd_nodes`, `node_degrees`) come back in ascending node order.
///
/// # Example
///
/// ```rust
/// use postman_core::graph::Graph;
///
/// let graph = Graph::from_edges([(1, 2, 4.0), (1, 3, 4.0), (2, 3, 1.0), (2, 4, 4.0), (3, 4, 4.0)])
///     .unwrap();
/// assert_eq!(graph.odd_nodes(), vec![2, 3]);
/// assert_eq!(graph.total_weight(), 17.0);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    /// All edges indexed by ID.
    edges: BTreeMap<EdgeId, GraphEdge<N>>,
    /// Incident edges: node -> Vec<edge_id>. A self-loop is listed once.
    incident: BTreeMap<N, Vec<EdgeId>>,
    /// Next id to hand out.
    next_id: EdgeId,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self {
            edges: BTreeMap::new(),
            incident: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<N: NodeId> Graph<N> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(head, tail, weight)` undirected edges.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` on the first invalid weight.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, Weight)>,
    {
        let mut graph = Self::new();
        for (head, tail, weight) in edges {
            graph.add_edge(head, tail, weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph from already constructed edges (e.g. a deserialized list).
    pub fn from_edge_list<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = GraphEdge<N>>,
    {
        let mut graph = Self::new();
        graph.add_edges(edges)?;
        Ok(graph)
    }

    // ── Edge CRUD ──────────────────────────────────────────────────────

    /// Appends an undirected edge and returns its id.
    ///
    /// No deduplication: adding the same pair twice creates a parallel edge.
    pub fn add_edge(&mut self, head: N, tail: N, weight: Weight) -> Result<EdgeId> {
        self.insert_edge(GraphEdge::new(head, tail, weight)?)
    }

    /// Appends a directed edge and returns its id.
    pub fn add_directed_edge(&mut self, head: N, tail: N, weight: Weight) -> Result<EdgeId> {
        self.insert_edge(GraphEdge::directed(head, tail, weight)?)
    }

    /// Appends every edge in order, returning the assigned ids.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<Vec<EdgeId>>
    where
        I: IntoIterator<Item = GraphEdge<N>>,
    {
        edges.into_iter().map(|e| self.insert_edge(e)).collect()
    }

    /// Appends a constructed edge and returns its id.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the edge weight is invalid.
    pub fn insert_edge(&mut self, edge: GraphEdge<N>) -> Result<EdgeId> {
        edge.validate()?;
        let id = self.next_id;
        self.next_id += 1;

        self.incident
            .entry(edge.head().clone())
            .or_default()
            .push(id);
        if !edge.is_self_loop() {
            self.incident
                .entry(edge.tail().clone())
                .or_default()
                .push(id);
        }
        self.edges.insert(id, edge);
        Ok(id)
    }

    /// Removes an edge by id. A node left without edges leaves the graph.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidReference` if no such edge exists.
    pub fn remove_edge(&mut self, edge_id: EdgeId) -> Result<GraphEdge<N>> {
        let edge = self
            .edges
            .remove(&edge_id)
            .ok_or(Error::InvalidReference(edge_id))?;
        self.detach(edge.head(), edge_id);
        if !edge.is_self_loop() {
            self.detach(edge.tail(), edge_id);
        }
        Ok(edge)
    }

    /// Removes several edges by id.
    ///
    /// All ids are checked first, so either every edge is removed or none is.
    /// A repeated id counts as a missing one.
    pub fn remove_edges(&mut self, edge_ids: &[EdgeId]) -> Result<Vec<GraphEdge<N>>> {
        let mut seen = BTreeSet::new();
        for &id in edge_ids {
            if !seen.insert(id) || !self.edges.contains_key(&id) {
                return Err(Error::InvalidReference(id));
            }
        }
        edge_ids.iter().map(|&id| self.remove_edge(id)).collect()
    }

    fn detach(&mut self, node: &N, edge_id: EdgeId) {
        if let Some(ids) = self.incident.get_mut(node) {
            ids.retain(|&id| id != edge_id);
            if ids.is_empty() {
                self.incident.remove(node);
            }
        }
    }

    /// Gets an edge by its ID.
    #[must_use]
    pub fn edge(&self, edge_id: EdgeId) -> Option<&GraphEdge<N>> {
        self.edges.get(&edge_id)
    }

    /// Checks if an edge with the given ID exists.
    #[must_use]
    pub fn has_edge(&self, edge_id: EdgeId) -> bool {
        self.edges.contains_key(&edge_id)
    }

    /// Returns the number of edges (parallel edges counted individually).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns all edge IDs in ascending order.
    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.keys().copied()
    }

    /// Returns all edges with their ids, in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &GraphEdge<N>)> {
        self.edges.iter().map(|(&id, edge)| (id, edge))
    }

    /// Returns a copy of every edge, in id order.
    #[must_use]
    pub fn to_edge_list(&self) -> Vec<GraphEdge<N>> {
        self.edges.values().cloned().collect()
    }

    /// Returns all edges touching `node`.
    #[must_use]
    pub fn edges_incident(&self, node: &N) -> Vec<(EdgeId, &GraphEdge<N>)> {
        self.incident_ids(node)
            .iter()
            .filter_map(|&id| self.edges.get(&id).map(|e| (id, e)))
            .collect()
    }

    pub(crate) fn incident_ids(&self, node: &N) -> &[EdgeId] {
        self.incident.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the endpoint of `edge_id` opposite to `node`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidReference` for an unknown edge, `Error::InvalidArgument`
    /// if `node` is not one of its endpoints.
    pub fn other_end(&self, edge_id: EdgeId, node: &N) -> Result<&N> {
        self.edge(edge_id)
            .ok_or(Error::InvalidReference(edge_id))?
            .other_end(node)
    }

    /// Returns the ids of every edge joining `a` and `b`, in either orientation.
    #[must_use]
    pub fn find_edges(&self, a: &N, b: &N) -> Vec<EdgeId> {
        self.incident_ids(a)
            .iter()
            .copied()
            .filter(|id| self.edges.get(id).is_some_and(|e| e.joins(a, b)))
            .collect()
    }

    /// Returns the cheapest weight among the edges joining `a` and `b`.
    #[must_use]
    pub fn edge_cost(&self, a: &N, b: &N) -> Option<Weight> {
        self.find_edges(a, b)
            .into_iter()
            .filter_map(|id| self.edges.get(&id).map(GraphEdge::weight))
            .reduce(Weight::min)
    }

    // ── Nodes and degrees ──────────────────────────────────────────────

    /// Returns all nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.incident.keys()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.incident.len()
    }

    /// Returns true if `node` is an endpoint of at least one edge.
    #[must_use]
    pub fn has_node(&self, node: &N) -> bool {
        self.incident.contains_key(node)
    }

    /// Returns the degree ("order") of a node; self-loops count twice.
    #[must_use]
    pub fn degree(&self, node: &N) -> usize {
        self.incident_ids(node)
            .iter()
            .filter_map(|id| self.edges.get(id))
            .map(|e| if e.is_self_loop() { 2 } else { 1 })
            .sum()
    }

    /// Returns the degree of every node.
    #[must_use]
    pub fn node_degrees(&self) -> BTreeMap<N, usize> {
        self.nodes().map(|n| (n.clone(), self.degree(n))).collect()
    }

    /// Returns odd-degree nodes in ascending order.
    #[must_use]
    pub fn odd_nodes(&self) -> Vec<N> {
        self.nodes()
            .filter(|n| self.degree(n) % 2 == 1)
            .cloned()
            .collect()
    }

    /// True if every node has even degree.
    #[must_use]
    pub fn is_eulerian(&self) -> bool {
        self.nodes().all(|n| self.degree(n) % 2 == 0)
    }

    /// True if exactly two nodes have odd degree.
    #[must_use]
    pub fn is_semi_eulerian(&self) -> bool {
        self.odd_nodes().len() == 2
    }

    /// Returns the sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.edges.values().map(GraphEdge::weight).sum()
    }

    /// True if any edge carries the directed flag.
    #[must_use]
    pub fn has_directed_edges(&self) -> bool {
        self.edges.values().any(GraphEdge::is_directed)
    }

    // ── Connectivity ───────────────────────────────────────────────────

    /// True if every node is reachable from the smallest one.
    ///
    /// The empty graph counts as connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        match self.nodes().next() {
            Some(first) => traversal::reachable_count(self, first, None) == self.node_count(),
            None => true,
        }
    }

    /// True if removing `edge_id` disconnects its endpoints' component.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidReference` if no such edge exists.
    pub fn is_bridge(&self, edge_id: EdgeId) -> Result<bool> {
        traversal::is_bridge(self, edge_id).ok_or(Error::InvalidReference(edge_id))
    }
}
