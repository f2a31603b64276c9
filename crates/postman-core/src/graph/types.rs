//! Graph types for the postman edge store.
//!
//! Nodes are plain caller-chosen identifiers; edges carry both endpoints,
//! a non-negative weight and a direction flag.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Stable identifier of an edge inside a [`Graph`](super::Graph).
pub type EdgeId = u64;

/// Cost of traversing an edge once.
pub type Weight = f64;

/// Identity of a graph node.
///
/// Any totally-ordered, hashable, cloneable type qualifies: integers,
/// `char`, `String`, tuples of those, ...  Ordering drives every
/// deterministic tie-break in the crate (odd-node order, DFS order,
/// Dijkstra pops).
pub trait NodeId: Ord + Clone + Hash + Debug {}

impl<T: Ord + Clone + Hash + Debug> NodeId for T {}

/// An edge between two nodes.
///
/// Undirected edges compare equal under endpoint swap, so
/// `GraphEdge::new(1, 2, 4.0)` equals `GraphEdge::new(2, 1, 4.0)`.
/// Equality is by content; two parallel edges with the same content are
/// still distinct entries of a graph, told apart by their [`EdgeId`].
///
/// # Example
///
/// ```rust
/// use postman_core::graph::GraphEdge;
///
/// let edge = GraphEdge::new('A', 'B', 4.0).unwrap();
/// assert_eq!(edge.other_end(&'A').unwrap(), &'B');
/// assert_eq!(edge, GraphEdge::new('B', 'A', 4.0).unwrap());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEdge<N> {
    head: N,
    tail: N,
    weight: Weight,
    #[serde(default)]
    directed: bool,
}

impl<N: NodeId> GraphEdge<N> {
    /// Creates an undirected edge.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the weight is negative or not finite.
    pub fn new(head: N, tail: N, weight: Weight) -> Result<Self> {
        Self::with_direction(head, tail, weight, false)
    }

    /// Creates a directed edge from `head` to `tail`.
    pub fn directed(head: N, tail: N, weight: Weight) -> Result<Self> {
        Self::with_direction(head, tail, weight, true)
    }

    /// Creates an edge with an explicit direction flag.
    pub fn with_direction(head: N, tail: N, weight: Weight, directed: bool) -> Result<Self> {
        let edge = Self {
            head,
            tail,
            weight,
            directed,
        };
        edge.validate()?;
        Ok(edge)
    }

    /// Checks the weight invariant (finite and `>= 0`).
    ///
    /// Deserialized edges bypass the constructors, so the store re-checks
    /// every edge it accepts.
    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "edge {:?}-{:?} has invalid weight {}",
                self.head, self.tail, self.weight
            )));
        }
        Ok(())
    }

    /// Returns the head (start) node.
    #[must_use]
    pub fn head(&self) -> &N {
        &self.head
    }

    /// Returns the tail (end) node.
    #[must_use]
    pub fn tail(&self) -> &N {
        &self.tail
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Returns true for directed edges.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true if both endpoints are the same node.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.head == self.tail
    }

    /// Returns true if `node` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, node: &N) -> bool {
        &self.head == node || &self.tail == node
    }

    /// Returns true if the edge joins `a` and `b`, in either orientation.
    #[must_use]
    pub fn joins(&self, a: &N, b: &N) -> bool {
        (&self.head == a && &self.tail == b) || (&self.head == b && &self.tail == a)
    }

    /// Returns the opposite endpoint of `node`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `node` is not an endpoint.
    pub fn other_end(&self, node: &N) -> Result<&N> {
        if node == &self.head {
            Ok(&self.tail)
        } else if node == &self.tail {
            Ok(&self.head)
        } else {
            Err(Error::InvalidArgument(format!(
                "node {:?} is not an endpoint of edge {:?}-{:?}",
                node, self.head, self.tail
            )))
        }
    }
}

impl<N: PartialEq> PartialEq for GraphEdge<N> {
    // Reason: weights are compared exactly; edges are copied, never recomputed.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed || self.weight != other.weight {
            return false;
        }
        let same = self.head == other.head && self.tail == other.tail;
        let swapped = self.head == other.tail && self.tail == other.head;
        same || (!self.directed && swapped)
    }
}
