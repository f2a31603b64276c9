//! In-memory graph model.
//!
//! Provides the edge types, the edge-indexed [`Graph`] store and the
//! depth-first traversal used for connectivity and bridge tests.
//!
//! # Example
//!
//! ```rust
//! use postman_core::graph::Graph;
//!
//! let mut graph = Graph::new();
//! let ab = graph.add_edge("A", "B", 1.0).unwrap();
//! graph.add_edge("B", "C", 1.0).unwrap();
//! graph.add_edge("C", "A", 1.0).unwrap();
//!
//! assert!(graph.is_eulerian());
//! assert!(!graph.is_bridge(ab).unwrap());
//! ```

mod edge_store;
pub mod traversal;
mod types;

#[cfg(test)]
mod traversal_tests;

pub use edge_store::Graph;
pub use traversal::{GraphTraversal, UnvisitedEdges};
pub use types::{EdgeId, GraphEdge, NodeId, Weight};
