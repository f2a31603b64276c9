//! # postman-core
//!
//! Route inspection (Chinese Postman) for weighted undirected graphs: find
//! the cheapest closed walk that traverses every edge at least once.
//!
//! The crate is organised leaf first:
//!
//! - [`graph`]: edge-indexed multigraph, degrees, connectivity and bridges.
//! - [`shortest_path`]: Dijkstra between two nodes.
//! - [`eulerize`]: duplicates edges until every node has even degree.
//! - [`walker`]: randomized Fleury walk over the augmented graph.
//! - [`config`]: layered settings for the pairing strategy and the walker.
//!
//! # Quick Start
//!
//! ```rust
//! use postman_core::{solve, Graph, PostmanConfig};
//!
//! let graph = Graph::from_edges([
//!     ('A', 'B', 1.0),
//!     ('B', 'C', 1.0),
//!     ('C', 'D', 5.0),
//!     ('D', 'A', 5.0),
//! ])
//! .unwrap();
//!
//! let solution = solve(&graph, Some(&'A'), &PostmanConfig::default()).unwrap();
//! assert!(solution.eulerization.is_unchanged());
//! assert_eq!(solution.walk.route.len(), 5);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod eulerize;
pub mod graph;
pub mod pipeline;
pub mod shortest_path;
pub mod walker;

#[cfg(test)]
mod shortest_path_tests;
#[cfg(test)]
mod walker_tests;

pub use config::PostmanConfig;
pub use error::{Error, Result};
pub use eulerize::{make_eulerian, Eulerization, Eulerizer};
pub use graph::{EdgeId, Graph, GraphEdge, NodeId, Weight};
pub use pipeline::{solve, Solution};
pub use shortest_path::{find_cost, ShortestPath};
pub use walker::{CircuitWalker, Walk};
