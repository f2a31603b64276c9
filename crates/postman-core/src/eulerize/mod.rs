//! Eulerian-ization of connected undirected graphs.
//!
//! Pipeline: double dead-end edges, pair the remaining odd-degree nodes at
//! minimum total shortest-path cost, then duplicate every edge on the chosen
//! paths. Only edges are added; original edges are never removed.

mod engine;
pub mod pairing;


pub use engine::{find_dead_ends, make_eulerian, Eulerization, Eulerizer};
pub use pairing::{BruteForcePairing, CostMatrix, GreedyPairing, PairingStrategy};
