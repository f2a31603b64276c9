//! Error types for postman-core.

use thiserror::Error;

use crate::graph::EdgeId;

/// Errors raised by graph construction, augmentation and walking.
///
/// An exhausted walk is not an error: it is reported as a
/// [`Walk`](crate::walker::Walk) with an empty route.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied value does not fit the graph (unknown node,
    /// node not on the edge, negative weight, bad forced start).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No edge with this id exists in the graph.
    #[error("Edge {0} not found")]
    InvalidReference(EdgeId),

    /// The graph breaks an invariant the operation relies on.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// No path joins the two nodes.
    #[error("No path from {from} to {to}")]
    Unreachable {
        /// Source node (debug formatted).
        from: String,
        /// Target node (debug formatted).
        to: String,
    },

    /// Exhaustive pairing refused: too many odd-degree nodes.
    #[error("Pairing limit exceeded: {odd_nodes} odd nodes (limit {limit})")]
    PairingLimitExceeded {
        /// Odd-degree nodes left after dead-end doubling.
        odd_nodes: usize,
        /// Configured ceiling.
        limit: usize,
    },

    /// Configuration could not be loaded or is out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Edge list (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for postman operations.
pub type Result<T> = std::result::Result<T, Error>;
