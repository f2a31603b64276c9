//! Edge-list file loading.
//!
//! Format: a JSON array of `{"head": "A", "tail": "B", "weight": 4.0}`
//! objects, with an optional `"directed"` flag.

use anyhow::{Context, Result};
use postman_core::{Graph, GraphEdge};
use std::path::Path;

/// Reads an edge-list JSON file into a graph.
pub fn load_edge_list(path: &Path) -> Result<Graph<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read edge list '{}'", path.display()))?;
    parse_edge_list(&content).with_context(|| format!("Invalid edge list '{}'", path.display()))
}

/// Parses edge-list JSON text.
pub fn parse_edge_list(json: &str) -> Result<Graph<String>> {
    let edges: Vec<GraphEdge<String>> =
        serde_json::from_str(json).map_err(postman_core::Error::from)?;
    let graph = Graph::from_edge_list(edges)?;
    tracing::debug!(
        edges = graph.edge_count(),
        nodes = graph.node_count(),
        "Loaded edge list"
    );
    Ok(graph)
}
