//! Node loading from JSON
//!
//! Two layouts are supported: a graph summary (one JSON array of nodes) and
//! a directory holding one JSON file per node.

use crate::error::{EngineError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use truthmines_domain::Node;

/// Parse a single node record
pub fn parse_node(json: &str) -> Result<Node> {
    let node: Node = serde_json::from_str(json)?;
    validate_node(&node)?;
    Ok(node)
}

/// Parse a graph summary: a JSON array of nodes
pub fn parse_graph_summary(json: &str) -> Result<Vec<Node>> {
    let nodes: Vec<Node> = serde_json::from_str(json)?;
    for node in &nodes {
        validate_node(node)?;
    }
    Ok(nodes)
}

/// Load every `*.json` node file in a directory, sorted by file name
///
/// Other files are ignored. A file that fails to parse aborts the load.
pub fn load_nodes_from_dir(path: &Path) -> Result<Vec<Node>> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Directory not found: {}", path.display()),
        )
        .into());
    }
    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Path is not a directory: {}", path.display()),
        )
        .into());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let file_path = entry?.path();
        if file_path.is_file() && file_path.extension().is_some_and(|ext| ext == "json") {
            files.push(file_path);
        }
    }
    files.sort();

    let mut nodes = Vec::with_capacity(files.len());
    for file_path in &files {
        let json = fs::read_to_string(file_path)?;
        let node = parse_node(&json).map_err(|e| match e {
            EngineError::InvalidNode(msg) => {
                EngineError::InvalidNode(format!("{}: {}", file_path.display(), msg))
            }
            other => other,
        })?;
        nodes.push(node);
    }

    debug!(path = %path.display(), count = nodes.len(), "Loaded node files");
    Ok(nodes)
}

/// Load nodes from either a graph summary file or a node directory
pub fn load_nodes(path: &Path) -> Result<Vec<Node>> {
    if path.is_dir() {
        return load_nodes_from_dir(path);
    }

    let json = fs::read_to_string(path)?;
    let nodes = parse_graph_summary(&json)?;
    debug!(path = %path.display(), count = nodes.len(), "Loaded graph summary");
    Ok(nodes)
}

fn validate_node(node: &Node) -> Result<()> {
    if node.id.trim().is_empty() {
        return Err(EngineError::InvalidNode(format!(
            "node '{}' has an empty id",
            node.title
        )));
    }
    Ok(())
}
