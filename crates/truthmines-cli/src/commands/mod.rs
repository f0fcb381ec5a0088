//! Command implementations.
//!
//! Every command reads its inputs through a [`Context`] and returns the
//! rendered output; printing is left to the caller.

pub mod attacks;
pub mod bridges;
pub mod depths;
pub mod load_bearing;
pub mod neighbors;
pub mod path;
pub mod salience;
pub mod tension;

pub use self::attacks::execute_attacks;
pub use self::bridges::execute_bridges;
pub use self::depths::execute_depths;
pub use self::load_bearing::execute_load_bearing;
pub use self::neighbors::execute_neighbors;
pub use self::path::execute_path;
pub use self::salience::execute_salience;
pub use self::tension::execute_tension;

use crate::error::{CliError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;
use truthmines_domain::{Edge, Node};
use truthmines_engine::{filter_by_domain, load_nodes, Engine};

/// Loaded graph inputs shared by all commands.
pub struct Context {
    /// Engine configured from the CLI config
    pub engine: Engine,
    /// Parsed edges
    pub edges: Vec<Edge>,
    /// Nodes, when `--nodes` was given
    pub nodes: Option<Vec<Node>>,
    /// Domains node listings are restricted to (empty = all)
    pub domains: Vec<String>,
}

impl Context {
    /// Read the edge file and, if given, the node file or directory.
    pub fn load(
        engine: Engine,
        edges_path: Option<&Path>,
        nodes_path: Option<&Path>,
        domains: Vec<String>,
    ) -> Result<Self> {
        let edges_path = edges_path.ok_or(CliError::MissingInput("edge file (--edges)"))?;
        let text = fs::read_to_string(edges_path)?;
        let edges = engine.parse_edges(&text);
        debug!(path = %edges_path.display(), edges = edges.len(), "Loaded edges");

        let nodes = nodes_path.map(load_nodes).transpose()?;

        Ok(Self {
            engine,
            edges,
            nodes,
            domains,
        })
    }

    /// The node list, or an error for commands that cannot run without it.
    pub fn require_nodes(&self) -> Result<&[Node]> {
        self.nodes
            .as_deref()
            .ok_or(CliError::MissingInput("node data (--nodes)"))
    }

    /// Nodes passing the domain filter.
    pub fn listed_nodes(&self) -> Result<Vec<&Node>> {
        Ok(filter_by_domain(self.require_nodes()?, &self.domains))
    }

    /// Whether a node ID belongs in a listing.
    ///
    /// Without a domain filter everything is listed. With one, the node must
    /// be known and in one of the domains.
    pub fn is_listed(&self, id: &str) -> bool {
        if self.domains.is_empty() {
            return true;
        }
        self.nodes
            .as_deref()
            .and_then(|nodes| nodes.iter().find(|n| n.id == id))
            .is_some_and(|node| self.domains.iter().any(|d| *d == node.domain))
    }
}
