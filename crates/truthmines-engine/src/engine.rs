//! Engine facade
//!
//! Bundles an [`EngineConfig`] with the analysis functions so callers do not
//! have to thread the configuration through every call.

use crate::attacks::{incoming_attacks, Challenge};
use crate::bridges::{cross_domain_links, CrossDomainLinks};
use crate::config::EngineConfig;
use crate::depth::compute_depths;
use crate::focus_path::compute_focus_path;
use crate::load_bearing::compute_load_bearing;
use crate::neighbors::compute_neighbors;
use crate::parser::parse_edges;
use crate::salience::compute_salience;
use crate::tension::{compute_tension, tension_breakdown, TensionBreakdown};
use serde::Serialize;
use std::collections::BTreeMap;
use truthmines_domain::{Edge, Node, NodeId, PathResult};

/// Everything the view needs when the focus changes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusAnalysis {
    /// Hop distance of every node near the focus
    pub neighbors: BTreeMap<NodeId, usize>,
    /// Strongest justification chain of the focus, if any
    pub path: Option<PathResult>,
    /// Salience of every node
    pub salience: BTreeMap<NodeId, f64>,
}

/// Analysis engine with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parse compact relation blocks into edges
    pub fn parse_edges(&self, text: &str) -> Vec<Edge> {
        parse_edges(text)
    }

    /// Hop distances around `focus`; `None` uses the configured radius
    pub fn compute_neighbors(
        &self,
        focus: Option<&str>,
        edges: &[Edge],
        max_hops: Option<usize>,
    ) -> BTreeMap<NodeId, usize> {
        compute_neighbors(focus, edges, max_hops.unwrap_or(self.config.max_hops))
    }

    /// Tension score of a node
    pub fn compute_tension(&self, node_id: &str, edges: &[Edge]) -> f64 {
        compute_tension(node_id, edges, &self.config)
    }

    /// Tension score with its support and attack totals
    pub fn tension_breakdown(&self, node_id: &str, edges: &[Edge]) -> TensionBreakdown {
        tension_breakdown(node_id, edges, &self.config)
    }

    /// Strongest justification chain of `target`
    pub fn compute_focus_path(&self, target: Option<&str>, edges: &[Edge]) -> Option<PathResult> {
        compute_focus_path(target, edges, &self.config)
    }

    /// Salience of every node
    pub fn compute_salience(
        &self,
        nodes: &[Node],
        focus: Option<&str>,
        path: Option<&[NodeId]>,
        neighbors: &BTreeMap<NodeId, usize>,
        edges: &[Edge],
    ) -> BTreeMap<NodeId, f64> {
        compute_salience(nodes, focus, path, neighbors, edges, &self.config)
    }

    /// Attacks and refutations aimed at a node, strongest first
    pub fn incoming_attacks(&self, node_id: &str, edges: &[Edge]) -> Vec<Challenge> {
        incoming_attacks(node_id, edges, &self.config)
    }

    /// Bridge edges touching a node
    pub fn cross_domain_links<'a>(&self, node_id: &str, edges: &'a [Edge]) -> CrossDomainLinks<'a> {
        cross_domain_links(node_id, edges)
    }

    /// Epistemic depth of every node
    pub fn compute_depths(&self, nodes: &[Node], edges: &[Edge]) -> BTreeMap<NodeId, u32> {
        compute_depths(nodes, edges, &self.config)
    }

    /// Fraction of the graph orphaned by removing a node
    pub fn compute_load_bearing(&self, nodes: &[Node], edges: &[Edge], node_id: &str) -> f64 {
        compute_load_bearing(nodes, edges, node_id, &self.config)
    }

    /// Neighbors, strongest path and salience for a focus change
    ///
    /// With no focus there are no neighbors and no path, and salience comes
    /// from tension alone.
    pub fn analyze_focus(&self, nodes: &[Node], focus: Option<&str>, edges: &[Edge]) -> FocusAnalysis {
        let neighbors = self.compute_neighbors(focus, edges, None);
        let path = self.compute_focus_path(focus, edges);
        let salience = self.compute_salience(
            nodes,
            focus,
            path.as_ref().map(|p| p.path.as_slice()),
            &neighbors,
            edges,
        );

        FocusAnalysis { neighbors, path, salience }
    }
}
