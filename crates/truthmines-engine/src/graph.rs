//! Justification graph shared by the path, depth and load-bearing analyses
//!
//! Only epistemic edges (supports, proves, entails, predicts) outside bridge
//! domains take part. Adjacency lists keep edge order.

use crate::config::EngineConfig;
use std::collections::{BTreeSet, HashMap};
use truthmines_domain::{Edge, Relation};

/// One incoming edge of a node
#[derive(Debug, Clone, Copy)]
pub(crate) struct Hop<'a> {
    /// Source of the edge
    pub from: &'a str,
    /// Effective weight (default applied)
    pub weight: f64,
    /// Relation of the edge
    pub relation: &'a Relation,
}

#[derive(Debug, Default)]
pub(crate) struct JustificationGraph<'a> {
    nodes: BTreeSet<&'a str>,
    incoming: HashMap<&'a str, Vec<Hop<'a>>>,
    outgoing: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> JustificationGraph<'a> {
    /// Build from every epistemic, non-bridge edge
    pub fn from_edges(edges: &'a [Edge], config: &EngineConfig) -> Self {
        Self::build(edges, config, |_| true)
    }

    /// Build from epistemic, non-bridge edges whose endpoints are both known
    ///
    /// Known nodes without any such edge are still part of the graph.
    pub fn over_nodes<I>(known: I, edges: &'a [Edge], config: &EngineConfig) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let known: BTreeSet<&str> = known.into_iter().collect();
        let mut graph = Self::build(edges, config, |edge| {
            known.contains(edge.from.as_str()) && known.contains(edge.to.as_str())
        });
        graph.nodes.extend(known);
        graph
    }

    fn build<F>(edges: &'a [Edge], config: &EngineConfig, keep: F) -> Self
    where
        F: Fn(&Edge) -> bool,
    {
        let mut graph = Self::default();

        for edge in edges {
            if !edge.relation.is_epistemic() || edge.is_bridge() || !keep(edge) {
                continue;
            }

            graph.nodes.insert(edge.from.as_str());
            graph.nodes.insert(edge.to.as_str());
            graph.incoming.entry(edge.to.as_str()).or_default().push(Hop {
                from: edge.from.as_str(),
                weight: edge.weight_or(config.default_weight),
                relation: &edge.relation,
            });
            graph
                .outgoing
                .entry(edge.from.as_str())
                .or_default()
                .push(edge.to.as_str());
        }

        graph
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.nodes.iter().copied()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A node of the graph with no incoming edge
    pub fn is_foundation(&self, node: &str) -> bool {
        self.contains(node) && !self.incoming.contains_key(node)
    }

    /// Foundations in id order
    pub fn foundations(&self) -> Vec<&'a str> {
        self.nodes().filter(|node| self.is_foundation(node)).collect()
    }

    pub fn incoming(&self, node: &str) -> &[Hop<'a>] {
        self.incoming.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Targets of the node's outgoing edges, one entry per edge
    pub fn successors(&self, node: &str) -> &[&'a str] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of incoming edges
    pub fn in_degree(&self, node: &str) -> usize {
        self.incoming(node).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_epistemic_non_bridge_edges() {
        let edges = vec![
            Edge::new("a", "b", "supports", "philosophy", Some(0.9)),
            Edge::new("c", "b", "attacks", "philosophy", Some(0.9)),
            Edge::new("d", "b", "proves", "bridge:math→phil", Some(1.0)),
            Edge::new("e", "b", "defines", "philosophy", None),
        ];
        let config = EngineConfig::default();
        let graph = JustificationGraph::from_edges(&edges, &config);

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(graph.in_degree("b"), 1);
        assert!(graph.is_foundation("a"));
        assert!(!graph.is_foundation("b"));
        assert!(!graph.is_foundation("c"));
    }

    #[test]
    fn test_default_weight_applied() {
        let edges = vec![Edge::new("a", "b", "predicts", "physics", None)];
        let config = EngineConfig::default();
        let graph = JustificationGraph::from_edges(&edges, &config);

        assert_eq!(graph.incoming("b")[0].weight, 0.7);
        assert_eq!(graph.successors("a"), &["b"]);
    }

    #[test]
    fn test_over_nodes_drops_unknown_endpoints() {
        let edges = vec![
            Edge::new("a", "b", "supports", "philosophy", None),
            Edge::new("ghost", "b", "supports", "philosophy", None),
        ];
        let config = EngineConfig::default();
        let graph = JustificationGraph::over_nodes(["a", "b", "lonely"], &edges, &config);

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.in_degree("b"), 1);
        assert!(!graph.contains("ghost"));
        assert_eq!(graph.foundations(), vec!["a", "lonely"]);
    }
}
