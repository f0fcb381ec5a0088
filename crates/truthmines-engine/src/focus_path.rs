//! Strongest justification path from a foundation to a target node
//!
//! The strongest chain is the one whose edge weights have the largest
//! product, not the one with the fewest hops. Costs are `-ln(weight)`, so
//! the maximum product is the minimum summed cost and Dijkstra applies.
//! The search walks backward from the target over incoming edges.

use crate::config::EngineConfig;
use crate::graph::{Hop, JustificationGraph};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use tracing::{debug, trace};
use truthmines_domain::{Edge, PathResult, PathType, Relation};

/// Find the strongest justification chain for `target`
///
/// Returns `None` when there is no target, no edges, or no foundation
/// reachable through epistemic non-bridge edges. A target that is itself a
/// foundation yields a single-node chain of weight 1. When the backward
/// search runs into a cycle of mutual support, the cycle is reported as a
/// coherentist result instead of a foundation chain.
pub fn compute_focus_path(
    target: Option<&str>,
    edges: &[Edge],
    config: &EngineConfig,
) -> Option<PathResult> {
    let target = target?;
    if edges.is_empty() {
        return None;
    }

    let graph = JustificationGraph::from_edges(edges, config);

    if graph.is_foundation(target) {
        return Some(PathResult::foundation(target));
    }

    let mut best: HashMap<&str, Trail> = HashMap::new();
    let mut expanded: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut strongest: Option<Trail> = None;

    best.insert(target, Trail::start(target));
    frontier.push(Frontier { cost: 0.0, node: target });

    while let Some(Frontier { node: current, .. }) = frontier.pop() {
        if !expanded.insert(current) {
            continue;
        }

        let Some(trail) = best.get(current).cloned() else {
            continue;
        };

        if graph.is_foundation(current) {
            // Keep searching: another foundation may give a stronger chain
            if strongest.as_ref().map_or(true, |s| trail.cost < s.cost) {
                strongest = Some(trail);
            }
            continue;
        }

        for hop in graph.incoming(current) {
            if trail.nodes.contains(&hop.from) {
                debug!(target, entry_point = hop.from, "Coherentist cycle found");
                return Some(trail.into_cycle(hop.from));
            }

            let cost = trail.cost - hop.weight.ln();
            let improves = best.get(hop.from).map_or(true, |known| cost < known.cost);

            if improves {
                trace!(from = hop.from, to = current, cost, "Relaxed edge");
                best.insert(hop.from, trail.extend(hop, cost));
                frontier.push(Frontier { cost, node: hop.from });
            }
        }
    }

    debug!(target, expanded = expanded.len(), found = strongest.is_some(), "Strongest path search finished");

    if let Some(trail) = strongest {
        return Some(trail.into_chain());
    }

    let bridge_supported = edges
        .iter()
        .any(|edge| edge.to == target && edge.is_bridge() && edge.relation.is_epistemic());
    if bridge_supported {
        // Bridge-only justification is not resolved yet
        debug!(target, "Node is justified only through bridge edges");
    }

    None
}

/// Best-known chain from the target back to some node
#[derive(Debug, Clone)]
struct Trail<'a> {
    cost: f64,
    /// Target first, in the order the search walked
    nodes: Vec<&'a str>,
    relations: Vec<&'a Relation>,
}

impl<'a> Trail<'a> {
    fn start(target: &'a str) -> Self {
        Self {
            cost: 0.0,
            nodes: vec![target],
            relations: Vec::new(),
        }
    }

    fn extend(&self, hop: &Hop<'a>, cost: f64) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.push(hop.from);
        let mut relations = self.relations.clone();
        relations.push(hop.relation);

        Self { cost, nodes, relations }
    }

    fn weight(&self) -> f64 {
        (-self.cost).exp()
    }

    fn path_type(&self) -> PathType {
        PathType::classify(self.relations.iter().copied())
    }

    fn into_chain(self) -> PathResult {
        PathResult {
            path_weight: self.weight(),
            path_type: self.path_type(),
            path: self.nodes.iter().rev().map(|node| node.to_string()).collect(),
            is_coherentist: false,
            entry_point: None,
        }
    }

    fn into_cycle(self, entry_point: &str) -> PathResult {
        let mut path: Vec<String> = self.nodes.iter().map(|node| node.to_string()).collect();
        path.push(entry_point.to_string());
        path.reverse();

        PathResult {
            path_weight: self.weight(),
            path_type: self.path_type(),
            path,
            is_coherentist: true,
            entry_point: Some(entry_point.to_string()),
        }
    }
}

/// Frontier entry: lowest cost first, then lowest node id
#[derive(Debug, Clone, Copy)]
struct Frontier<'a> {
    cost: f64,
    node: &'a str,
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier<'_> {}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(from: &str, to: &str, relation: &str, weight: f64) -> Edge {
        Edge::new(from, to, relation, "philosophy", Some(weight))
    }

    fn resolve(target: &str, edges: &[Edge]) -> Option<PathResult> {
        compute_focus_path(Some(target), edges, &EngineConfig::default())
    }

    #[test]
    fn test_no_target() {
        let edges = vec![edge("a", "b", "supports", 0.9)];
        assert!(compute_focus_path(None, &edges, &EngineConfig::default()).is_none());
    }

    #[test]
    fn test_no_edges() {
        assert!(resolve("x", &[]).is_none());
    }

    #[test]
    fn test_foundation_target() {
        let edges = vec![edge("axiom", "theorem", "proves", 1.0)];
        let result = resolve("axiom", &edges).unwrap();

        assert_eq!(result, PathResult::foundation("axiom"));
    }

    #[test]
    fn test_linear_chain() {
        let edges = vec![
            edge("a", "b", "supports", 0.9),
            edge("b", "c", "proves", 1.0),
            edge("c", "d", "supports", 0.8),
        ];
        let result = resolve("d", &edges).unwrap();

        assert_eq!(result.path, vec!["a", "b", "c", "d"]);
        assert!((result.path_weight - 0.72).abs() < 1e-9);
        assert_eq!(result.path_type, PathType::Mixed);
        assert!(!result.is_coherentist);
        assert!(result.entry_point.is_none());
    }

    #[test]
    fn test_strongest_over_shortest() {
        let edges = vec![
            edge("foundation", "selected", "supports", 0.5),
            edge("foundation", "middle", "supports", 0.9),
            edge("middle", "selected", "supports", 0.9),
        ];
        let result = resolve("selected", &edges).unwrap();

        assert_eq!(result.path, vec!["foundation", "middle", "selected"]);
        assert!((result.path_weight - 0.81).abs() < 1e-9);
        assert_eq!(result.path_type, PathType::Inductive);
    }

    #[test]
    fn test_best_of_several_foundations() {
        let edges = vec![
            edge("weak", "t", "supports", 0.3),
            edge("strong", "t", "proves", 0.95),
        ];
        let result = resolve("t", &edges).unwrap();

        assert_eq!(result.path, vec!["strong", "t"]);
        assert_eq!(result.path_type, PathType::Deductive);
    }

    #[test]
    fn test_deductive_chain() {
        let edges = vec![
            edge("axiom", "lemma", "proves", 1.0),
            edge("lemma", "theorem", "entails", 1.0),
        ];
        let result = resolve("theorem", &edges).unwrap();

        assert_eq!(result.path_type, PathType::Deductive);
        assert_eq!(result.path_weight, 1.0);
    }

    #[test]
    fn test_cycle_is_coherentist() {
        let edges = vec![
            edge("foundation", "a", "supports", 0.9),
            edge("a", "b", "supports", 0.9),
            edge("b", "c", "supports", 0.9),
            edge("c", "a", "supports", 0.9),
        ];
        let result = resolve("b", &edges).unwrap();

        assert!(result.is_coherentist);
        let entry = result.entry_point.clone().unwrap();
        assert!(result.contains(&entry));
        assert_eq!(result.path.first(), Some(&entry));
    }

    #[test]
    fn test_pure_cycle_without_foundation() {
        let edges = vec![
            edge("p", "q", "supports", 0.8),
            edge("q", "p", "supports", 0.8),
        ];
        let result = resolve("p", &edges).unwrap();

        assert!(result.is_coherentist);
        assert_eq!(result.path, vec!["p", "q", "p"]);
        assert_eq!(result.entry_point.as_deref(), Some("p"));
        assert!((result.path_weight - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_self_support_is_coherentist() {
        let edges = vec![
            edge("root", "x", "supports", 0.9),
            edge("x", "x", "supports", 0.9),
        ];
        let result = resolve("x", &edges).unwrap();

        assert!(result.is_coherentist);
        assert_eq!(result.entry_point.as_deref(), Some("x"));
    }

    #[test]
    fn test_non_epistemic_edges_ignored() {
        let edges = vec![
            edge("a", "b", "cites", 0.9),
            edge("c", "b", "attacks", 0.9),
        ];
        assert!(resolve("b", &edges).is_none());
    }

    #[test]
    fn test_bridge_only_support_is_none() {
        let edges = vec![
            Edge::new("m", "p", "supports", "bridge:math→phil", Some(0.9)),
            edge("x", "y", "supports", 0.9),
        ];
        assert!(resolve("p", &edges).is_none());
    }

    #[test]
    fn test_bridge_edges_not_used_in_chain() {
        let edges = vec![
            Edge::new("bridge_src", "t", "proves", "bridge:math→phil", Some(1.0)),
            edge("local", "t", "supports", 0.6),
        ];
        let result = resolve("t", &edges).unwrap();
        assert_eq!(result.path, vec!["local", "t"]);
    }

    #[test]
    fn test_unknown_target() {
        let edges = vec![edge("a", "b", "supports", 0.9)];
        assert!(resolve("missing", &edges).is_none());
    }

    #[test]
    fn test_missing_weight_uses_default() {
        let edges = vec![Edge::new("a", "b", "supports", "philosophy", None)];
        let result = resolve("b", &edges).unwrap();
        assert!((result.path_weight - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_tie_broken_by_node_id() {
        let edges = vec![
            edge("zeta", "t", "supports", 0.8),
            edge("alpha", "t", "supports", 0.8),
        ];
        let result = resolve("t", &edges).unwrap();
        assert_eq!(result.path, vec!["alpha", "t"]);
    }

    #[test]
    fn test_idempotent() {
        let edges = vec![
            edge("f", "a", "supports", 0.9),
            edge("a", "b", "entails", 0.7),
            edge("f", "b", "predicts", 0.6),
        ];
        assert_eq!(resolve("b", &edges), resolve("b", &edges));
    }

    #[test]
    fn test_frontier_ordering() {
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { cost: 0.5, node: "b" });
        heap.push(Frontier { cost: 0.1, node: "z" });
        heap.push(Frontier { cost: 0.5, node: "a" });

        assert_eq!(heap.pop().unwrap().node, "z");
        assert_eq!(heap.pop().unwrap().node, "a");
        assert_eq!(heap.pop().unwrap().node, "b");
    }
}
