//! Tension scoring - how contested a node is
//!
//! Tension rewards balanced conflict: the geometric mean of incoming support
//! and incoming attack, divided by a calibration constant and capped at 1.

use crate::config::EngineConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use truthmines_domain::{Edge, NodeId};

/// Incoming support and attack totals together with the resulting score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TensionBreakdown {
    /// Sum of weights over incoming supports/proves/entails
    pub support: f64,
    /// Sum of weights over incoming attacks/refutes
    pub attack: f64,
    /// Tension in [0, 1]
    pub score: f64,
}

impl TensionBreakdown {
    fn add(&mut self, edge: &Edge, config: &EngineConfig) {
        if edge.relation.is_support() {
            self.support += edge.weight_or(config.default_weight);
        } else if edge.relation.is_attack() {
            self.attack += edge.weight_or(config.default_weight);
        }
    }

    fn finish(mut self, config: &EngineConfig) -> Self {
        self.score = score(self.support, self.attack, config);
        self
    }
}

/// Tension score of a node in [0, 1]
///
/// Zero unless the node has both incoming support and incoming attack.
/// Outgoing edges never contribute.
pub fn compute_tension(node_id: &str, edges: &[Edge], config: &EngineConfig) -> f64 {
    tension_breakdown(node_id, edges, config).score
}

/// Support and attack totals behind a node's tension score
pub fn tension_breakdown(node_id: &str, edges: &[Edge], config: &EngineConfig) -> TensionBreakdown {
    edges
        .iter()
        .filter(|edge| edge.to == node_id)
        .fold(TensionBreakdown::default(), |mut totals, edge| {
            totals.add(edge, config);
            totals
        })
        .finish(config)
}

/// Tension of every edge target, in one pass over the edges
///
/// Each entry equals [`compute_tension`] for that node; nodes with no
/// incoming edges are absent and have tension 0.
pub fn tension_map(edges: &[Edge], config: &EngineConfig) -> BTreeMap<NodeId, f64> {
    let mut totals: BTreeMap<&str, TensionBreakdown> = BTreeMap::new();
    for edge in edges {
        totals.entry(edge.to.as_str()).or_default().add(edge, config);
    }

    totals
        .into_iter()
        .map(|(node_id, breakdown)| (node_id.to_string(), breakdown.finish(config).score))
        .collect()
}

fn score(support: f64, attack: f64, config: &EngineConfig) -> f64 {
    if support == 0.0 || attack == 0.0 {
        return 0.0;
    }

    ((support * attack).sqrt() / config.tension_divisor).min(1.0)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn incoming_edge() -> impl Strategy<Value = Edge> {
        (
            prop::sample::select(vec!["supports", "proves", "entails", "attacks", "refutes", "cites"]),
            prop::option::of(0.01f64..=1.0),
        )
            .prop_map(|(relation, weight)| Edge::new("src", "n", relation, "philosophy", weight))
    }

    proptest! {
        /// Property: tension stays in [0, 1] and is zero without both poles
        #[test]
        fn test_tension_bounds(edges in prop::collection::vec(incoming_edge(), 0..30)) {
            let config = EngineConfig::default();
            let breakdown = tension_breakdown("n", &edges, &config);

            prop_assert!((0.0..=1.0).contains(&breakdown.score));
            if breakdown.support == 0.0 || breakdown.attack == 0.0 {
                prop_assert_eq!(breakdown.score, 0.0);
            }
        }
    }
}
