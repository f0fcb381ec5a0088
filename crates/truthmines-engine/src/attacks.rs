//! Incoming challenges of a node

use crate::config::EngineConfig;
use serde::Serialize;
use std::fmt;
use truthmines_domain::{Edge, NodeId, Relation};

/// How hard a challenge hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Weight above 0.95
    Strong,
    /// Weight above 0.7
    Moderate,
    /// Everything else
    Weak,
}

impl Severity {
    /// Band for an effective edge weight
    pub fn from_weight(weight: f64) -> Self {
        if weight > 0.95 {
            Severity::Strong
        } else if weight > 0.7 {
            Severity::Moderate
        } else {
            Severity::Weak
        }
    }

    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Strong => "strong",
            Severity::Moderate => "moderate",
            Severity::Weak => "weak",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attack or refutation aimed at a node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Challenge {
    /// Node the challenge comes from
    pub from: NodeId,
    /// attacks or refutes
    pub relation: Relation,
    /// Effective weight (default applied)
    pub weight: f64,
    /// Severity band of the weight
    pub severity: Severity,
}

/// Incoming attacks/refutations of `node_id`, strongest first
///
/// Ties keep edge order.
pub fn incoming_attacks(node_id: &str, edges: &[Edge], config: &EngineConfig) -> Vec<Challenge> {
    let mut challenges: Vec<Challenge> = edges
        .iter()
        .filter(|edge| edge.to == node_id && edge.relation.is_attack())
        .map(|edge| {
            let weight = edge.weight_or(config.default_weight);
            Challenge {
                from: edge.from.clone(),
                relation: edge.relation.clone(),
                weight,
                severity: Severity::from_weight(weight),
            }
        })
        .collect();

    challenges.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    challenges
}
