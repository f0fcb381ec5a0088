//! Path module - the result of a justification search

use crate::{NodeId, Relation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Epistemic character of a justification chain
///
/// Weakest link: a single non-deductive hop makes the chain `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathType {
    /// Every hop is proves/entails (or the chain is a single foundation)
    Deductive,
    /// No hop is deductive
    Inductive,
    /// Both kinds of hop occur
    Mixed,
}

impl PathType {
    /// Classify a chain from the relations along it
    pub fn classify<'a, I>(relations: I) -> Self
    where
        I: IntoIterator<Item = &'a Relation>,
    {
        let mut has_deductive = false;
        let mut has_inductive = false;

        for relation in relations {
            if relation.is_deductive() {
                has_deductive = true;
            } else {
                has_inductive = true;
            }
        }

        match (has_deductive, has_inductive) {
            (true, true) => PathType::Mixed,
            (false, true) => PathType::Inductive,
            _ => PathType::Deductive,
        }
    }

    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PathType::Deductive => "deductive",
            PathType::Inductive => "inductive",
            PathType::Mixed => "mixed",
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strongest justification chain for a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Node IDs from foundation to target (or around the cycle, when coherentist)
    pub path: Vec<NodeId>,

    /// Product of edge weights along the chain
    pub path_weight: f64,

    /// Deductive / inductive / mixed
    pub path_type: PathType,

    /// True when the search ran into a cycle of mutual support
    pub is_coherentist: bool,

    /// The repeated node that closed the cycle
    pub entry_point: Option<NodeId>,
}

impl PathResult {
    /// A foundation justifies itself
    pub fn foundation(node_id: impl Into<NodeId>) -> Self {
        Self {
            path: vec![node_id.into()],
            path_weight: 1.0,
            path_type: PathType::Deductive,
            is_coherentist: false,
            entry_point: None,
        }
    }

    /// Whether the chain contains the node
    pub fn contains(&self, node_id: &str) -> bool {
        self.path.iter().any(|id| id == node_id)
    }
}
