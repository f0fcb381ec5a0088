//! Edge module - typed relations between nodes

use crate::Relation;
use serde::{Deserialize, Serialize};

/// Prefix marking a domain tag as a cross-domain bridge
pub const BRIDGE_PREFIX: &str = "bridge:";

/// A knowledge graph edge
///
/// Edges carry no identity beyond their fields: duplicates are legal and are
/// all kept. Field names on the wire are the short `f`/`t`/`w` forms used by
/// the published graph files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// From node ID (source)
    #[serde(rename = "f")]
    pub from: String,

    /// To node ID (target)
    #[serde(rename = "t")]
    pub to: String,

    /// Relation type
    pub relation: Relation,

    /// Domain of the relation (`bridge:` prefix marks a cross-domain edge)
    pub domain: String,

    /// Optional confidence weight in (0, 1]; `None` means "use the default"
    #[serde(rename = "w", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// The two sides of a bridge domain tag such as `bridge:phil→math`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeDomains {
    /// Domain the bridge starts from
    pub from: String,

    /// Domain the bridge leads to, when the tag names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

impl Edge {
    /// Create a new edge
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relation: impl Into<Relation>,
        domain: impl Into<String>,
        weight: Option<f64>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation: relation.into(),
            domain: domain.into(),
            weight,
        }
    }

    /// Weight of the edge, falling back to `default` when unset
    pub fn weight_or(&self, default: f64) -> f64 {
        self.weight.unwrap_or(default)
    }

    /// Whether the domain tag marks this edge as crossing knowledge domains
    pub fn is_bridge(&self) -> bool {
        self.domain.starts_with(BRIDGE_PREFIX)
    }

    /// Parse the bridge endpoints out of the domain tag
    pub fn bridge(&self) -> Option<BridgeDomains> {
        BridgeDomains::parse(&self.domain)
    }
}

impl BridgeDomains {
    /// Parse a `bridge:X` or `bridge:X→Y` domain tag
    ///
    /// Returns `None` for tags without the bridge prefix.
    pub fn parse(domain: &str) -> Option<Self> {
        let rest = domain.strip_prefix(BRIDGE_PREFIX)?;
        let bridge = match rest.split_once('→') {
            Some((from, to)) => Self {
                from: from.to_string(),
                to: Some(to.to_string()),
            },
            None => Self {
                from: rest.to_string(),
                to: None,
            },
        };
        Some(bridge)
    }
}
