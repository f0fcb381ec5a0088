//! Cross-domain bridge links of a node

use serde::Serialize;
use truthmines_domain::{BridgeDomains, Edge};

/// A bridge edge paired with its parsed domains
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeLink<'a> {
    /// The bridge edge
    pub edge: &'a Edge,
    /// Domains parsed from the edge's `bridge:` tag
    pub domains: BridgeDomains,
}

/// Bridges grounding a node (incoming) and bridges it leads to (outgoing)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CrossDomainLinks<'a> {
    /// Bridge edges ending at the node
    pub incoming: Vec<BridgeLink<'a>>,
    /// Bridge edges starting at the node
    pub outgoing: Vec<BridgeLink<'a>>,
}

impl CrossDomainLinks<'_> {
    /// Total number of bridges
    pub fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    /// No bridges at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bridge edges touching `node_id`, in edge order
pub fn cross_domain_links<'a>(node_id: &str, edges: &'a [Edge]) -> CrossDomainLinks<'a> {
    let mut links = CrossDomainLinks::default();

    for edge in edges {
        let Some(domains) = edge.bridge() else {
            continue;
        };

        // A bridge from a node to itself shows up on both sides
        if edge.to == node_id {
            links.incoming.push(BridgeLink { edge, domains: domains.clone() });
        }
        if edge.from == node_id {
            links.outgoing.push(BridgeLink { edge, domains });
        }
    }

    links
}
