//! Domain filtering of node lists

use truthmines_domain::Node;

/// Nodes whose domain is one of `domains`, in input order
///
/// An empty domain list keeps every node.
pub fn filter_by_domain<'a, S: AsRef<str>>(nodes: &'a [Node], domains: &[S]) -> Vec<&'a Node> {
    nodes
        .iter()
        .filter(|node| domains.is_empty() || domains.iter().any(|d| d.as_ref() == node.domain))
        .collect()
}
