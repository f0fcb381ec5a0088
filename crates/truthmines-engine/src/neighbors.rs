//! Bounded neighbor reachability

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use truthmines_domain::{Edge, NodeId};

/// Hop distance of every node within `max_hops` of `focus`
///
/// Edges are followed in both directions. The focus itself is at distance 0,
/// even when no edge touches it. Nodes beyond `max_hops` and nodes not
/// connected to the focus are absent. Returns an empty map when there is no
/// focus.
pub fn compute_neighbors(
    focus: Option<&str>,
    edges: &[Edge],
    max_hops: usize,
) -> BTreeMap<NodeId, usize> {
    let mut neighbors = BTreeMap::new();

    let Some(focus) = focus else {
        return neighbors;
    };

    // Adjacency keeps edge order so discovery order is stable
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        adjacency.entry(edge.from.as_str()).or_default().push(edge.to.as_str());
        adjacency.entry(edge.to.as_str()).or_default().push(edge.from.as_str());
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(focus);
    queue.push_back((focus, 0usize));

    while let Some((node, hops)) = queue.pop_front() {
        neighbors.insert(node.to_string(), hops);

        if hops >= max_hops {
            continue;
        }

        for &next in adjacency.get(node).map(Vec::as_slice).unwrap_or_default() {
            if visited.insert(next) {
                queue.push_back((next, hops + 1));
            }
        }
    }

    neighbors
}
