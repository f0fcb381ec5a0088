//! Epistemic depth via topological layering
//!
//! Foundations sit at depth 0 and every other node sits one layer below its
//! deepest justifier.

use crate::config::EngineConfig;
use crate::graph::JustificationGraph;
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::debug;
use truthmines_domain::{Edge, Node, NodeId};

/// Depth assigned to nodes the layering never reaches (cycles and below)
pub const UNRESOLVED_DEPTH: u32 = 1;

/// Epistemic depth of every node
///
/// Only epistemic, non-bridge edges between listed nodes count. A cycle node
/// fed by a released justifier keeps the deepest layer it was offered; nodes
/// no released justifier reaches get [`UNRESOLVED_DEPTH`].
pub fn compute_depths(nodes: &[Node], edges: &[Edge], config: &EngineConfig) -> BTreeMap<NodeId, u32> {
    let graph = JustificationGraph::over_nodes(nodes.iter().map(|n| n.id.as_str()), edges, config);

    let mut in_degree: HashMap<&str, usize> =
        graph.nodes().map(|node| (node, graph.in_degree(node))).collect();
    let mut depths: HashMap<&str, u32> = HashMap::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    for node in graph.foundations() {
        depths.insert(node, 0);
        queue.push_back(node);
    }

    while let Some(current) = queue.pop_front() {
        let next_depth = depths.get(current).copied().unwrap_or_default() + 1;

        for &next in graph.successors(current) {
            depths
                .entry(next)
                .and_modify(|d| *d = (*d).max(next_depth))
                .or_insert(next_depth);

            if let Some(remaining) = in_degree.get_mut(next) {
                *remaining = remaining.saturating_sub(1);
                if *remaining == 0 {
                    queue.push_back(next);
                }
            }
        }
    }

    let mut unresolved = 0usize;
    let result: BTreeMap<NodeId, u32> = graph
        .nodes()
        .map(|node| {
            let depth = depths.get(node).copied().unwrap_or_else(|| {
                unresolved += 1;
                UNRESOLVED_DEPTH
            });
            (node.to_string(), depth)
        })
        .collect();

    if unresolved > 0 {
        debug!(unresolved, "Nodes left unlayered by justification cycles");
    }

    result
}
