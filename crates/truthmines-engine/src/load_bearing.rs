//! Load-bearing analysis
//!
//! A node is load-bearing when parts of the graph can only reach a
//! foundation through it. The score is the fraction of all nodes that would
//! lose every foundation path if the node were removed:
//!
//! - 0.0: leaf or no dependents
//! - up to 0.05: minor
//! - up to 0.2: significant
//! - up to 0.5: critical
//! - above 0.5: a pillar of the graph

use crate::config::EngineConfig;
use crate::graph::JustificationGraph;
use std::collections::{HashSet, VecDeque};
use tracing::debug;
use truthmines_domain::{Edge, Node};

/// Fraction of the graph orphaned by removing `node_id`
///
/// Nodes that never had a foundation path are not counted. Unknown nodes,
/// graphs with at most one node and nodes without descendants score 0.
pub fn compute_load_bearing(nodes: &[Node], edges: &[Edge], node_id: &str, config: &EngineConfig) -> f64 {
    let graph = JustificationGraph::over_nodes(nodes.iter().map(|n| n.id.as_str()), edges, config);

    let total = graph.len();
    if total <= 1 || !graph.contains(node_id) {
        return 0.0;
    }

    let mut descendants = reachable(&graph, [node_id], None);
    descendants.remove(node_id);
    if descendants.is_empty() {
        return 0.0;
    }

    let foundations = graph.foundations();
    let grounded = reachable(&graph, foundations.iter().copied(), None);
    let still_grounded = reachable(
        &graph,
        foundations.iter().copied().filter(|&f| f != node_id),
        Some(node_id),
    );

    let orphaned = descendants
        .iter()
        .filter(|node| grounded.contains(*node) && !still_grounded.contains(*node))
        .count();

    debug!(node_id, descendants = descendants.len(), orphaned, total, "Computed load-bearing score");

    orphaned as f64 / total as f64
}

/// Every node reachable from `starts` (starts included), never entering `avoid`
fn reachable<'a, I>(graph: &JustificationGraph<'a>, starts: I, avoid: Option<&str>) -> HashSet<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    for start in starts {
        if visited.insert(start) {
            queue.push_back(start);
        }
    }

    while let Some(current) = queue.pop_front() {
        for &next in graph.successors(current) {
            if Some(next) == avoid {
                continue;
            }
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    visited
}
