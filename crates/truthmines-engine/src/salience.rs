//! Salience aggregation - how much visual weight each node gets
//!
//! Formula:
//! `salience = min(1, w_focus·I_focus + w_path·I_path + w_neighbor·decay(hop) + w_tension·tension)`
//! with `decay(hop) = max(0, 1 - hop_decay·hop)`.

use crate::config::EngineConfig;
use crate::tension::tension_map;
use std::collections::BTreeMap;
use truthmines_domain::{Edge, Node, NodeId};

/// Salience of every node in [0, 1]
///
/// Every node gets an entry; nodes touched by no signal get exactly 0.
/// Strong signals saturate at 1 rather than being rescaled.
pub fn compute_salience(
    nodes: &[Node],
    focus: Option<&str>,
    path: Option<&[NodeId]>,
    neighbors: &BTreeMap<NodeId, usize>,
    edges: &[Edge],
    config: &EngineConfig,
) -> BTreeMap<NodeId, f64> {
    let weights = &config.salience;
    let tensions = tension_map(edges, config);

    nodes
        .iter()
        .map(|node| {
            let mut score = 0.0;

            if focus == Some(node.id.as_str()) {
                score += weights.focus;
            }

            if path.is_some_and(|path| path.contains(&node.id)) {
                score += weights.path;
            }

            if let Some(&hops) = neighbors.get(&node.id) {
                let decay = (1.0 - config.hop_decay * hops as f64).max(0.0);
                score += weights.neighbor * decay;
            }

            if let Some(&tension) = tensions.get(&node.id) {
                score += weights.tension * tension;
            }

            (node.id.clone(), score.min(1.0))
        })
        .collect()
}

/// Node size: 0.5× base for background nodes up to 2× base at full salience
pub fn size_scale(base: f64, salience: f64) -> f64 {
    base * (0.5 + 1.5 * salience)
}

/// Node opacity; never below 0.2
pub fn opacity_scale(salience: f64) -> f64 {
    0.2 + 0.8 * salience
}

/// Whether a node's label is drawn. Strictly above the threshold.
pub fn show_label(salience: f64, threshold: f64) -> bool {
    salience > threshold
}
