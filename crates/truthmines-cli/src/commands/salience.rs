//! Salience command implementation.

use super::Context;
use crate::cli::SalienceArgs;
use crate::error::Result;
use crate::output::{Formatter, SalienceRow};
use truthmines_engine::{opacity_scale, show_label, size_scale};

/// Execute the salience command.
///
/// Nodes are ranked by salience, highest first, ties by node ID.
pub fn execute_salience(args: SalienceArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let nodes = ctx.require_nodes()?;
    let config = ctx.engine.config();
    let analysis = ctx.engine.analyze_focus(nodes, args.focus.as_deref(), &ctx.edges);

    let mut rows: Vec<SalienceRow> = ctx
        .listed_nodes()?
        .into_iter()
        .map(|node| {
            let salience = analysis.salience.get(&node.id).copied().unwrap_or_default();
            SalienceRow {
                id: node.id.clone(),
                title: node.title.clone(),
                salience,
                size: size_scale(1.0, salience),
                opacity: opacity_scale(salience),
                label: show_label(salience, config.label_threshold),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.salience.total_cmp(&a.salience).then_with(|| a.id.cmp(&b.id)));
    if let Some(top) = args.top {
        rows.truncate(top);
    }

    formatter.format_salience(&rows)
}
