//! Neighbors command implementation.

use super::Context;
use crate::cli::NeighborsArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the neighbors command.
///
/// Rows are ordered by hop count, then node ID. The focus row is always kept.
pub fn execute_neighbors(args: NeighborsArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let distances = ctx
        .engine
        .compute_neighbors(Some(args.node.as_str()), &ctx.edges, args.max_hops);

    let mut rows: Vec<(String, usize)> = distances
        .into_iter()
        .filter(|(id, _)| *id == args.node || ctx.is_listed(id))
        .collect();
    rows.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    formatter.format_neighbors(&args.node, &rows)
}
