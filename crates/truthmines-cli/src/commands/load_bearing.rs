//! Load-bearing command implementation.

use super::Context;
use crate::cli::NodeArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the load-bearing command.
pub fn execute_load_bearing(args: NodeArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let nodes = ctx.require_nodes()?;
    if !nodes.iter().any(|n| n.id == args.node) {
        return Err(CliError::InvalidInput(format!("unknown node '{}'", args.node)));
    }
    let score = ctx.engine.compute_load_bearing(nodes, &ctx.edges, &args.node);
    formatter.format_load_bearing(&args.node, score)
}
