//! Bridges command implementation.

use super::Context;
use crate::cli::NodeArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the bridges command.
pub fn execute_bridges(args: NodeArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let links = ctx.engine.cross_domain_links(&args.node, &ctx.edges);
    formatter.format_bridges(&args.node, &links)
}
