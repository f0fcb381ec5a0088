//! Path command implementation.

use super::Context;
use crate::cli::NodeArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the path command.
pub fn execute_path(args: NodeArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let result = ctx.engine.compute_focus_path(Some(args.node.as_str()), &ctx.edges);
    formatter.format_path(&args.node, result.as_ref())
}
