//! Attacks command implementation.

use super::Context;
use crate::cli::NodeArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the attacks command.
pub fn execute_attacks(args: NodeArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let challenges = ctx.engine.incoming_attacks(&args.node, &ctx.edges);
    formatter.format_challenges(&args.node, &challenges)
}
