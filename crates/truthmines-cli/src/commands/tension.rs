//! Tension command implementation.

use super::Context;
use crate::cli::NodeArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the tension command.
pub fn execute_tension(args: NodeArgs, ctx: &Context, formatter: &Formatter) -> Result<String> {
    let breakdown = ctx.engine.tension_breakdown(&args.node, &ctx.edges);
    formatter.format_tension(&args.node, &breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use crate::config::OutputFormat;

    #[test]
    fn test_contested_node() {
        let ctx = context(false, &[]);
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = execute_tension(NodeArgs { node: "pr0003".into() }, &ctx, &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        // sqrt(0.8 × 0.99) / 5
        let expected = (0.8f64 * 0.99).sqrt() / 5.0;
        assert!((value["tension"].as_f64().unwrap() - expected).abs() < 1e-12);
        assert_eq!(value["node"], "pr0003");
    }

    #[test]
    fn test_uncontested_node() {
        let ctx = context(false, &[]);
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = execute_tension(NodeArgs { node: "th0002".into() }, &ctx, &formatter).unwrap();
        assert_eq!(output, "0.000");
    }
}
