//! Depths command implementation.

use super::Context;
use crate::error::Result;
use crate::output::{DepthRow, Formatter};

/// Execute the depths command.
///
/// Rows are ordered by depth, then node ID.
pub fn execute_depths(ctx: &Context, formatter: &Formatter) -> Result<String> {
    let nodes = ctx.require_nodes()?;
    let depths = ctx.engine.compute_depths(nodes, &ctx.edges);

    let mut rows: Vec<DepthRow> = ctx
        .listed_nodes()?
        .into_iter()
        .filter_map(|node| {
            depths.get(&node.id).map(|&depth| DepthRow {
                id: node.id.clone(),
                title: node.title.clone(),
                depth,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.id.cmp(&b.id)));

    formatter.format_depths(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::context;
    use crate::config::OutputFormat;

    #[test]
    fn test_layers() {
        let ctx = context(true, &[]);
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = execute_depths(&ctx, &formatter).unwrap();

        assert_eq!(
            output,
            "ax0001\t0\nma0005\t0\nob0004\t0\nth0002\t1\npr0003\t2"
        );
    }

    #[test]
    fn test_table_titles() {
        let ctx = context(true, &["philosophy"]);
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = execute_depths(&ctx, &formatter).unwrap();

        assert!(output.contains("Proposition"));
        assert!(!output.contains("Formal Result"));
    }
}
