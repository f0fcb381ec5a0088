//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Truth Mines inspector - epistemic analysis of a knowledge graph.
#[derive(Debug, Parser)]
#[command(name = "truthmines")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Edge file in compact relation-block format
    #[arg(short, long, global = true, env = "TRUTHMINES_EDGES")]
    pub edges: Option<PathBuf>,

    /// Graph summary JSON file or directory of node JSON files
    #[arg(short, long, global = true, env = "TRUTHMINES_NODES")]
    pub nodes: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Only list nodes from these domains (repeatable)
    #[arg(short, long = "domain", global = true)]
    pub domains: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs and scores only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strongest justification path of a node
    Path(NodeArgs),

    /// Nodes within a few hops of a node
    Neighbors(NeighborsArgs),

    /// Tension between support and attack on a node
    Tension(NodeArgs),

    /// Salience ranking, optionally around a focus node
    Salience(SalienceArgs),

    /// Attacks and refutations aimed at a node
    Attacks(NodeArgs),

    /// Cross-domain bridges touching a node
    Bridges(NodeArgs),

    /// Epistemic depth of every node
    Depths,

    /// Fraction of the graph that depends on a node
    LoadBearing(NodeArgs),
}

/// Arguments for commands about a single node.
#[derive(Debug, Parser)]
pub struct NodeArgs {
    /// Node ID
    pub node: String,
}

/// Arguments for the neighbors command.
#[derive(Debug, Parser)]
pub struct NeighborsArgs {
    /// Node ID
    pub node: String,

    /// Search radius in hops (defaults to the configured radius)
    #[arg(short, long)]
    pub max_hops: Option<usize>,
}

/// Arguments for the salience command.
#[derive(Debug, Parser)]
pub struct SalienceArgs {
    /// Focus node ID
    pub focus: Option<String>,

    /// Show only the N most salient nodes
    #[arg(short, long)]
    pub top: Option<usize>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_command() {
        let cli = Cli::parse_from(["truthmines", "--edges", "edges.toon", "path", "abc123"]);

        assert_eq!(cli.edges, Some(PathBuf::from("edges.toon")));
        match cli.command {
            Command::Path(args) => assert_eq!(args.node, "abc123"),
            _ => panic!("Expected Path command"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from([
            "truthmines",
            "depths",
            "--edges",
            "edges.toon",
            "--nodes",
            "nodes",
            "--format",
            "json",
            "--domain",
            "philosophy",
            "--domain",
            "mathematics",
        ]);

        assert!(matches!(cli.command, Command::Depths));
        assert_eq!(cli.format, Some(CliFormat::Json));
        assert_eq!(cli.domains, vec!["philosophy", "mathematics"]);
    }

    #[test]
    fn test_neighbors_max_hops() {
        let cli = Cli::parse_from(["truthmines", "neighbors", "abc123", "--max-hops", "2"]);
        match cli.command {
            Command::Neighbors(args) => assert_eq!(args.max_hops, Some(2)),
            _ => panic!("Expected Neighbors command"),
        }
    }

    #[test]
    fn test_salience_without_focus() {
        let cli = Cli::parse_from(["truthmines", "salience", "--top", "5"]);
        match cli.command {
            Command::Salience(args) => {
                assert!(args.focus.is_none());
                assert_eq!(args.top, Some(5));
            }
            _ => panic!("Expected Salience command"),
        }
    }

    #[test]
    fn test_load_bearing_name() {
        let cli = Cli::parse_from(["truthmines", "load-bearing", "abc123"]);
        assert!(matches!(cli.command, Command::LoadBearing(_)));
    }

    #[test]
    fn test_missing_command_rejected() {
        assert!(Cli::try_parse_from(["truthmines"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
