//! Truth Mines CLI library.
//!
//! This library provides the core functionality for the `truthmines` inspector,
//! including configuration management, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use commands::Context;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;

use truthmines_engine::Engine;

/// Load inputs and run one parsed command, returning its rendered output.
pub fn run(cli: Cli) -> Result<String> {
    let config = Config::load(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let ctx = Context::load(
        Engine::new(config.engine),
        cli.edges.as_deref(),
        cli.nodes.as_deref(),
        cli.domains,
    )?;

    match cli.command {
        Command::Path(args) => commands::execute_path(args, &ctx, &formatter),
        Command::Neighbors(args) => commands::execute_neighbors(args, &ctx, &formatter),
        Command::Tension(args) => commands::execute_tension(args, &ctx, &formatter),
        Command::Salience(args) => commands::execute_salience(args, &ctx, &formatter),
        Command::Attacks(args) => commands::execute_attacks(args, &ctx, &formatter),
        Command::Bridges(args) => commands::execute_bridges(args, &ctx, &formatter),
        Command::Depths => commands::execute_depths(&ctx, &formatter),
        Command::LoadBearing(args) => commands::execute_load_bearing(args, &ctx, &formatter),
    }
}
