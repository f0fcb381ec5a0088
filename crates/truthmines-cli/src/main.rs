//! Truth Mines CLI - inspect the epistemic structure of a knowledge graph.

use clap::Parser;
use truthmines_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match truthmines_cli::run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
