//! pymatrix CLI - CI matrices of compatible Python and library versions

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for command output
    let default_filter = if cli.verbose {
        "pymatrix=debug"
    } else if cli.quiet {
        "pymatrix=warn"
    } else {
        "pymatrix=info"
    };
    let filter = EnvFilter::try_from_env("PYMATRIX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = cli.config.as_deref();

    // Execute command
    match cli.command {
        Some(Commands::Generate(args)) => commands::generate::execute(config, args),
        Some(Commands::Pythons(args)) => commands::pythons::execute(config, args),
        Some(Commands::Releases(args)) => commands::releases::execute(config, args),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
        None => commands::generate::execute(config, cli.generate),
    }
}
