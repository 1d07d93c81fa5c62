//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// pymatrix - CI matrices of compatible Python and library versions
#[derive(Parser)]
#[command(name = "pymatrix")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Configuration file (overrides .pymatrix.toml)
    #[arg(long, global = true, env = "PYMATRIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Defaults to `generate`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Options for the default `generate` command
    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the compatibility matrix as JSON
    Generate(GenerateArgs),

    /// List interpreter versions eligible for the matrix
    Pythons(SourceArgs),

    /// List library releases eligible for the matrix
    Releases(SourceArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that reads version data.
#[derive(Args)]
pub struct SourceArgs {
    /// Package whose requirements seed the matrix
    #[arg(long)]
    pub package: Option<String>,

    /// Library to pair with interpreter versions
    #[arg(long)]
    pub dependency: Option<String>,

    /// Package index JSON API base URL
    #[arg(long, env = "PYMATRIX_INDEX_URL")]
    pub index_url: Option<String>,

    /// Read the package's metadata from a METADATA / PKG-INFO file
    #[arg(long)]
    pub metadata: Option<PathBuf>,

    /// Read `uv python list --output-format=json` output from a file
    #[arg(long)]
    pub python_list: Option<PathBuf>,

    /// Lowest interpreter version to include
    #[arg(long)]
    pub python_min: Option<String>,

    /// Highest interpreter version to include
    #[arg(long)]
    pub python_max: Option<String>,

    /// Include pre-releases
    #[arg(long, overrides_with = "no_pre")]
    pub pre: bool,

    /// Exclude pre-releases even if the config enables them
    #[arg(long, overrides_with = "pre")]
    pub no_pre: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the matrix to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
