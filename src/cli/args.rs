//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// envdo - Run a command with variables from a .env file.
#[derive(Debug, Parser)]
#[command(name = "envdo")]
#[command(version, about, long_about = None)]
#[command(override_usage = "envdo [-f envfile] command [args...]")]
pub struct Cli {
    /// Environment file to load (defaults to .env, then .envrc)
    #[arg(short = 'f', long = "file", value_name = "ENVFILE")]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Command to run, followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
