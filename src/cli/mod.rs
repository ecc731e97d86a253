//! Command-line interface for envdo.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`launch`] - The resolve, load, execute flow

pub mod args;
pub mod launch;

pub use args::Cli;
pub use launch::Launcher;
