//! envdo - Run a command with variables from a .env file.
//!
//! envdo reads `KEY=VALUE` pairs from an env file (`-f`, else `.env`, else
//! `.envrc`) and runs a command through `$SHELL -c` with those variables
//! layered over the inherited environment.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the launch flow
//! - [`config`] - Env file resolution and parsing, launch context
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use envdo::config::EnvFileParser;
//! use envdo::shell::CommandSpec;
//!
//! let vars = EnvFileParser::parse("GREETING='hello world'");
//! assert_eq!(vars.get("GREETING"), Some("hello world"));
//!
//! let spec = CommandSpec::new(vec!["echo".into(), "$GREETING".into()]).unwrap();
//! assert_eq!(spec.command_line(), "echo $GREETING");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod shell;

pub use error::{EnvdoError, Result};
