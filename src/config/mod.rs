//! Env file resolution, parsing, and launch configuration.
//!
//! This module handles everything that happens before a command runs:
//! - Choosing the env file in [`resolver`]
//! - Parsing it in [`env_file`]
//! - Holding the parsed variables in [`env_mapping`]
//! - Capturing ambient process state in [`context`]
//!
//! # Example
//!
//! ```
//! use envdo::config::{EnvFileParser, EnvFileResolver};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".env"), "GREETING='hello world'").unwrap();
//!
//! let resolved = EnvFileResolver::resolve(None, temp.path()).unwrap();
//! let vars = EnvFileParser::load(&resolved.path).unwrap();
//! assert_eq!(vars.get("GREETING"), Some("hello world"));
//! ```

pub mod context;
pub mod env_file;
pub mod env_mapping;
pub mod resolver;

pub use context::LaunchContext;
pub use env_file::EnvFileParser;
pub use env_mapping::EnvMapping;
pub use resolver::{EnvFileResolver, EnvFileSource, ResolvedEnvFile, DEFAULT_ENV_FILES};
