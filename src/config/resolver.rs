//! Env file resolution.
//!
//! Resolves which env file to load using the priority chain:
//! 1. Explicit `-f` flag (used as given, never checked)
//! 2. `.env` in the working directory
//! 3. `.envrc` in the working directory
//! 4. No file, which means an empty mapping

use std::fmt;
use std::path::{Path, PathBuf};

/// Default file names probed when no explicit file is given, in order.
pub const DEFAULT_ENV_FILES: &[&str] = &[".env", ".envrc"];

/// How the env file was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileSource {
    /// Explicitly set via `-f`.
    Flag,
    /// Found by probing the working directory.
    Discovered,
}

impl fmt::Display for EnvFileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "-f flag"),
            Self::Discovered => write!(f, "working directory"),
        }
    }
}

/// A resolved env file with how it was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvFile {
    /// Path to read.
    pub path: PathBuf,
    /// How this path was determined.
    pub source: EnvFileSource,
}

/// Picks the env file for an invocation.
pub struct EnvFileResolver;

impl EnvFileResolver {
    /// Resolve the env file using the priority chain.
    ///
    /// An explicit path is returned unchanged even if it does not exist, so
    /// the load step reports the problem. A missing default file is not an
    /// error and yields `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use envdo::config::{EnvFileResolver, EnvFileSource};
    /// use std::path::Path;
    ///
    /// let resolved = EnvFileResolver::resolve(Some(Path::new("prod.env")), Path::new("."))
    ///     .unwrap();
    /// assert_eq!(resolved.path, Path::new("prod.env"));
    /// assert_eq!(resolved.source, EnvFileSource::Flag);
    /// ```
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Option<ResolvedEnvFile> {
        if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            return Some(ResolvedEnvFile {
                path: path.to_path_buf(),
                source: EnvFileSource::Flag,
            });
        }

        DEFAULT_ENV_FILES
            .iter()
            .map(|name| cwd.join(name))
            .find(|candidate| candidate.metadata().is_ok())
            .map(|path| ResolvedEnvFile {
                path,
                source: EnvFileSource::Discovered,
            })
    }
}
