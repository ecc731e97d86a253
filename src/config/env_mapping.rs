//! Parsed env file variables.
//!
//! An [`EnvMapping`] is the set of variables loaded for one invocation,
//! together with the file it came from (for diagnostics).

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Variables loaded from an env file.
///
/// # Example
///
/// ```
/// use envdo::config::EnvMapping;
///
/// let mut mapping = EnvMapping::new();
/// mapping.set("DATABASE_URL", "postgres://localhost/db");
/// mapping.set("DEBUG", "true");
///
/// assert_eq!(mapping.get("DEBUG"), Some("true"));
/// assert_eq!(mapping.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMapping {
    /// Variables, keyed by name.
    pub vars: BTreeMap<String, String>,
    /// File the variables were read from, if any.
    pub source: Option<PathBuf>,
}

impl EnvMapping {
    /// Create an empty mapping with no source file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping attributed to `path`.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            vars: BTreeMap::new(),
            source: Some(path.into()),
        }
    }

    /// Insert a variable, replacing any earlier value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Check if a variable is defined.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables were loaded.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Source file, if the mapping was loaded from one.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Iterate over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Append these variables after `inherited`.
    ///
    /// The inherited entries keep their order and every mapping entry
    /// follows them, so when the list is applied in order a mapping value
    /// replaces an inherited one with the same name.
    pub fn appended_to<I>(&self, inherited: I) -> Vec<(OsString, OsString)>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut env: Vec<(OsString, OsString)> = inherited.into_iter().collect();
        env.extend(
            self.iter()
                .map(|(k, v)| (OsString::from(k), OsString::from(v))),
        );
        env
    }
}
