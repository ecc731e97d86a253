//! Ambient process state.
//!
//! [`LaunchContext`] captures everything the launcher reads from the
//! surrounding process (working directory, `SHELL`, inherited variables) in
//! one place, so the rest of the crate takes it as a plain input.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Snapshot of the launching process.
#[derive(Debug, Clone, Default)]
pub struct LaunchContext {
    /// Directory probed for default env files.
    pub cwd: PathBuf,
    /// Raw `SHELL` value, if set.
    pub shell: Option<OsString>,
    /// Inherited environment, in process order.
    pub inherited_env: Vec<(OsString, OsString)>,
}

impl LaunchContext {
    /// Capture the current process state.
    ///
    /// Falls back to `.` when the working directory cannot be determined.
    pub fn from_process() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            shell: std::env::var_os("SHELL"),
            inherited_env: std::env::vars_os().collect(),
        }
    }

    /// Set the working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Set the `SHELL` value.
    pub fn with_shell(mut self, shell: impl Into<OsString>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    /// Add an inherited variable.
    pub fn with_inherited(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.inherited_env.push((key.into(), value.into()));
        self
    }

    /// The `SHELL` value as an `OsStr`.
    pub fn shell_var(&self) -> Option<&OsStr> {
        self.shell.as_deref()
    }
}
