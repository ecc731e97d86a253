//! Shell selection.

use std::ffi::OsStr;
use std::path::PathBuf;

/// Shell used when `SHELL` is unset or empty.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Flag that makes the shell run its next argument as a command line.
pub const SHELL_COMMAND_FLAG: &str = "-c";

/// Pick the shell executable from a raw `SHELL` value.
pub fn resolve_shell(shell_var: Option<&OsStr>) -> PathBuf {
    match shell_var {
        Some(shell) if !shell.is_empty() => PathBuf::from(shell),
        _ => PathBuf::from(DEFAULT_SHELL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_shell_var_when_set() {
        assert_eq!(
            resolve_shell(Some(OsStr::new("/usr/bin/zsh"))),
            PathBuf::from("/usr/bin/zsh")
        );
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(resolve_shell(None), PathBuf::from(DEFAULT_SHELL));
    }

    #[test]
    fn defaults_when_empty() {
        assert_eq!(resolve_shell(Some(OsStr::new(""))), PathBuf::from("/bin/sh"));
    }
}
