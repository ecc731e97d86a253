//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{
    CommandExecutor, CommandResult, CommandSpec, ProcessSpawner, ShellInvocation, SystemSpawner,
};
pub use platform::{resolve_shell, DEFAULT_SHELL, SHELL_COMMAND_FLAG};
