//! Shell command execution.

use super::platform::{resolve_shell, SHELL_COMMAND_FLAG};
use crate::config::{EnvMapping, LaunchContext};
use crate::error::{EnvdoError, Result};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// The command and its arguments as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    args: Vec<String>,
}

impl CommandSpec {
    /// Create a spec from the command arguments.
    ///
    /// Returns [`EnvdoError::Usage`] when `args` is empty.
    pub fn new(args: Vec<String>) -> Result<Self> {
        if args.is_empty() {
            return Err(EnvdoError::Usage);
        }
        Ok(Self { args })
    }

    /// The individual arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Join the arguments into one shell command line.
    ///
    /// Arguments are separated by single spaces and nothing is quoted, so
    /// the shell re-splits and expands them.
    pub fn command_line(&self) -> String {
        self.args.join(" ")
    }
}

/// A fully prepared shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    /// Shell executable.
    pub program: PathBuf,
    /// Shell arguments (`-c` and the command line).
    pub args: Vec<String>,
    /// Complete child environment. Later entries replace earlier ones.
    pub env: Vec<(OsString, OsString)>,
}

/// Starts a shell invocation with inherited standard streams and waits for it.
pub trait ProcessSpawner {
    /// Run the invocation to completion.
    ///
    /// Returns the exit code, or `None` if the child was terminated by a
    /// signal.
    fn run(&self, invocation: &ShellInvocation) -> io::Result<Option<i32>>;
}

/// Spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl ProcessSpawner for SystemSpawner {
    fn run(&self, invocation: &ShellInvocation) -> io::Result<Option<i32>> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);

        // The invocation carries the whole environment
        cmd.env_clear();
        for (key, value) in &invocation.env {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status()?;

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                tracing::warn!("Command terminated by signal {}", signal);
            }
        }

        Ok(status.code())
    }
}

/// Result of running a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Exit code reported for a child that has none.
    pub const SIGNALED_EXIT_CODE: i32 = 255;

    /// Create a result from the child's exit code.
    pub fn new(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            duration,
            success: exit_code == Some(0),
        }
    }

    /// Exit code the launcher itself should use.
    pub fn launcher_exit_code(&self) -> i32 {
        self.exit_code.unwrap_or(Self::SIGNALED_EXIT_CODE)
    }
}

/// Runs a [`CommandSpec`] through the user's shell with env file variables.
pub struct CommandExecutor<S = SystemSpawner> {
    spawner: S,
}

impl Default for CommandExecutor<SystemSpawner> {
    fn default() -> Self {
        Self::new(SystemSpawner)
    }
}

impl<S: ProcessSpawner> CommandExecutor<S> {
    /// Create an executor around a spawner.
    pub fn new(spawner: S) -> Self {
        Self { spawner }
    }

    /// The underlying spawner.
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Build the invocation for `spec` without running it.
    pub fn prepare(
        &self,
        spec: &CommandSpec,
        vars: &EnvMapping,
        ctx: &LaunchContext,
    ) -> ShellInvocation {
        ShellInvocation {
            program: resolve_shell(ctx.shell_var()),
            args: vec![SHELL_COMMAND_FLAG.to_string(), spec.command_line()],
            env: vars.appended_to(ctx.inherited_env.iter().cloned()),
        }
    }

    /// Run `spec`, blocking until the child exits.
    ///
    /// A non-zero exit is reported through [`CommandResult`]. Only a failure
    /// to start or wait on the shell is an error.
    pub fn execute(
        &self,
        spec: &CommandSpec,
        vars: &EnvMapping,
        ctx: &LaunchContext,
    ) -> Result<CommandResult> {
        let invocation = self.prepare(spec, vars, ctx);
        tracing::debug!(
            "Running {} {} {:?} with {} env file variables",
            invocation.program.display(),
            SHELL_COMMAND_FLAG,
            spec.command_line(),
            vars.len()
        );

        let start = Instant::now();
        let exit_code = self
            .spawner
            .run(&invocation)
            .map_err(|source| EnvdoError::Spawn {
                shell: invocation.program.clone(),
                source,
            })?;
        let result = CommandResult::new(exit_code, start.elapsed());

        tracing::debug!(
            "Command exited with {:?} after {:?}",
            result.exit_code,
            result.duration
        );
        Ok(result)
    }
}
