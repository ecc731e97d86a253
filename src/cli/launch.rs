//! The launch flow: resolve, load, execute.

use std::path::Path;

use crate::cli::args::Cli;
use crate::config::{EnvFileParser, EnvFileResolver, EnvMapping, LaunchContext};
use crate::error::Result;
use crate::shell::{CommandExecutor, CommandSpec, ProcessSpawner, SystemSpawner};

/// Runs one envdo invocation.
pub struct Launcher<S = SystemSpawner> {
    context: LaunchContext,
    executor: CommandExecutor<S>,
}

impl Launcher<SystemSpawner> {
    /// Create a launcher that spawns real processes.
    pub fn new(context: LaunchContext) -> Self {
        Self::with_executor(context, CommandExecutor::new(SystemSpawner))
    }
}

impl<S: ProcessSpawner> Launcher<S> {
    /// Create a launcher around a custom executor.
    pub fn with_executor(context: LaunchContext, executor: CommandExecutor<S>) -> Self {
        Self { context, executor }
    }

    /// The captured process state.
    pub fn context(&self) -> &LaunchContext {
        &self.context
    }

    /// The executor.
    pub fn executor(&self) -> &CommandExecutor<S> {
        &self.executor
    }

    /// Resolve and load the env file.
    ///
    /// Returns an empty mapping when no file was given and none was found.
    pub fn load_env(&self, explicit: Option<&Path>) -> Result<EnvMapping> {
        match EnvFileResolver::resolve(explicit, &self.context.cwd) {
            Some(resolved) => {
                tracing::debug!(
                    "Using env file {} (from {})",
                    resolved.path.display(),
                    resolved.source
                );
                EnvFileParser::load(&resolved.path)
            }
            None => {
                tracing::debug!("No env file found, running with inherited environment");
                Ok(EnvMapping::new())
            }
        }
    }

    /// Run the invocation described by `cli`.
    ///
    /// Returns the exit code the launcher should exit with.
    pub fn run(&self, cli: &Cli) -> Result<i32> {
        let spec = CommandSpec::new(cli.command.clone())?;
        let vars = self.load_env(cli.file.as_deref())?;
        let result = self.executor.execute(&spec, &vars, &self.context)?;
        Ok(result.launcher_exit_code())
    }
}
