//! envdo CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use envdo::cli::{Cli, Launcher};
use envdo::config::LaunchContext;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so the command's stdout stays untouched.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("envdo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envdo=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("envdo starting with args: {:?}", cli);

    let launcher = Launcher::new(LaunchContext::from_process());

    match launcher.run(&cli) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            if e.is_usage() {
                println!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
