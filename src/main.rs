//! Stowaway CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use stowaway::cli::{Cli, CommandDispatcher};
use stowaway::ui::{StowawayTheme, TerminalLog};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Diagnostics go to stderr; stdout belongs to the build log.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stowaway=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stowaway=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Stowaway starting with args: {:?}", cli);

    let mode = cli.output_mode();

    let mut log = if cli.no_color {
        TerminalLog::with_theme(mode, StowawayTheme::plain())
    } else {
        TerminalLog::new(mode)
    };

    match CommandDispatcher::new().dispatch(&cli, &mut log) {
        Ok(result) if result.success => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            // Already written to the build log by the failing command.
            tracing::debug!("Command failed: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
