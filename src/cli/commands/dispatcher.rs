//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::BuildLog;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `log` - Build log for user-facing output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] on success. An `Err` has already been written
    /// to `log`.
    fn execute(&self, log: &mut dyn BuildLog) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { success: true }
    }
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, log: &mut dyn BuildLog) -> Result<CommandResult> {
        match &cli.command {
            Commands::Compile(args) => {
                let cmd = super::compile::CompileCommand::new(args.clone());
                cmd.execute(log)
            }
        }
    }
}
