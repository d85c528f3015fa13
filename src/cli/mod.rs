//! Command-line interface for Stowaway.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompileArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, CompileCommand};
