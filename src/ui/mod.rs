//! Build log output.
//!
//! This module provides:
//! - [`BuildLog`] trait, the sink the compile steps report through
//! - [`TerminalLog`] for buildpack-style console output
//! - [`MockLog`] which records entries for assertions
//!
//! # Example
//!
//! ```
//! use stowaway::ui::{BuildLog, MockLog};
//!
//! let mut log = MockLog::new();
//! log.begin_step("Restoring files from buildpack cache");
//! assert!(log.has_step("Restoring files"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::{LogEntry, LogLevel, MockLog};
pub use output::OutputMode;
pub use terminal::TerminalLog;
pub use theme::{should_use_colors, StowawayTheme};

/// Sink for user-facing build output.
///
/// This trait allows capturing the log in tests.
pub trait BuildLog {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Announce the start of a build step.
    fn begin_step(&mut self, msg: &str);

    /// Display a detail line belonging to the current step.
    fn info(&mut self, msg: &str);

    /// Display a warning.
    fn warning(&mut self, msg: &str);

    /// Display an error. Always shown, regardless of output mode.
    fn error(&mut self, msg: &str);

    /// Write command output such as a JSON report to stdout, regardless of
    /// output mode.
    fn output(&mut self, text: &str);
}
