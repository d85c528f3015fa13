//! Mock build log for testing.
//!
//! `MockLog` implements the `BuildLog` trait and records every entry, in
//! order, for later assertion.
//!
//! # Example
//!
//! ```
//! use stowaway::ui::{BuildLog, MockLog};
//!
//! let mut log = MockLog::new();
//! log.begin_step("Clearing NuGet packages cache");
//! log.error("Unable to clear NuGet packages cache: denied");
//!
//! assert_eq!(log.steps(), vec!["Clearing NuGet packages cache"]);
//! assert!(log.has_error("denied"));
//! ```

use super::{BuildLog, OutputMode};

/// Severity of a recorded entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Step,
    Info,
    Warning,
    Error,
    Output,
}

/// A single recorded log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Mock build log implementation for testing.
#[derive(Debug, Default)]
pub struct MockLog {
    mode: OutputMode,
    entries: Vec<LogEntry>,
}

impl MockLog {
    /// Create a new MockLog with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockLog with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// All entries in the order they were written.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn messages_at(&self, level: LogLevel) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Get all step announcements.
    pub fn steps(&self) -> Vec<&str> {
        self.messages_at(LogLevel::Step)
    }

    /// Get all info lines.
    pub fn infos(&self) -> Vec<&str> {
        self.messages_at(LogLevel::Info)
    }

    /// Get all warnings.
    pub fn warnings(&self) -> Vec<&str> {
        self.messages_at(LogLevel::Warning)
    }

    /// Get all errors.
    pub fn errors(&self) -> Vec<&str> {
        self.messages_at(LogLevel::Error)
    }

    /// Get everything written as command output.
    pub fn outputs(&self) -> Vec<&str> {
        self.messages_at(LogLevel::Output)
    }

    /// Check if a step containing `msg` was announced.
    pub fn has_step(&self, msg: &str) -> bool {
        self.steps().iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was logged.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// Clear all recorded entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn record(&mut self, level: LogLevel, msg: &str) {
        self.entries.push(LogEntry {
            level,
            message: msg.to_string(),
        });
    }
}

impl BuildLog for MockLog {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn begin_step(&mut self, msg: &str) {
        self.record(LogLevel::Step, msg);
    }

    fn info(&mut self, msg: &str) {
        self.record(LogLevel::Info, msg);
    }

    fn warning(&mut self, msg: &str) {
        self.record(LogLevel::Warning, msg);
    }

    fn error(&mut self, msg: &str) {
        self.record(LogLevel::Error, msg);
    }

    fn output(&mut self, text: &str) {
        self.record(LogLevel::Output, text);
    }
}
