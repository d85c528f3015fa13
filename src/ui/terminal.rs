//! Buildpack-style terminal log.

use console::Term;
use std::io::Write;

use super::{should_use_colors, BuildLog, OutputMode, StowawayTheme};

/// Terminal build log.
///
/// Steps and info lines go to stdout so they interleave with the rest of
/// the staging output; warnings and errors go to stderr.
pub struct TerminalLog {
    out: Term,
    err: Term,
    theme: StowawayTheme,
    mode: OutputMode,
}

impl TerminalLog {
    /// Create a terminal log, picking colors from the environment.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            StowawayTheme::new()
        } else {
            StowawayTheme::plain()
        };
        Self::with_theme(mode, theme)
    }

    /// Create a terminal log with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: StowawayTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl BuildLog for TerminalLog {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn begin_step(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_step(msg)).ok();
        }
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_info(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn output(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }
}
