//! Output mode for the build log.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show steps, info lines and errors.
    #[default]
    Normal,
    /// Show nothing except warnings, errors and command output.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows step and info lines.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
