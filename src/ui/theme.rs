//! Visual theme and styling for the build log.

use console::Style;

/// Marker printed in front of every step line.
pub const STEP_MARKER: &str = "----->";

/// Indentation used for lines that belong to the current step.
pub const INDENT: &str = "       ";

/// Stowaway's visual theme.
#[derive(Debug, Clone)]
pub struct StowawayTheme {
    /// Style for the step marker (cyan bold).
    pub step: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for StowawayTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StowawayTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            step: Style::new().cyan().bold(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            step: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a step line: `-----> Restoring files`.
    pub fn format_step(&self, msg: &str) -> String {
        format!("{} {}", self.step.apply_to(STEP_MARKER), msg)
    }

    /// Format an informational line under the current step.
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}{}", INDENT, self.dim.apply_to(msg))
    }

    /// Format a warning line.
    pub fn format_warning(&self, msg: &str) -> String {
        format!(
            "{}{}",
            INDENT,
            self.warning.apply_to(format!("**WARNING** {}", msg))
        )
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!(
            "{}{}",
            INDENT,
            self.error.apply_to(format!("**ERROR** {}", msg))
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
