//! Visual theme and styling.

use console::Style;

/// Report output theme.
#[derive(Debug, Clone)]
pub struct ReadinessTheme {
    /// Style for passing checks and success messages (green).
    pub success: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for failures and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for ReadinessTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = ReadinessTheme::plain();
        assert_eq!(theme.format_success("Complete"), "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = ReadinessTheme::plain();
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = ReadinessTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn theme_formats_header() {
        let theme = ReadinessTheme::plain();
        let msg = theme.format_header("AI Search Readiness");
        assert!(msg.contains("AI Search Readiness"));
        assert!(msg.contains("◆"));
    }

    #[test]
    fn for_color_false_is_plain() {
        let theme = ReadinessTheme::for_color(false);
        assert_eq!(theme.format_success("x"), ReadinessTheme::plain().format_success("x"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ReadinessTheme::default();
        let new = ReadinessTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
