//! Status vocabulary for report output.
//!
//! `StatusKind` maps a check status to its icon, its bracketed plain-text
//! form and its themed style, so every renderer shows statuses the same way.

use super::theme::ReadinessTheme;
use crate::checks::CheckStatus;

/// Canonical status kinds used across report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Heuristic met.
    Pass,
    /// Advisory warning.
    Warning,
    /// Heuristic violated.
    Fail,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Warning => "⚠",
            Self::Fail => "✗",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Pass => "[pass]",
            Self::Warning => "[warn]",
            Self::Fail => "[FAIL]",
        }
    }

    /// Status word shown next to the icon.
    pub fn title(self) -> &'static str {
        match self {
            Self::Pass => CheckStatus::Pass.title(),
            Self::Warning => CheckStatus::Warn.title(),
            Self::Fail => CheckStatus::Fail.title(),
        }
    }

    /// Icon and title, styled with the given theme.
    pub fn styled(self, theme: &ReadinessTheme) -> String {
        let text = format!("{} {}", self.icon(), self.title());
        match self {
            Self::Pass => theme.success.apply_to(text).to_string(),
            Self::Warning => theme.warning.apply_to(text).to_string(),
            Self::Fail => theme.error.apply_to(text).to_string(),
        }
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Pass => Self::Pass,
            CheckStatus::Warn => Self::Warning,
            CheckStatus::Fail => Self::Fail,
        }
    }
}
