//! Normalized check outcome.
//!
//! Every check produces exactly one [`CheckResult`] carrying a label, a
//! [`CheckStatus`] and a message.

use serde::{Deserialize, Serialize};

/// Ternary outcome of a readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The site meets the heuristic.
    Pass,
    /// The heuristic is not met, or could not be verified.
    Warn,
    /// The heuristic is violated outright.
    Fail,
}

impl CheckStatus {
    /// Human-readable name used in reports.
    pub fn title(self) -> &'static str {
        match self {
            CheckStatus::Pass => "Pass",
            CheckStatus::Warn => "Warning",
            CheckStatus::Fail => "Fail",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "pass"),
            CheckStatus::Warn => write!(f, "warn"),
            CheckStatus::Fail => write!(f, "fail"),
        }
    }
}

/// The record a check produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Step name, numbered after the readiness methodology.
    pub label: String,
    /// Outcome.
    pub status: CheckStatus,
    /// Explanation or remediation advice.
    pub message: String,
}

impl CheckResult {
    /// Create a new result.
    pub fn new(label: impl Into<String>, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status,
            message: message.into(),
        }
    }

    /// Create a passing result.
    pub fn pass(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(label, CheckStatus::Pass, message)
    }

    /// Create a warning result.
    pub fn warn(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(label, CheckStatus::Warn, message)
    }

    /// Whether the check passed.
    pub fn is_pass(&self) -> bool {
        self.status == CheckStatus::Pass
    }
}
