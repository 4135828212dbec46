//! Readiness check definitions.
//!
//! This module provides the core trait and identifier type for checks:
//!
//! - [`ReadinessCheck`] - The trait every check implements
//! - [`CheckId`] - Stable identifier a check's result is keyed by

use super::result::CheckResult;
use crate::site::SiteContext;

/// Stable identifier for a readiness check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckId(pub String);

impl CheckId {
    /// Create a new check ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An independent inspection of site state.
///
/// Checks read what they need from the [`SiteContext`] at evaluation time
/// and hold no state of their own. A check never fails the report: absent
/// or unreadable inputs are reported through the returned status.
pub trait ReadinessCheck: Send + Sync {
    /// Unique identifier for this check.
    fn id(&self) -> CheckId;

    /// Numbered step label shown in reports.
    fn label(&self) -> &str;

    /// Description of what this check looks at.
    fn description(&self) -> &str;

    /// Inspect the site and produce exactly one result.
    fn evaluate(&self, site: &SiteContext) -> CheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_id_equality() {
        assert_eq!(CheckId::new("robots_txt"), CheckId::new("robots_txt"));
        assert_ne!(CheckId::new("robots_txt"), CheckId::new("llms_txt"));
    }

    #[test]
    fn check_id_display() {
        let id = CheckId::new("sitemaps");
        assert_eq!(format!("{}", id), "sitemaps");
        assert_eq!(id.as_str(), "sitemaps");
    }
}
