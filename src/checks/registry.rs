//! Check registry and runner.
//!
//! The [`CheckRegistry`] holds the closed set of readiness checks, in report
//! order, together with the site they are evaluated against.

use super::builtin::builtin_checks;
use super::check::{CheckId, ReadinessCheck};
use super::report::{Report, ReportEntry};
use crate::site::SiteContext;

/// Ordered set of readiness checks bound to a site.
///
/// A registry is built per report request and keeps no state between runs.
pub struct CheckRegistry {
    site: SiteContext,
    checks: Vec<Box<dyn ReadinessCheck>>,
}

impl CheckRegistry {
    /// Create a registry with the built-in checks.
    pub fn builtin(site: SiteContext) -> Self {
        Self {
            site,
            checks: builtin_checks(),
        }
    }

    /// Get a check by ID.
    pub fn get(&self, id: &CheckId) -> Option<&dyn ReadinessCheck> {
        self.checks
            .iter()
            .find(|c| &c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over checks in report order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn ReadinessCheck> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run every check in order and collect the results.
    ///
    /// Never fails: each check maps missing inputs to a status itself.
    pub fn run_all(&self) -> Report {
        let entries: Vec<ReportEntry> = self
            .checks
            .iter()
            .map(|check| {
                let result = check.evaluate(&self.site);
                tracing::debug!("{}: {}", check.id(), result.status);
                ReportEntry {
                    id: check.id(),
                    result,
                }
            })
            .collect();

        let report = Report::new(entries);
        let summary = report.summary();
        tracing::debug!(
            "Readiness checks complete: {} passed, {} warning(s), {} failed",
            summary.passed,
            summary.warnings,
            summary.failed
        );
        report
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.checks.iter().map(|c| c.id()).collect::<Vec<_>>())
            .finish()
    }
}
