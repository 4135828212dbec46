//! Readiness report.
//!
//! A [`Report`] is the aggregate of all check results for one evaluation
//! run, kept in registry order and addressable by check id.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::check::CheckId;
use super::result::{CheckResult, CheckStatus};

/// One check's outcome within a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// The check that produced the result.
    pub id: CheckId,
    /// The result.
    pub result: CheckResult,
}

/// Ordered mapping of check id to result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

/// Counts of results by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
}

impl Report {
    /// Create a report from entries in display order.
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    /// Result for a check, by id.
    pub fn get(&self, id: &str) -> Option<&CheckResult> {
        self.entries
            .iter()
            .find(|e| e.id.as_str() == id)
            .map(|e| &e.result)
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter()
    }

    /// Check ids in order.
    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report holds no results.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count results by status.
    pub fn summary(&self) -> ReportSummary {
        let count = |status| {
            self.entries
                .iter()
                .filter(|e| e.result.status == status)
                .count()
        };
        ReportSummary {
            total: self.entries.len(),
            passed: count(CheckStatus::Pass),
            warnings: count(CheckStatus::Warn),
            failed: count(CheckStatus::Fail),
        }
    }

    /// Whether any check failed outright.
    pub fn has_failures(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.result.status == CheckStatus::Fail)
    }

    /// Whether every check passed.
    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(|e| e.result.is_pass())
    }
}

impl Serialize for Report {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.id.as_str(), &entry.result)?;
        }
        map.end()
    }
}
