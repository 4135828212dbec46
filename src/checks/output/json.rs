//! JSON output formatter.
//!
//! Formats a report as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::checks::{Report, ReportSummary};
use serde::Serialize;
use std::io::Write;

/// Formats report output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    checks: &'a Report,
    summary: ReportSummary,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            checks: report,
            summary: report.summary(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckId, CheckResult, ReportEntry};

    fn render(report: &Report) -> String {
        let mut output = Vec::new();
        JsonFormatter::new().format(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_checks_and_summary() {
        let report = Report::new(vec![
            ReportEntry {
                id: CheckId::new("performance"),
                result: CheckResult::pass("6. Performance", "Caching is active."),
            },
            ReportEntry {
                id: CheckId::new("answer_early"),
                result: CheckResult::warn("2. Answer Early", "Lead with the answer."),
            },
        ]);

        let parsed: serde_json::Value = serde_json::from_str(&render(&report)).unwrap();

        assert_eq!(parsed["checks"]["performance"]["status"], "pass");
        assert_eq!(parsed["checks"]["performance"]["label"], "6. Performance");
        assert_eq!(parsed["checks"]["answer_early"]["status"], "warn");
        assert_eq!(parsed["summary"]["total"], 2);
        assert_eq!(parsed["summary"]["passed"], 1);
        assert_eq!(parsed["summary"]["warnings"], 1);
        assert_eq!(parsed["summary"]["failed"], 0);
    }

    #[test]
    fn preserves_check_order() {
        let report = Report::new(vec![
            ReportEntry {
                id: CheckId::new("zeta"),
                result: CheckResult::pass("Z", "z"),
            },
            ReportEntry {
                id: CheckId::new("alpha"),
                result: CheckResult::pass("A", "a"),
            },
        ]);

        let output = render(&report);
        assert!(output.find("\"zeta\"").unwrap() < output.find("\"alpha\"").unwrap());
    }

    #[test]
    fn empty_report() {
        let parsed: serde_json::Value =
            serde_json::from_str(&render(&Report::default())).unwrap();
        assert_eq!(parsed["checks"], serde_json::json!({}));
        assert_eq!(parsed["summary"]["total"], 0);
    }
}
