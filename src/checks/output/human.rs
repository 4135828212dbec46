//! Human-readable output formatter.
//!
//! Renders a report as a Step | Status | Details table followed by a
//! one-line summary.

use super::ReportFormatter;
use crate::checks::Report;
use crate::ui::{ReadinessTheme, StatusKind, Table};
use std::io::Write;

/// Formats report output for human consumption.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        let theme = ReadinessTheme::for_color(self.use_color);

        let mut table = Table::new(vec!["Step", "Status", "Details"]);
        for entry in report.iter() {
            let status = StatusKind::from(entry.result.status).styled(&theme);
            table.add_row(vec![
                entry.result.label.as_str(),
                status.as_str(),
                entry.result.message.as_str(),
            ]);
        }
        write!(writer, "{}", table.render())?;

        let summary = report.summary();
        writeln!(writer)?;
        writeln!(
            writer,
            "{} passed, {} warning(s), {} failed",
            summary.passed, summary.warnings, summary.failed
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckId, CheckResult, CheckStatus, ReportEntry};

    fn report() -> Report {
        Report::new(vec![
            ReportEntry {
                id: CheckId::new("llms_txt"),
                result: CheckResult::pass("7b. LLMS.txt", "llms.txt found."),
            },
            ReportEntry {
                id: CheckId::new("sitemaps"),
                result: CheckResult::warn(
                    "9. Sitemaps",
                    "Ensure XML sitemaps are submitted to search consoles.",
                ),
            },
            ReportEntry {
                id: CheckId::new("custom"),
                result: CheckResult::new("X. Custom", CheckStatus::Fail, "Broken."),
            },
        ])
    }

    fn render(report: &Report) -> String {
        let mut output = Vec::new();
        HumanFormatter::new(false)
            .format(report, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn renders_table_header() {
        let output = render(&report());
        assert!(output.contains("Step"));
        assert!(output.contains("Status"));
        assert!(output.contains("Details"));
    }

    #[test]
    fn renders_one_row_per_check_in_order() {
        let output = render(&report());
        let llms = output.find("7b. LLMS.txt").unwrap();
        let sitemaps = output.find("9. Sitemaps").unwrap();
        assert!(llms < sitemaps);
        assert!(output.contains("llms.txt found."));
    }

    #[test]
    fn renders_status_titles() {
        let output = render(&report());
        assert!(output.contains("✓ Pass"));
        assert!(output.contains("⚠ Warning"));
        assert!(output.contains("✗ Fail"));
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let output = render(&report());
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn renders_summary_line() {
        let output = render(&report());
        assert!(output.contains("1 passed, 1 warning(s), 1 failed"));
    }

    #[test]
    fn empty_report_still_has_summary() {
        let output = render(&Report::default());
        assert!(output.contains("0 passed, 0 warning(s), 0 failed"));
    }
}
