//! Readiness checks and their evaluation.
//!
//! # Overview
//!
//! - **Checks** - Independent inspections of site state ([`ReadinessCheck`] trait)
//! - **Registry** - The fixed, ordered set of built-in checks ([`CheckRegistry`])
//! - **Results** - One [`CheckResult`] per check, collected into a [`Report`]
//! - **Output** - Human and JSON renderers for reports ([`ReportFormatter`])
//!
//! # Example
//!
//! ```
//! use ai_readiness::checks::{CheckRegistry, CheckStatus};
//! use ai_readiness::site::{LocalSiteFiles, SiteContext, SiteSnapshot};
//!
//! let site = SiteContext::from_snapshot(
//!     SiteSnapshot::default(),
//!     LocalSiteFiles::new("/nonexistent"),
//! );
//! let report = CheckRegistry::builtin(site).run_all();
//!
//! assert_eq!(report.len(), 9);
//! assert_eq!(report.get("llms_txt").unwrap().status, CheckStatus::Warn);
//! ```

pub mod builtin;
pub mod check;
pub mod output;
pub mod registry;
pub mod report;
pub mod result;

#[cfg(test)]
pub(crate) mod testing;

pub use builtin::builtin_checks;
pub use check::{CheckId, ReadinessCheck};
pub use output::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};
pub use registry::CheckRegistry;
pub use report::{Report, ReportEntry, ReportSummary};
pub use result::{CheckResult, CheckStatus};
