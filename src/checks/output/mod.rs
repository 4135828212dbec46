//! Report output formatters.
//!
//! This module provides formatters for rendering a readiness [`Report`]
//! in different formats (human-readable table, JSON).

pub mod human;
pub mod json;

use crate::checks::Report;
use std::io::Write;

/// Output format for readiness reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Trait for formatting report output.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
