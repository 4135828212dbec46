//! Built-in readiness checks.
//!
//! One module per step of the readiness methodology. Step 3 has no
//! automated counterpart.

pub mod answer_early;
pub mod content_structure;
pub mod eeat_signals;
pub mod internal_links;
pub mod llms_txt;
pub mod performance;
pub mod robots_txt;
pub mod schema_markup;
pub mod sitemaps;

pub use answer_early::AnswerEarlyCheck;
pub use content_structure::ContentStructureCheck;
pub use eeat_signals::EeatSignalsCheck;
pub use internal_links::InternalLinksCheck;
pub use llms_txt::LlmsTxtCheck;
pub use performance::PerformanceCheck;
pub use robots_txt::RobotsTxtCheck;
pub use schema_markup::SchemaMarkupCheck;
pub use sitemaps::SitemapsCheck;

use super::ReadinessCheck;

/// The built-in checks, in report order.
pub fn builtin_checks() -> Vec<Box<dyn ReadinessCheck>> {
    vec![
        Box::new(ContentStructureCheck),
        Box::new(AnswerEarlyCheck),
        Box::new(SchemaMarkupCheck),
        Box::new(EeatSignalsCheck),
        Box::new(PerformanceCheck),
        Box::new(RobotsTxtCheck),
        Box::new(LlmsTxtCheck),
        Box::new(InternalLinksCheck),
        Box::new(SitemapsCheck),
    ]
}
