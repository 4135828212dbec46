//! Direct answers near the top of content.
//!
//! Judging whether an opening paragraph answers the reader's question needs
//! a human, so this check always asks for a manual review.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

const LABEL: &str = "2. Answer Early";

/// Reminds authors to answer the likely question in the opening words.
pub struct AnswerEarlyCheck;

impl ReadinessCheck for AnswerEarlyCheck {
    fn id(&self) -> CheckId {
        CheckId::new("answer_early")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "Opening words give a direct answer (manual review)"
    }

    fn evaluate(&self, _site: &SiteContext) -> CheckResult {
        CheckResult::warn(
            LABEL,
            "Ensure your first 100 words provide a direct answer to the user's likely question.",
        )
    }
}
