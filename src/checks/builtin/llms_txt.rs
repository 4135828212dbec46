//! `llms.txt` at the site root.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

/// File name looked up at the site root.
pub const LLMS_TXT: &str = "llms.txt";

const LABEL: &str = "7b. LLMS.txt";

/// Passes when the site publishes an `llms.txt`.
pub struct LlmsTxtCheck;

impl ReadinessCheck for LlmsTxtCheck {
    fn id(&self) -> CheckId {
        CheckId::new("llms_txt")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "An llms.txt file is published at the site root"
    }

    fn evaluate(&self, site: &SiteContext) -> CheckResult {
        if site.files.exists(LLMS_TXT) {
            CheckResult::pass(LABEL, "llms.txt found.")
        } else {
            CheckResult::warn(
                LABEL,
                "llms.txt not found. Recommended for modern AI discovery.",
            )
        }
    }
}
