//! Semantic internal linking.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

const LABEL: &str = "8. Internal Linking";

/// Asks for a manual review of internal links; not computed.
pub struct InternalLinksCheck;

impl ReadinessCheck for InternalLinksCheck {
    fn id(&self) -> CheckId {
        CheckId::new("internal_links")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "Content links related pages with descriptive anchors (manual review)"
    }

    fn evaluate(&self, _site: &SiteContext) -> CheckResult {
        CheckResult::warn(
            LABEL,
            "Manually verify that your content uses semantic internal links.",
        )
    }
}
