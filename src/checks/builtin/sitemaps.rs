//! XML sitemap availability.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

const LABEL: &str = "9. Sitemaps";

/// Passes when a sitemap index URL resolves.
pub struct SitemapsCheck;

impl ReadinessCheck for SitemapsCheck {
    fn id(&self) -> CheckId {
        CheckId::new("sitemaps")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "An XML sitemap index is served"
    }

    fn evaluate(&self, site: &SiteContext) -> CheckResult {
        match site.capabilities.sitemap_index_url() {
            Some(url) if !url.is_empty() => {
                tracing::debug!("Sitemap index at {}", url);
                CheckResult::pass(LABEL, "XML Sitemaps are enabled.")
            }
            _ => CheckResult::warn(
                LABEL,
                "Ensure XML sitemaps are submitted to search consoles.",
            ),
        }
    }
}
