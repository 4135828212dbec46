//! Structured data via an SEO plugin.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

const LABEL: &str = "4. Schema Markup";

/// Passes when a known SEO plugin, which emits schema markup, is active.
pub struct SchemaMarkupCheck;

impl ReadinessCheck for SchemaMarkupCheck {
    fn id(&self) -> CheckId {
        CheckId::new("schema_markup")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "An SEO plugin that emits structured data is active"
    }

    fn evaluate(&self, site: &SiteContext) -> CheckResult {
        if site.capabilities.seo_plugin_active() {
            CheckResult::pass(LABEL, "SEO plugin detected; likely handling Schema markup.")
        } else {
            CheckResult::warn(LABEL, "No dedicated SEO plugin detected for structured data.")
        }
    }
}
