//! Heading structure of recent posts.
//!
//! AI answer engines lift passages by section, so recent posts should be
//! broken up with `<h2>`/`<h3>` subheadings.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

/// Number of recent posts sampled.
pub const SAMPLE_SIZE: usize = 5;

/// Opening-tag tokens that count as a subheading. Matched case-sensitively.
const HEADING_TOKENS: &[&str] = &["<h2", "<h3"];

const LABEL: &str = "1. Content Structure";

/// Checks that recent posts use H2/H3 subheadings.
pub struct ContentStructureCheck;

impl ReadinessCheck for ContentStructureCheck {
    fn id(&self) -> CheckId {
        CheckId::new("content_structure")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "Recent posts contain H2/H3 subheadings"
    }

    fn evaluate(&self, site: &SiteContext) -> CheckResult {
        let posts = site.content.fetch_recent_posts(SAMPLE_SIZE);
        if posts.is_empty() {
            return CheckResult::warn(LABEL, "No posts found to analyze structure.");
        }

        if let Some(post) = posts.iter().find(|p| !has_subheading(&p.content)) {
            tracing::debug!("Post {} has no H2/H3 subheading", post.id);
            return CheckResult::warn(LABEL, "Recent posts are missing H2/H3 subheadings.");
        }

        CheckResult::pass(LABEL, "Recent posts use a logical heading structure.")
    }
}

fn has_subheading(content: &str) -> bool {
    HEADING_TOKENS.iter().any(|token| content.contains(token))
}
