//! AI crawler rules in `robots.txt`.
//!
//! The check passes when `robots.txt` mentions a known AI crawler user agent
//! anywhere in the file, whether to allow or to block it. Tokens are matched
//! case-insensitively.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

/// File name looked up at the site root.
pub const ROBOTS_TXT: &str = "robots.txt";

/// User-agent tokens of AI crawlers.
pub const AI_CRAWLER_TOKENS: &[&str] = &["GPTBot", "CCBot"];

const LABEL: &str = "7. Robots.txt";
const WARN_MESSAGE: &str = "Robots.txt doesn't explicitly handle AI crawlers.";

/// Passes when `robots.txt` addresses an AI crawler.
pub struct RobotsTxtCheck;

impl ReadinessCheck for RobotsTxtCheck {
    fn id(&self) -> CheckId {
        CheckId::new("robots_txt")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "robots.txt has rules for AI crawlers (GPTBot, CCBot)"
    }

    fn evaluate(&self, site: &SiteContext) -> CheckResult {
        if !site.files.exists(ROBOTS_TXT) {
            return CheckResult::warn(LABEL, WARN_MESSAGE);
        }

        let content = match site.files.read(ROBOTS_TXT) {
            Ok(Some(content)) => content,
            Ok(None) => return CheckResult::warn(LABEL, WARN_MESSAGE),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", ROBOTS_TXT, e);
                return CheckResult::warn(LABEL, WARN_MESSAGE);
            }
        };

        match find_crawler_token(&content) {
            Some(token) => {
                tracing::debug!("robots.txt mentions {}", token);
                CheckResult::pass(LABEL, "AI crawlers are explicitly mentioned.")
            }
            None => CheckResult::warn(LABEL, WARN_MESSAGE),
        }
    }
}

/// Return the first AI crawler token mentioned in `content`.
pub fn find_crawler_token(content: &str) -> Option<&'static str> {
    let haystack = content.to_lowercase();
    AI_CRAWLER_TOKENS
        .iter()
        .copied()
        .find(|token| haystack.contains(&token.to_lowercase()))
}
