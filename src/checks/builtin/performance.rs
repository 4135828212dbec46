//! Site-wide caching.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

const LABEL: &str = "6. Performance";

/// Passes when an object cache is available.
pub struct PerformanceCheck;

impl ReadinessCheck for PerformanceCheck {
    fn id(&self) -> CheckId {
        CheckId::new("performance")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "A site-wide object cache is active"
    }

    fn evaluate(&self, site: &SiteContext) -> CheckResult {
        if site.capabilities.object_cache_active() {
            CheckResult::pass(LABEL, "Caching is active.")
        } else {
            CheckResult::warn(LABEL, "Performance optimizations (caching) not detected.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::FakeSite;
    use crate::checks::CheckStatus;
    use crate::site::EnvironmentSnapshot;

    #[test]
    fn passes_with_object_cache() {
        let site = FakeSite::new()
            .environment(EnvironmentSnapshot {
                object_cache: true,
                ..Default::default()
            })
            .build();
        assert_eq!(PerformanceCheck.evaluate(&site).status, CheckStatus::Pass);
    }

    #[test]
    fn warns_without_object_cache() {
        let result = PerformanceCheck.evaluate(&FakeSite::new().build());
        assert_eq!(result.status, CheckStatus::Warn);
    }
}
