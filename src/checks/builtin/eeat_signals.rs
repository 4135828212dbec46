//! Experience, expertise, authoritativeness and trust signals.
//!
//! Only the first publishing user (in login order) is sampled.

use crate::checks::{CheckId, CheckResult, ReadinessCheck};
use crate::site::SiteContext;

const LABEL: &str = "5. E-E-A-T Signals";

/// Number of publishing users sampled.
const SAMPLE_SIZE: usize = 1;

/// Passes when the sampled author has a bio.
pub struct EeatSignalsCheck;

impl ReadinessCheck for EeatSignalsCheck {
    fn id(&self) -> CheckId {
        CheckId::new("eeat_signals")
    }

    fn label(&self) -> &str {
        LABEL
    }

    fn description(&self) -> &str {
        "Authors have biographies that demonstrate expertise"
    }

    fn evaluate(&self, site: &SiteContext) -> CheckResult {
        let has_bio = site
            .users
            .fetch_publishing_users(SAMPLE_SIZE)
            .first()
            .and_then(|user| site.users.author_bio(user.id))
            .is_some_and(|bio| !bio.is_empty());

        if has_bio {
            CheckResult::pass(LABEL, "Author bios are configured.")
        } else {
            CheckResult::warn(
                LABEL,
                "Author bios are missing; critical for demonstrating expertise.",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::testing::{author, FakeSite};
    use crate::checks::CheckStatus;
    use crate::site::User;

    #[test]
    fn passes_with_author_bio() {
        let site = FakeSite::new()
            .user(author(1, "ada", Some("Ada reviews outdoor gear.")))
            .build();
        assert_eq!(EeatSignalsCheck.evaluate(&site).status, CheckStatus::Pass);
    }

    #[test]
    fn warns_without_publishing_users() {
        let subscriber = User {
            id: 2,
            login: "sub".into(),
            roles: vec!["subscriber".into()],
            description: Some("Not an author.".into()),
            ..Default::default()
        };
        let site = FakeSite::new().user(subscriber).build();
        assert_eq!(EeatSignalsCheck.evaluate(&site).status, CheckStatus::Warn);
    }

    #[test]
    fn warns_with_empty_bio() {
        let site = FakeSite::new().user(author(1, "ada", Some(""))).build();
        assert_eq!(EeatSignalsCheck.evaluate(&site).status, CheckStatus::Warn);
    }

    #[test]
    fn warns_with_absent_bio() {
        let site = FakeSite::new().user(author(1, "ada", None)).build();
        assert_eq!(EeatSignalsCheck.evaluate(&site).status, CheckStatus::Warn);
    }

    #[test]
    fn samples_first_author_by_login() {
        // "bea" has a bio but "ada" sorts first.
        let site = FakeSite::new()
            .user(author(1, "bea", Some("Bea writes.")))
            .user(author(2, "ada", None))
            .build();
        assert_eq!(EeatSignalsCheck.evaluate(&site).status, CheckStatus::Warn);
    }

    #[test]
    fn whitespace_bio_counts_as_present() {
        let site = FakeSite::new().user(author(1, "ada", Some("  "))).build();
        assert_eq!(EeatSignalsCheck.evaluate(&site).status, CheckStatus::Pass);
    }
}
