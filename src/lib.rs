//! AI search readiness checks for content sites.
//!
//! Inspects a site's content, author profiles, plugin environment and root
//! files, and reports a fixed checklist of advisory pass/warn results on how
//! well the site is prepared for AI-driven search engines.
//!
//! # Modules
//!
//! - [`checks`] - Readiness checks, the check registry and report output
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and merging
//! - [`error`] - Error types and result aliases
//! - [`site`] - Site collaborators (content, users, capabilities, root files)
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use ai_readiness::checks::{CheckRegistry, CheckStatus};
//! use ai_readiness::site::{LocalSiteFiles, Post, SiteContext, SiteSnapshot};
//!
//! let snapshot = SiteSnapshot {
//!     posts: vec![Post::published(1, "<h2>Short answer</h2><p>Yes.</p>")],
//!     ..Default::default()
//! };
//! let site = SiteContext::from_snapshot(snapshot, LocalSiteFiles::new("/nonexistent"));
//! let report = CheckRegistry::builtin(site).run_all();
//!
//! assert_eq!(report.get("content_structure").unwrap().status, CheckStatus::Pass);
//! assert!(!report.has_failures());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod site;
pub mod ui;

pub use error::{ReadinessError, Result};
