//! Site collaborators consulted by the readiness checks.
//!
//! Checks never reach into the host directly. Everything they inspect is
//! supplied through four small traits, bundled into a [`SiteContext`]:
//!
//! - [`ContentStore`] - recently published posts
//! - [`UserStore`] - users with publishing rights and their author bios
//! - [`CapabilityProbe`] - named facts about the hosting environment
//! - [`SiteFiles`] - well-known files at the site root
//!
//! [`SiteSnapshot`] implements the first three from a YAML/JSON description
//! of the site, and [`LocalSiteFiles`] reads root files from a document root.
//!
//! # Example
//!
//! ```
//! use ai_readiness::site::{ContentStore, Post, SiteSnapshot};
//!
//! let snapshot = SiteSnapshot {
//!     posts: vec![Post::published(1, "<h2>Intro</h2>")],
//!     ..Default::default()
//! };
//! assert_eq!(snapshot.fetch_recent_posts(5).len(), 1);
//! ```

pub mod files;
pub mod probe;
pub mod snapshot;
pub mod types;

use std::sync::Arc;

pub use files::LocalSiteFiles;
pub use probe::{SeoPluginDef, KNOWN_SEO_PLUGINS};
pub use snapshot::{EnvironmentSnapshot, SiteSnapshot};
pub use types::{Post, User, PUBLISH_CAPABILITY};

/// Source of published content.
pub trait ContentStore: Send + Sync {
    /// Fetch up to `limit` published posts, newest first.
    fn fetch_recent_posts(&self, limit: usize) -> Vec<Post>;
}

/// Source of author accounts.
pub trait UserStore: Send + Sync {
    /// Fetch up to `limit` users allowed to publish, ordered by login.
    fn fetch_publishing_users(&self, limit: usize) -> Vec<User>;

    /// Look up the author bio for a user, if one is set.
    fn author_bio(&self, user_id: u64) -> Option<String>;
}

/// Named queries against the hosting environment.
pub trait CapabilityProbe: Send + Sync {
    /// Whether a known SEO plugin is active.
    fn seo_plugin_active(&self) -> bool;

    /// Whether a site-wide object cache is available.
    fn object_cache_active(&self) -> bool;

    /// The sitemap index URL, if sitemaps are served.
    fn sitemap_index_url(&self) -> Option<String>;
}

/// Access to files at the site root.
pub trait SiteFiles: Send + Sync {
    /// Whether `name` exists at the site root.
    fn exists(&self, name: &str) -> bool;

    /// Read `name` from the site root.
    ///
    /// Returns `Ok(None)` when the file is absent. `Err` is reserved for
    /// faults other than absence (permissions, invalid UTF-8, ...).
    fn read(&self, name: &str) -> std::io::Result<Option<String>>;
}

/// The collaborators a report is evaluated against.
#[derive(Clone)]
pub struct SiteContext {
    pub content: Arc<dyn ContentStore>,
    pub users: Arc<dyn UserStore>,
    pub capabilities: Arc<dyn CapabilityProbe>,
    pub files: Arc<dyn SiteFiles>,
}

impl SiteContext {
    /// Assemble a context from individual collaborators.
    pub fn new(
        content: Arc<dyn ContentStore>,
        users: Arc<dyn UserStore>,
        capabilities: Arc<dyn CapabilityProbe>,
        files: Arc<dyn SiteFiles>,
    ) -> Self {
        Self {
            content,
            users,
            capabilities,
            files,
        }
    }

    /// Back content, users and capabilities with one snapshot.
    pub fn from_snapshot(snapshot: SiteSnapshot, files: impl SiteFiles + 'static) -> Self {
        let snapshot = Arc::new(snapshot);
        Self {
            content: snapshot.clone(),
            users: snapshot.clone(),
            capabilities: snapshot,
            files: Arc::new(files),
        }
    }
}

impl std::fmt::Debug for SiteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteContext").finish_non_exhaustive()
    }
}
