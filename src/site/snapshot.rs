//! Site snapshot loading.
//!
//! A snapshot is a YAML (or JSON) description of the site state the checks
//! look at: recent posts, user accounts and environment capabilities.
//!
//! ```yaml
//! posts:
//!   - id: 12
//!     title: Choosing a tent
//!     published_at: 2026-03-02T09:00:00Z
//!     content: "<h2>Weight</h2><p>...</p>"
//! users:
//!   - id: 1
//!     login: ada
//!     roles: [author]
//!     description: Ada has reviewed outdoor gear since 2009.
//! environment:
//!   active_plugins: [wordpress-seo]
//!   object_cache: true
//!   sitemap_index_url: https://example.com/wp-sitemap.xml
//! ```

use std::cmp::Reverse;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::types::{Post, User};
use super::{ContentStore, UserStore};
use crate::error::{ReadinessError, Result};

/// Point-in-time description of a site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SiteSnapshot {
    /// Site content, in any order.
    pub posts: Vec<Post>,

    /// User accounts, in any order.
    pub users: Vec<User>,

    /// Hosting environment facts.
    pub environment: EnvironmentSnapshot,
}

/// Facts about the hosting environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EnvironmentSnapshot {
    /// Active plugin slugs or class names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub active_plugins: Vec<String>,

    /// Whether a persistent object cache is configured.
    pub object_cache: bool,

    /// Sitemap index URL, if sitemaps are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sitemap_index_url: Option<String>,
}

impl SiteSnapshot {
    /// Load a snapshot file.
    ///
    /// A missing file yields an empty snapshot, so every check that depends
    /// on it reports a warning instead of aborting the report.
    ///
    /// # Errors
    ///
    /// Returns `SnapshotParseError` if the file is not valid YAML/JSON for
    /// the snapshot format, or `Io` for read faults other than absence.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No site snapshot at {}; using an empty one", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(ReadinessError::Io(e)),
        };

        Self::parse(&content, path)
    }

    /// Parse snapshot content. `source_path` is used for error reporting.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ReadinessError::SnapshotParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl ContentStore for SiteSnapshot {
    fn fetch_recent_posts(&self, limit: usize) -> Vec<Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| p.is_published_post())
            .collect();

        // Undated posts sort last since `None < Some(_)`.
        posts.sort_by_key(|p| (Reverse(p.published_at), Reverse(p.id)));

        posts.into_iter().take(limit).cloned().collect()
    }
}

impl UserStore for SiteSnapshot {
    fn fetch_publishing_users(&self, limit: usize) -> Vec<User> {
        let mut users: Vec<&User> = self.users.iter().filter(|u| u.can_publish()).collect();
        users.sort_by(|a, b| a.login.cmp(&b.login));
        users.into_iter().take(limit).cloned().collect()
    }

    fn author_bio(&self, user_id: u64) -> Option<String> {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .and_then(|u| u.description.clone())
    }
}
