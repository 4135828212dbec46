//! Content and author records shared by the site collaborators.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Capability that lets a user publish posts.
pub const PUBLISH_CAPABILITY: &str = "publish_posts";

/// Roles that carry [`PUBLISH_CAPABILITY`] without listing it explicitly.
const PUBLISHING_ROLES: &[&str] = &["administrator", "editor", "author"];

/// A single piece of site content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Post {
    /// Unique post identifier.
    pub id: u64,

    /// Post title (display only).
    #[serde(default)]
    pub title: String,

    /// Publication status; only `publish` posts are analyzed.
    #[serde(default = "default_post_status")]
    pub status: String,

    /// Content type; only `post` entries are analyzed.
    #[serde(default = "default_post_type")]
    pub post_type: String,

    /// When the post was published (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// Raw HTML body.
    #[serde(default)]
    pub content: String,
}

impl Post {
    /// Create a published post with the given body.
    pub fn published(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            title: String::new(),
            status: default_post_status(),
            post_type: default_post_type(),
            published_at: None,
            content: content.into(),
        }
    }

    /// Set the publication timestamp.
    pub fn at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }

    /// Whether this entry is a published blog post.
    pub fn is_published_post(&self) -> bool {
        self.status == "publish" && self.post_type == "post"
    }
}

/// A site user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    /// Unique user identifier.
    pub id: u64,

    /// Login name; users are listed in login order.
    pub login: String,

    /// Public display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,

    /// Assigned roles (e.g. `author`, `editor`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// Capabilities granted directly to the user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,

    /// Author biography shown alongside their posts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl User {
    /// Whether this user may publish posts, directly or through a role.
    pub fn can_publish(&self) -> bool {
        self.capabilities.iter().any(|c| c == PUBLISH_CAPABILITY)
            || self
                .roles
                .iter()
                .any(|r| PUBLISHING_ROLES.contains(&r.as_str()))
    }
}

fn default_post_status() -> String {
    "publish".to_string()
}

fn default_post_type() -> String {
    "post".to_string()
}
