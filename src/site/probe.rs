//! Capability probing against a site snapshot.
//!
//! SEO plugins are recognised by any of a few markers: the plugin's slug as
//! it appears in the active plugin list, or the main class it registers.
//! Markers are matched case-insensitively.

use super::snapshot::SiteSnapshot;
use super::CapabilityProbe;

/// Definition of an SEO plugin that is known to emit schema markup.
#[derive(Debug, Clone, Copy)]
pub struct SeoPluginDef {
    /// Display name.
    pub name: &'static str,
    /// Slugs or class names that identify the plugin.
    pub markers: &'static [&'static str],
}

/// Known SEO plugin definitions.
pub const KNOWN_SEO_PLUGINS: &[SeoPluginDef] = &[
    SeoPluginDef {
        name: "Yoast SEO",
        markers: &["wordpress-seo", "WPSEO_Options"],
    },
    SeoPluginDef {
        name: "Rank Math",
        markers: &["seo-by-rank-math", "RankMath"],
    },
];

impl SeoPluginDef {
    /// Whether `plugin` identifies this SEO plugin.
    pub fn matches(&self, plugin: &str) -> bool {
        let plugin = plugin.trim();
        // Slugs may carry the main file, e.g. `wordpress-seo/wp-seo.php`.
        let slug = plugin.split('/').next().unwrap_or(plugin);
        self.markers
            .iter()
            .any(|m| m.eq_ignore_ascii_case(plugin) || m.eq_ignore_ascii_case(slug))
    }
}

/// Find the first known SEO plugin among `active_plugins`.
pub fn detect_seo_plugin(active_plugins: &[String]) -> Option<&'static SeoPluginDef> {
    KNOWN_SEO_PLUGINS
        .iter()
        .find(|def| active_plugins.iter().any(|p| def.matches(p)))
}

impl CapabilityProbe for SiteSnapshot {
    fn seo_plugin_active(&self) -> bool {
        match detect_seo_plugin(&self.environment.active_plugins) {
            Some(def) => {
                tracing::debug!("Detected SEO plugin: {}", def.name);
                true
            }
            None => false,
        }
    }

    fn object_cache_active(&self) -> bool {
        self.environment.object_cache
    }

    fn sitemap_index_url(&self) -> Option<String> {
        self.environment
            .sitemap_index_url
            .clone()
            .filter(|url| !url.is_empty())
    }
}
