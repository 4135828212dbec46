//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the
//! `.ai-readiness/config.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::checks::OutputFormat;

/// Default location of the site snapshot, relative to the project root.
pub const DEFAULT_SNAPSHOT_PATH: &str = ".ai-readiness/site.yml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Where the site under inspection lives
    pub site: SiteConfig,

    /// Global settings
    pub settings: Settings,

    /// Plugin option blob, stored under a fixed key. Carried through
    /// untouched; no check reads it.
    #[serde(
        rename = "ai_search_readiness_options",
        skip_serializing_if = "serde_yaml::Value::is_null"
    )]
    pub options: serde_yaml::Value,
}

/// Site location settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document root holding `robots.txt` and `llms.txt`.
    /// Defaults to the project root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Site snapshot file (YAML or JSON)
    pub snapshot: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: None,
            snapshot: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
        }
    }
}

impl SiteConfig {
    /// Document root, resolved against the project root.
    pub fn resolve_root(&self, project_root: &Path) -> PathBuf {
        match &self.root {
            Some(root) => project_root.join(root),
            None => project_root.to_path_buf(),
        }
    }

    /// Snapshot path, resolved against the project root.
    pub fn resolve_snapshot(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.snapshot)
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    pub default_output: OutputMode,

    /// Default report format: human, json
    pub default_format: OutputFormat,
}

/// Output verbosity as written in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
