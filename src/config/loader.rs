//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::ReadinessConfig;
use crate::error::{ReadinessError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project and user configuration.
pub const CONFIG_DIR: &str = ".ai-readiness";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.ai-readiness/config.yml`)
/// 2. Project config (`.ai-readiness/config.yml`)
/// 3. Local overrides (`.ai-readiness/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.ai-readiness/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .ai-readiness/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .ai-readiness/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: Self::find_user_global(),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    fn find_user_global() -> Option<PathBuf> {
        existing(dirs::home_dir()?.join(CONFIG_DIR).join("config.yml"))
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. `.ai-readiness` directory (primary indicator)
/// 2. `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into [`ReadinessConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ReadinessConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content into [`ReadinessConfig`].
///
/// `source_path` is used for error reporting only.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ReadinessConfig> {
    serde_yaml::from_str(content).map_err(|e| ReadinessError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;

    serde_yaml::from_str(&content).map_err(|e| ReadinessError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ReadinessError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReadinessError::Io(e)
        }
    })
}

/// Load and merge all config files for a project.
///
/// Discovers and merges configs in [`ConfigPaths`] order. When no config
/// file exists anywhere, returns the defaults.
///
/// # Errors
///
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<ReadinessConfig> {
    let paths = ConfigPaths::discover(project_root);

    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!(path = %path.display(), "loading config");
        let value = load_config_value(path)?;
        // An empty file parses to null; treat it as "no changes".
        if !value.is_null() {
            configs.push(value);
        }
    }

    if configs.is_empty() {
        return Ok(ReadinessConfig::default());
    }

    let merged = merge_configs(&configs);

    serde_yaml::from_value(merged).map_err(|e| ReadinessError::ConfigParseError {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
) -> Result<ReadinessConfig> {
    if let Some(override_path) = config_override {
        load_config_file(override_path)
    } else {
        load_merged_config(project_root)
    }
}
