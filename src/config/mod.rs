//! Configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use ai_readiness::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".ai-readiness");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "site:\n  root: public").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.site.resolve_root(temp.path()), temp.path().join("public"));
//! ```
//!
//! # Configuration File Locations
//!
//! Configuration is discovered and merged in this order:
//! 1. User global config (`~/.ai-readiness/config.yml`)
//! 2. Project config (`.ai-readiness/config.yml`)
//! 3. Local overrides (`.ai-readiness/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;

pub use schema::{OutputMode, ReadinessConfig, Settings, SiteConfig, DEFAULT_SNAPSHOT_PATH};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};
