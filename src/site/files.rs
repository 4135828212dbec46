//! Root file access backed by a local document root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SiteFiles;

/// Reads well-known files (`robots.txt`, `llms.txt`) from a directory.
#[derive(Debug, Clone)]
pub struct LocalSiteFiles {
    root: PathBuf,
}

impl LocalSiteFiles {
    /// Create a reader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The document root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SiteFiles for LocalSiteFiles {
    fn exists(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    fn read(&self, name: &str) -> std::io::Result<Option<String>> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
