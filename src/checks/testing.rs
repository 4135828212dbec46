//! Fake collaborators for check tests.

use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::sync::Arc;

use crate::site::{EnvironmentSnapshot, Post, SiteContext, SiteFiles, SiteSnapshot, User};

/// In-memory root files. A `None` entry exists but fails to read.
#[derive(Debug, Default, Clone)]
pub struct MemoryFiles {
    files: HashMap<String, Option<String>>,
}

impl MemoryFiles {
    pub fn with(mut self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), Some(content.to_string()));
        self
    }

    pub fn unreadable(mut self, name: &str) -> Self {
        self.files.insert(name.to_string(), None);
        self
    }
}

impl SiteFiles for MemoryFiles {
    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn read(&self, name: &str) -> std::io::Result<Option<String>> {
        match self.files.get(name) {
            Some(Some(content)) => Ok(Some(content.clone())),
            Some(None) => Err(Error::new(ErrorKind::PermissionDenied, "denied")),
            None => Ok(None),
        }
    }
}

/// Builder for a [`SiteContext`] backed by a snapshot and memory files.
#[derive(Debug, Default, Clone)]
pub struct FakeSite {
    pub snapshot: SiteSnapshot,
    pub files: MemoryFiles,
}

impl FakeSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(mut self, post: Post) -> Self {
        self.snapshot.posts.push(post);
        self
    }

    pub fn user(mut self, user: User) -> Self {
        self.snapshot.users.push(user);
        self
    }

    pub fn environment(mut self, environment: EnvironmentSnapshot) -> Self {
        self.snapshot.environment = environment;
        self
    }

    pub fn file(mut self, name: &str, content: &str) -> Self {
        self.files = self.files.with(name, content);
        self
    }

    pub fn unreadable_file(mut self, name: &str) -> Self {
        self.files = self.files.unreadable(name);
        self
    }

    pub fn build(self) -> SiteContext {
        let snapshot = Arc::new(self.snapshot);
        SiteContext::new(
            snapshot.clone(),
            snapshot.clone(),
            snapshot,
            Arc::new(self.files),
        )
    }
}

/// A user holding the author role.
pub fn author(id: u64, login: &str, bio: Option<&str>) -> User {
    User {
        id,
        login: login.to_string(),
        roles: vec!["author".to_string()],
        description: bio.map(String::from),
        ..Default::default()
    }
}
