//! Read-only access to repository-scoped configuration.
//!
//! The resolver never talks to git directly; it goes through [`ConfigStore`],
//! which [`crate::core::git::GitConfigStore`] implements on top of `git2`
//! and [`MemoryConfigStore`] implements from plain maps.

use crate::core::error::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Repository configuration snapshot source.
pub trait ConfigStore {
    /// Names of the configured remotes, in configuration order.
    fn list_remotes(&self, repository: &Path) -> Result<Vec<String>>;

    /// Value of `section.key`, or `None` when unset.
    fn get_config(&self, repository: &Path, section: &str, key: &str) -> Result<Option<String>>;

    /// Fetch URL of the named remote, or `None` when it has none.
    fn get_remote_url(&self, repository: &Path, remote: &str) -> Result<Option<String>>;
}

#[derive(Debug, Default, Clone)]
struct RepositoryState {
    remotes: Vec<(String, Option<String>)>,
    config: HashMap<String, String>,
}

/// In-memory [`ConfigStore`] for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryConfigStore {
    repositories: HashMap<PathBuf, RepositoryState>,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a remote; remotes keep insertion order.
    pub fn with_remote(mut self, repository: impl Into<PathBuf>, name: &str, url: &str) -> Self {
        self.repositories
            .entry(repository.into())
            .or_default()
            .remotes
            .push((name.to_string(), Some(url.to_string())));
        self
    }

    /// Set `section.key` for a repository.
    pub fn with_config(
        mut self,
        repository: impl Into<PathBuf>,
        section: &str,
        key: &str,
        value: &str,
    ) -> Self {
        self.repositories
            .entry(repository.into())
            .or_default()
            .config
            .insert(format!("{section}.{key}"), value.to_string());
        self
    }

    fn state(&self, repository: &Path) -> Option<&RepositoryState> {
        self.repositories.get(repository)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn list_remotes(&self, repository: &Path) -> Result<Vec<String>> {
        Ok(self
            .state(repository)
            .map(|state| state.remotes.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default())
    }

    fn get_config(&self, repository: &Path, section: &str, key: &str) -> Result<Option<String>> {
        Ok(self
            .state(repository)
            .and_then(|state| state.config.get(&format!("{section}.{key}")).cloned()))
    }

    fn get_remote_url(&self, repository: &Path, remote: &str) -> Result<Option<String>> {
        Ok(self.state(repository).and_then(|state| {
            state
                .remotes
                .iter()
                .find(|(name, _)| name == remote)
                .and_then(|(_, url)| url.clone())
        }))
    }
}
