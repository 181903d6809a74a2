//! Git repository access through `git2`.
//!
//! This module provides [`GitRepo`], a thin read-only wrapper over
//! `git2::Repository` exposing exactly the queries link storage and export
//! need, and [`GitConfigStore`], the production [`ConfigStore`].
//!
//! # Public API
//! - [`GitRepo`]: Open a repository and read remotes, config and revisions
//! - [`GitConfigStore`]: [`ConfigStore`] that reopens the repository per query
//!
//! # Key Features
//! - **Read only**: nothing in this module writes to a repository
//! - **Missing values are `None`**: unset config keys and URL-less remotes
//!   are not errors
//! - **Fresh snapshots**: every [`GitConfigStore`] call reads current config

use crate::core::{
    config_store::ConfigStore,
    error::{OrgitError, Result},
};
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository whose working directory (or git dir) is `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OrgitError::repository_not_found(path));
        }
        let repo = Repository::open(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => OrgitError::repository_not_found(path),
            _ => OrgitError::Git(e),
        })?;
        Ok(GitRepo { repo })
    }

    /// Open the repository containing `path`, searching parent directories.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => OrgitError::repository_not_found(path),
            _ => OrgitError::Git(e),
        })?;
        Ok(GitRepo { repo })
    }

    pub fn get_repository(&self) -> &Repository {
        &self.repo
    }

    /// Working directory, or the git dir for bare repositories
    pub fn get_workdir(&self) -> PathBuf {
        self.repo
            .workdir()
            .unwrap_or_else(|| self.repo.path())
            .to_path_buf()
    }

    pub fn get_remotes(&self) -> Result<Vec<String>> {
        let remotes = self.repo.remotes()?;
        Ok(remotes.iter().flatten().map(str::to_string).collect())
    }

    pub fn get_config_value(&self, key: &str) -> Result<Option<String>> {
        let config = self.repo.config()?;
        let value = match config.get_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.code() == ErrorCode::NotFound => Ok(None),
            Err(err) => Err(OrgitError::Git(err)),
        };
        value
    }

    pub fn get_remote_url(&self, name: &str) -> Result<Option<String>> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(str::to_string)),
            Err(err) if err.code() == ErrorCode::NotFound => Ok(None),
            Err(err) if err.code() == ErrorCode::InvalidSpec => Ok(None),
            Err(err) => Err(OrgitError::Git(err)),
        }
    }

    /// Full object id of the commit `revision` names
    pub fn resolve_revision(&self, revision: &str) -> Result<String> {
        let object = self.find_object(revision)?;
        Ok(object.id().to_string())
    }

    /// Shortest unambiguous object id of `revision`
    pub fn abbreviate_revision(&self, revision: &str) -> Result<String> {
        let object = self.find_object(revision)?;
        let short = object.short_id()?;
        short
            .as_str()
            .map(str::to_string)
            .ok_or(OrgitError::InvalidUtf8Path)
    }

    /// Check that `spec` (a revision or a `a..b` range) resolves
    pub fn verify_revspec(&self, spec: &str) -> Result<()> {
        self.repo
            .revparse(spec)
            .map(|_| ())
            .map_err(|_| OrgitError::unknown_revision(self.get_workdir(), spec))
    }

    fn find_object(&self, revision: &str) -> Result<git2::Object<'_>> {
        self.repo
            .revparse_single(revision)
            .and_then(|object| object.peel(git2::ObjectType::Commit))
            .map_err(|_| OrgitError::unknown_revision(self.get_workdir(), revision))
    }
}

/// [`ConfigStore`] backed by the repositories on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitConfigStore;

impl ConfigStore for GitConfigStore {
    fn list_remotes(&self, repository: &Path) -> Result<Vec<String>> {
        GitRepo::open(repository)?.get_remotes()
    }

    fn get_config(&self, repository: &Path, section: &str, key: &str) -> Result<Option<String>> {
        GitRepo::open(repository)?.get_config_value(&format!("{section}.{key}"))
    }

    fn get_remote_url(&self, repository: &Path, remote: &str) -> Result<Option<String>> {
        GitRepo::open(repository)?.get_remote_url(remote)
    }
}
