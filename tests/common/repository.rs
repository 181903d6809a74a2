//! Git repository management and setup utilities
//!
//! Provides functions for creating test repositories with remotes and
//! repository-scoped `orgit.*` settings.

#![allow(dead_code)]

use orgit_export::core::error::{OrgitError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result. The TempDir must be kept alive for the
/// duration of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Repository path as stored in link text
    pub fn link_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Settings file path that does not exist, so defaults are used
    pub fn missing_settings(&self) -> PathBuf {
        self.temp_dir.path().join("no-such-settings.json")
    }
}

/// Runs a git command in `repo_path`
pub fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(OrgitError::Io)?;
    Ok(())
}

/// Sets up a fresh git repository for testing
///
/// The repository lives in a `proj` subdirectory of the temporary directory
/// so that descriptions derived from the directory name are predictable.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(OrgitError::Io)?;
    let repo_path = temp_dir.path().join("proj");
    fs::create_dir_all(&repo_path).map_err(OrgitError::Io)?;

    git(&repo_path, &["init"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    fs::write(repo.path.join("initial.txt"), "initial content\n").map_err(OrgitError::Io)?;
    git(&repo.path, &["add", "initial.txt"])?;
    git(&repo.path, &["commit", "-m", "Initial commit"])?;
    Ok(repo)
}

/// Adds a remote to the repository
pub fn add_remote(repo_path: &Path, name: &str, url: &str) -> Result<()> {
    git(repo_path, &["remote", "add", name, url])
}

/// Sets a repository-scoped config value
pub fn set_config(repo_path: &Path, key: &str, value: &str) -> Result<()> {
    git(repo_path, &["config", key, value])
}

/// Repository with a single GitHub remote named `origin`
pub fn setup_github_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;
    add_remote(&repo.path, "origin", "https://github.com/alice/proj.git")?;
    Ok(repo)
}

/// Full object id of HEAD
pub fn head_id(repo_path: &Path) -> Result<String> {
    let output = std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(repo_path)
        .output()
        .map_err(OrgitError::Io)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
