//! Domain-specific error types for link storage and export.
//!
//! This module defines [`OrgitError`], the single error type returned by every
//! operation in the crate. It uses `thiserror` for the definitions and offers
//! small constructors for the variants that carry owned context.
//!
//! # Public API
//! - [`OrgitError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, OrgitError>`
//!
//! # Error Categories
//! - **Resolution**: no public remote, no public url, malformed templates
//! - **Link text**: stored links that do not split into `path[::revision]`
//! - **Repository access**: missing repositories, unknown revisions, git2 errors
//! - **Settings**: unreadable or unparsable settings files, invalid patterns

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for orgit-export
#[derive(Error, Debug)]
pub enum OrgitError {
    // Resolution errors
    #[error(
        "Malformed template '{template}'{}: unbound placeholder '%{specifier}'",
        link_context(.link)
    )]
    MalformedTemplate {
        template: String,
        specifier: String,
        /// Stored link being resolved, when known
        link: Option<String>,
    },

    #[error("Cannot determine public remote for {repository}")]
    NoPublicRemote { repository: String },

    #[error("Cannot determine public url for {link}")]
    NoPublicUrl { link: String },

    // Link text errors
    #[error("Malformed link '{link}': {reason}")]
    MalformedLinkAddress { link: String, reason: &'static str },

    // Repository errors
    #[error("Repository does not exist: {path}")]
    RepositoryNotFound { path: PathBuf },

    #[error("Revision '{revision}' does not exist in {repository}")]
    UnknownRevision {
        repository: PathBuf,
        revision: String,
    },

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    // Settings errors
    #[error("Invalid remote pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to parse settings file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn link_context(link: &Option<String>) -> String {
    link.as_ref()
        .map(|link| format!(" in {link}"))
        .unwrap_or_default()
}

/// Convenience type alias for Results using OrgitError
pub type Result<T> = std::result::Result<T, OrgitError>;

impl OrgitError {
    /// Create a malformed template error naming the offending specifier
    pub fn malformed_template(template: impl Into<String>, specifier: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            template: template.into(),
            specifier: specifier.into(),
            link: None,
        }
    }

    /// Attach the stored link text to a template error; other errors pass through
    pub fn with_link(self, link: &str) -> Self {
        match self {
            Self::MalformedTemplate {
                template,
                specifier,
                ..
            } => Self::MalformedTemplate {
                template,
                specifier,
                link: Some(link.to_string()),
            },
            other => other,
        }
    }

    /// Create a no public remote error for a repository path
    pub fn no_public_remote(repository: impl Into<String>) -> Self {
        Self::NoPublicRemote {
            repository: repository.into(),
        }
    }

    /// Create a no public url error for the original stored link text
    pub fn no_public_url(link: impl Into<String>) -> Self {
        Self::NoPublicUrl { link: link.into() }
    }

    /// Create a malformed link error
    pub fn malformed_link(link: impl Into<String>, reason: &'static str) -> Self {
        Self::MalformedLinkAddress {
            link: link.into(),
            reason,
        }
    }

    /// Create a repository not found error
    pub fn repository_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RepositoryNotFound { path: path.into() }
    }

    /// Create an unknown revision error
    pub fn unknown_revision(repository: impl Into<PathBuf>, revision: impl Into<String>) -> Self {
        Self::UnknownRevision {
            repository: repository.into(),
            revision: revision.into(),
        }
    }

    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a settings parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_public_remote_names_repository() {
        let err = OrgitError::no_public_remote("/home/alice/proj");
        assert_eq!(
            err.to_string(),
            "Cannot determine public remote for /home/alice/proj"
        );
    }

    #[test]
    fn test_no_public_url_names_link() {
        let err = OrgitError::no_public_url("orgit-rev:/repo::deadbeef");
        assert_eq!(
            err.to_string(),
            "Cannot determine public url for orgit-rev:/repo::deadbeef"
        );
    }

    #[test]
    fn test_malformed_template_error() {
        let err = OrgitError::malformed_template("%x", "x");
        assert!(err.to_string().contains("'%x'"));
    }

    #[test]
    fn test_malformed_template_with_link() {
        let err = OrgitError::malformed_template("http://x/%q", "q").with_link("orgit:/srv/proj");
        assert_eq!(
            err.to_string(),
            "Malformed template 'http://x/%q' in orgit:/srv/proj: unbound placeholder '%q'"
        );
    }

    #[test]
    fn test_with_link_keeps_other_errors() {
        let err = OrgitError::no_public_remote("/repo").with_link("orgit:/repo");
        assert!(matches!(err, OrgitError::NoPublicRemote { .. }));
    }

    #[test]
    fn test_malformed_link_error() {
        let err = OrgitError::malformed_link("orgit-log:/repo", "missing revision");
        assert_eq!(
            err.to_string(),
            "Malformed link 'orgit-log:/repo': missing revision"
        );
    }

    #[test]
    fn test_unknown_revision_error() {
        let err = OrgitError::unknown_revision("/repo", "nope");
        assert!(err.to_string().contains("nope"));
        assert!(err.to_string().contains("/repo"));
    }

    #[test]
    fn test_config_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = OrgitError::config_parse("/test/config.json", json_err);
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }
}
