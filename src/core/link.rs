//! Compact link encoding used in documents.
//!
//! A stored link is a scheme followed by an address:
//!
//! ```text
//! orgit:<path>                  status view
//! orgit-log:<path>::<revision>  log view
//! orgit-rev:<path>::<revision>  commit view
//! ```
//!
//! # Public API
//! - [`LinkKind`]: Which view a link points at
//! - [`LinkAddress`]: The `path[::revision]` part
//! - [`Link`]: A kind plus an address, parsed from and rendered to link text
//!
//! The repository path may never contain the `::` separator; constructors
//! reject such paths so that serialization always round-trips.

use crate::core::error::{OrgitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Separator between the repository path and the revision.
pub const SEPARATOR: &str = "::";

/// The view a link refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Status,
    Log,
    Commit,
}

impl LinkKind {
    pub const ALL: [LinkKind; 3] = [LinkKind::Status, LinkKind::Log, LinkKind::Commit];

    /// Scheme identifier used in link text, without the trailing colon
    pub fn scheme(self) -> &'static str {
        match self {
            LinkKind::Status => "orgit",
            LinkKind::Log => "orgit-log",
            LinkKind::Commit => "orgit-rev",
        }
    }

    /// Key under the `orgit` section holding the direct URL override
    pub fn config_key(self) -> &'static str {
        match self {
            LinkKind::Status => "status",
            LinkKind::Log => "log",
            LinkKind::Commit => "rev",
        }
    }

    /// Whether links of this kind must carry a revision
    pub fn requires_revision(self) -> bool {
        !matches!(self, LinkKind::Status)
    }

    fn from_scheme(scheme: &str) -> Option<Self> {
        LinkKind::ALL.into_iter().find(|kind| kind.scheme() == scheme)
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LinkKind::Status => "status",
            LinkKind::Log => "log",
            LinkKind::Commit => "commit",
        };
        f.write_str(name)
    }
}

/// Repository path plus an optional revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkAddress {
    repository: String,
    revision: Option<String>,
}

impl LinkAddress {
    /// Build an address that renders back to itself.
    ///
    /// Rejects paths containing the separator, empty revisions, revisions
    /// containing the separator, and paths ending in `:` when a revision
    /// follows (the colon would merge into the separator).
    pub fn new(repository: impl Into<String>, revision: Option<String>) -> Result<Self> {
        let repository = repository.into();
        if repository.contains(SEPARATOR) {
            return Err(OrgitError::malformed_link(
                repository,
                "repository path contains '::'",
            ));
        }
        if repository.is_empty() {
            return Err(OrgitError::malformed_link(repository, "empty repository path"));
        }
        if let Some(revision) = &revision {
            let text = format!("{repository}{SEPARATOR}{revision}");
            if revision.is_empty() {
                return Err(OrgitError::malformed_link(text, "empty revision"));
            }
            if revision.contains(SEPARATOR) {
                return Err(OrgitError::malformed_link(text, "revision contains '::'"));
            }
            if repository.ends_with(':') {
                return Err(OrgitError::malformed_link(
                    text,
                    "repository path ends with ':'",
                ));
            }
        }
        Ok(Self {
            repository,
            revision,
        })
    }

    pub fn from_path(repository: &Path, revision: Option<String>) -> Result<Self> {
        let repository = repository.to_str().ok_or(OrgitError::InvalidUtf8Path)?;
        Self::new(repository, revision)
    }

    /// Split `path[::revision]`.
    ///
    /// An empty revision after the separator, or a second separator, is
    /// rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let mut parts = text.split(SEPARATOR);
        let repository = parts.next().unwrap_or_default();
        let revision = parts.next();

        if parts.next().is_some() {
            return Err(OrgitError::malformed_link(
                text,
                "repository path contains '::'",
            ));
        }
        if revision == Some("") {
            return Err(OrgitError::malformed_link(text, "empty revision"));
        }

        Self::new(repository, revision.map(str::to_string)).map_err(|err| match err {
            OrgitError::MalformedLinkAddress { reason, .. } => {
                OrgitError::malformed_link(text, reason)
            }
            other => other,
        })
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// Repository path with a leading `~` expanded to the home directory.
    pub fn expanded_repository(&self) -> PathBuf {
        crate::core::dirs::expand_home(&self.repository)
    }
}

impl fmt::Display for LinkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.revision {
            Some(revision) => write!(f, "{}{}{}", self.repository, SEPARATOR, revision),
            None => f.write_str(&self.repository),
        }
    }
}

impl FromStr for LinkAddress {
    type Err = OrgitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A stored link: view kind plus address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    pub kind: LinkKind,
    pub address: LinkAddress,
}

impl Link {
    /// Build a link, checking that the revision matches what `kind` expects.
    pub fn new(kind: LinkKind, address: LinkAddress) -> Result<Self> {
        let link = Self { kind, address };
        link.validate(&link.to_string())?;
        Ok(link)
    }

    /// Parse link text such as `orgit-rev:/src/proj::deadbeef`.
    pub fn parse(text: &str) -> Result<Self> {
        let (scheme, rest) = text
            .split_once(':')
            .ok_or_else(|| OrgitError::malformed_link(text, "missing link scheme"))?;
        let kind = LinkKind::from_scheme(scheme)
            .ok_or_else(|| OrgitError::malformed_link(text, "unknown link scheme"))?;
        let address = LinkAddress::parse(rest).map_err(|err| match err {
            OrgitError::MalformedLinkAddress { reason, .. } => {
                OrgitError::malformed_link(text, reason)
            }
            other => other,
        })?;

        let link = Self { kind, address };
        link.validate(text)?;
        Ok(link)
    }

    fn validate(&self, text: &str) -> Result<()> {
        match (self.kind.requires_revision(), self.address.revision()) {
            (true, None) => Err(OrgitError::malformed_link(text, "missing revision")),
            // A status path never carries a separator, so any revision here
            // means the path itself contained `::`.
            (false, Some(_)) => Err(OrgitError::malformed_link(
                text,
                "repository path contains '::'",
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.scheme(), self.address)
    }
}

impl FromStr for Link {
    type Err = OrgitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
