//! Ordered table mapping remote URL shapes to public web URL templates.
//!
//! Each [`RemotePatternEntry`] pairs a host pattern, a regular expression
//! over a remote's fetch URL with exactly one capture group for the
//! repository identifier (`owner/name`), with three templates: one per
//! [`LinkKind`]. Lookup is first-match in table order; there is no scoring
//! and no fallback to a raw URL.
//!
//! # Public API
//! - [`RemotePatternEntry`]: Serializable table row
//! - [`RemotePatternTable`]: Compiled table with [`RemotePatternTable::find`]
//! - [`PatternMatch`]: Matched row plus the captured identifier
//! - [`default_patterns`]: Built-in rows for common hosting providers

use crate::core::error::{OrgitError, Result};
use crate::core::link::LinkKind;
use log::error;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One row of the pattern table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePatternEntry {
    pub host_pattern: String,
    pub status: String,
    pub log: String,
    pub commit: String,
}

impl RemotePatternEntry {
    pub fn new(host_pattern: &str, status: &str, log: &str, commit: &str) -> Self {
        Self {
            host_pattern: host_pattern.to_string(),
            status: status.to_string(),
            log: log.to_string(),
            commit: commit.to_string(),
        }
    }

    /// Template used for links of `kind`
    pub fn template(&self, kind: LinkKind) -> &str {
        match kind {
            LinkKind::Status => &self.status,
            LinkKind::Log => &self.log,
            LinkKind::Commit => &self.commit,
        }
    }
}

/// Built-in rows, checked in this order.
pub fn default_patterns() -> Vec<RemotePatternEntry> {
    vec![
        RemotePatternEntry::new(
            r"github\.com[:/](.+?)(?:\.git)?/?$",
            "https://github.com/%n",
            "https://github.com/%n/commits/%r",
            "https://github.com/%n/commit/%r",
        ),
        RemotePatternEntry::new(
            r"gitlab\.com[:/](.+?)(?:\.git)?/?$",
            "https://gitlab.com/%n",
            "https://gitlab.com/%n/commits/%r",
            "https://gitlab.com/%n/commit/%r",
        ),
        RemotePatternEntry::new(
            r"codeberg\.org[:/](.+?)(?:\.git)?/?$",
            "https://codeberg.org/%n",
            "https://codeberg.org/%n/commits/branch/%r",
            "https://codeberg.org/%n/commit/%r",
        ),
        RemotePatternEntry::new(
            r"bitbucket\.org[:/](.+?)(?:\.git)?/?$",
            "https://bitbucket.org/%n",
            "https://bitbucket.org/%n/commits/branch/%r",
            "https://bitbucket.org/%n/commits/%r",
        ),
        RemotePatternEntry::new(
            r"git\.sr\.ht[:/](.+?)(?:\.git)?/?$",
            "https://git.sr.ht/%n",
            "https://git.sr.ht/%n/log/%r",
            "https://git.sr.ht/%n/commit/%r",
        ),
        RemotePatternEntry::new(
            r"git\.savannah\.(?:non)?gnu\.org[:/](?:git/|srv/git/)?(.+?)(?:\.git)?/?$",
            "https://git.savannah.gnu.org/cgit/%n.git",
            "https://git.savannah.gnu.org/cgit/%n.git/log/?h=%r",
            "https://git.savannah.gnu.org/cgit/%n.git/commit/?id=%r",
        ),
        RemotePatternEntry::new(
            r"git\.kernel\.org/pub/scm/(.+?)/?$",
            "https://git.kernel.org/cgit/%n",
            "https://git.kernel.org/cgit/%n/log/?h=%r",
            "https://git.kernel.org/cgit/%n/commit/?id=%r",
        ),
        RemotePatternEntry::new(
            r"repo\.or\.cz[:/](.+?)(?:\.git)?/?$",
            "https://repo.or.cz/%n.git",
            "https://repo.or.cz/%n.git/shortlog/%r",
            "https://repo.or.cz/%n.git/commit/%r",
        ),
    ]
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    pub entry: &'a RemotePatternEntry,
    pub identifier: String,
}

impl PatternMatch<'_> {
    pub fn template(&self, kind: LinkKind) -> &str {
        self.entry.template(kind)
    }
}

/// Compiled pattern table.
#[derive(Debug, Clone)]
pub struct RemotePatternTable {
    rows: Vec<(Regex, RemotePatternEntry)>,
}

impl RemotePatternTable {
    /// Compile `entries`, keeping their order.
    ///
    /// # Errors
    /// Returns [`OrgitError::InvalidPattern`] if a host pattern does not
    /// compile or does not define exactly one capture group.
    pub fn new(entries: Vec<RemotePatternEntry>) -> Result<Self> {
        let rows = entries
            .into_iter()
            .map(|entry| Ok((compile(&entry.host_pattern)?, entry)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// The built-in table.
    pub fn builtin() -> Result<Self> {
        Self::new(default_patterns())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row whose host pattern matches `remote_url`.
    pub fn find(&self, remote_url: &str) -> Option<PatternMatch<'_>> {
        self.rows.iter().find_map(|(regex, entry)| {
            let captures = regex.captures(remote_url)?;
            let identifier = captures.get(1)?.as_str().to_string();
            Some(PatternMatch { entry, identifier })
        })
    }
}

fn compile(host_pattern: &str) -> Result<Regex> {
    let regex = Regex::new(host_pattern)
        .map_err(|e| OrgitError::invalid_pattern(host_pattern, e.to_string()))?;
    // captures_len counts the implicit whole-match group.
    if regex.captures_len() != 2 {
        return Err(OrgitError::invalid_pattern(
            host_pattern,
            "expected exactly one capture group",
        ));
    }
    Ok(regex)
}

impl Default for RemotePatternTable {
    /// The built-in table; an empty table if a built-in row fails to compile.
    fn default() -> Self {
        Self::builtin().unwrap_or_else(|err| {
            error!("Built-in remote patterns are invalid: {err}");
            Self { rows: Vec::new() }
        })
    }
}
