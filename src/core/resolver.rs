//! Export-time resolution of stored links into public web URLs.
//!
//! [`LinkResolver`] turns a repository address, a [`LinkKind`] and an
//! [`OutputFormat`] into the text that replaces the link in an exported
//! document. Resolution runs in a fixed order:
//!
//! 1. Pick the public remote from the configured remotes, `orgit.remote`
//!    and the default remote name.
//! 2. If `orgit.<status|log|rev>` is set, it is the URL template and only
//!    `%r` is bound. Otherwise the remote's URL is matched against the
//!    pattern table and the row's template is used with `%n` and `%r`.
//!    The two sources never cascade into each other.
//! 3. Wrap the URL for the output format.
//!
//! Every failure is terminal for the call; configuration is re-read on
//! every call.

use crate::core::{
    config::{Settings, DEFAULT_REMOTE},
    config_store::ConfigStore,
    error::{OrgitError, Result},
    link::{Link, LinkAddress, LinkKind},
    patterns::RemotePatternTable,
    remote::select_remote,
    template::substitute,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Config section holding repository-scoped overrides
pub const CONFIG_SECTION: &str = "orgit";

/// Markup the resolved URL is embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    PlainText,
    Html,
    Latex,
    Other,
}

impl OutputFormat {
    /// Embed `url` with description `desc`.
    ///
    /// Plain text and other formats drop the description.
    pub fn wrap(self, url: &str, desc: &str) -> String {
        match self {
            OutputFormat::Html => format!("<a href=\"{url}\">{desc}</a>"),
            OutputFormat::Latex => format!("\\href{{{url}}}{{{desc}}}"),
            OutputFormat::PlainText | OutputFormat::Other => url.to_string(),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" | "ascii" => Ok(OutputFormat::PlainText),
            "html" => Ok(OutputFormat::Html),
            "latex" => Ok(OutputFormat::Latex),
            "other" => Ok(OutputFormat::Other),
            _ => Err(format!("unknown output format '{s}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::PlainText => "plain",
            OutputFormat::Html => "html",
            OutputFormat::Latex => "latex",
            OutputFormat::Other => "other",
        };
        f.write_str(name)
    }
}

/// Resolves link addresses to public URLs using a [`ConfigStore`].
pub struct LinkResolver<S: ConfigStore> {
    store: S,
    patterns: RemotePatternTable,
    default_remote: String,
}

impl<S: ConfigStore> LinkResolver<S> {
    pub fn new(store: S, patterns: RemotePatternTable, default_remote: impl Into<String>) -> Self {
        Self {
            store,
            patterns,
            default_remote: default_remote.into(),
        }
    }

    /// Resolver using the built-in pattern table and `origin`
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, RemotePatternTable::default(), DEFAULT_REMOTE)
    }

    pub fn from_settings(store: S, settings: &Settings) -> Result<Self> {
        Ok(Self::new(
            store,
            settings.pattern_table()?,
            settings.default_remote.as_str(),
        ))
    }

    /// Select the public remote of the repository at `address`.
    ///
    /// # Errors
    /// [`OrgitError::NoPublicRemote`] naming the repository path.
    pub fn public_remote(&self, address: &LinkAddress) -> Result<String> {
        let repository = address.expanded_repository();
        let remotes = self.store.list_remotes(&repository)?;
        let preferred = self.store.get_config(&repository, CONFIG_SECTION, "remote")?;

        select_remote(&remotes, preferred.as_deref(), &self.default_remote)
            .map(str::to_string)
            .ok_or_else(|| OrgitError::no_public_remote(address.repository()))
    }

    /// Resolve the raw public URL for `address` viewed as `kind`.
    pub fn resolve_url(&self, address: &LinkAddress, kind: LinkKind) -> Result<String> {
        let link_text = format!("{}:{}", kind.scheme(), address);
        match (kind.requires_revision(), address.revision()) {
            (true, None) => return Err(OrgitError::malformed_link(link_text, "missing revision")),
            (false, Some(_)) => {
                return Err(OrgitError::malformed_link(link_text, "unexpected revision"))
            }
            _ => {}
        }

        let repository = address.expanded_repository();
        let remote = self.public_remote(address)?;

        let revision = address.revision();
        let mut bindings: Vec<(char, &str)> = Vec::with_capacity(2);
        if let Some(revision) = revision {
            bindings.push(('r', revision));
        }

        let override_template =
            self.store
                .get_config(&repository, CONFIG_SECTION, kind.config_key())?;

        if let Some(template) = override_template {
            debug!(
                "Using {CONFIG_SECTION}.{} override for {link_text}",
                kind.config_key()
            );
            return substitute(&template, &bindings).map_err(|e| e.with_link(&link_text));
        }

        let url = self
            .store
            .get_remote_url(&repository, &remote)?
            .ok_or_else(|| OrgitError::no_public_url(&link_text))?;
        let found = self
            .patterns
            .find(&url)
            .ok_or_else(|| OrgitError::no_public_url(&link_text))?;

        debug!(
            "Remote '{remote}' ({url}) matched '{}' with identifier '{}'",
            found.entry.host_pattern, found.identifier
        );
        bindings.push(('n', found.identifier.as_str()));
        substitute(found.template(kind), &bindings).map_err(|e| e.with_link(&link_text))
    }

    /// Resolve `address` and embed it for `format`.
    ///
    /// `desc` is the link description; when absent the URL itself is used.
    pub fn resolve(
        &self,
        address: &LinkAddress,
        kind: LinkKind,
        format: OutputFormat,
        desc: Option<&str>,
    ) -> Result<String> {
        let url = self.resolve_url(address, kind)?;
        Ok(format.wrap(&url, desc.unwrap_or(&url)))
    }

    /// Parse stored link text and resolve it.
    pub fn export(&self, link_text: &str, format: OutputFormat, desc: Option<&str>) -> Result<String> {
        let link = Link::parse(link_text)?;
        self.resolve(&link.address, link.kind, format, desc)
    }
}
