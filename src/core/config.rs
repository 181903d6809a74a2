//! Process-wide settings.
//!
//! Repository-scoped configuration (`orgit.remote`, `orgit.status`, ...) is
//! read through [`crate::core::config_store::ConfigStore`]. The settings here
//! apply to every repository: the default remote name, the remote pattern
//! table, description templates for stored links and how commit revisions
//! are written into stored links.

use crate::core::dirs::get_config_directory;
use crate::core::error::{OrgitError, Result};
use crate::core::link::LinkKind;
use crate::core::patterns::{default_patterns, RemotePatternEntry, RemotePatternTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_REMOTE: &str = "origin";

/// How a commit revision is written into a stored link.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RevisionStyle {
    /// Keep the revision exactly as the view supplied it
    #[default]
    AsGiven,
    /// Full object id
    Full,
    /// Shortest unambiguous object id
    Short,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub default_remote: String,
    pub export_patterns: Vec<RemotePatternEntry>,
    pub status_description: String,
    pub log_description: String,
    pub commit_description: String,
    pub revision_style: RevisionStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_remote: DEFAULT_REMOTE.to_string(),
            export_patterns: default_patterns(),
            status_description: "%N (magit)".to_string(),
            log_description: "%N (magit log %R)".to_string(),
            commit_description: "%N (magit rev %R)".to_string(),
            revision_style: RevisionStyle::default(),
        }
    }
}

impl Settings {
    /// Load `config.json` from the user config directory, or defaults when
    /// there is none.
    pub fn load() -> Result<Self> {
        let config_file = get_config_directory()?.join("config.json");
        Self::load_from(&config_file)
    }

    /// Load settings from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| OrgitError::config_parse(path, e))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Compile the configured pattern table
    pub fn pattern_table(&self) -> Result<RemotePatternTable> {
        RemotePatternTable::new(self.export_patterns.clone())
    }

    pub fn description_template(&self, kind: LinkKind) -> &str {
        match kind {
            LinkKind::Status => &self.status_description,
            LinkKind::Log => &self.log_description,
            LinkKind::Commit => &self.commit_description,
        }
    }
}
