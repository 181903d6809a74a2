//! Core functionality for storing and exporting repository links.
//!
//! This module provides the link encoding, the configuration seams and the
//! resolution engine that turns stored links into public web URLs.

pub mod config;
pub mod config_store;
pub mod dirs;
pub mod error;
pub mod git;
pub mod link;
pub mod output;
pub mod patterns;
pub mod remote;
pub mod resolver;
pub mod template;
pub mod view;

// === Error handling ===
pub use error::{OrgitError, Result};

// === Link encoding ===
// `orgit:`, `orgit-log:` and `orgit-rev:` link text
pub use link::{Link, LinkAddress, LinkKind};

// === Configuration ===
// Process-wide settings and the repository-scoped config seam
pub use config::{RevisionStyle, Settings, DEFAULT_REMOTE};
pub use config_store::{ConfigStore, MemoryConfigStore};
pub use git::{GitConfigStore, GitRepo};

// === Resolution ===
pub use patterns::{default_patterns, PatternMatch, RemotePatternEntry, RemotePatternTable};
pub use remote::select_remote;
pub use resolver::{LinkResolver, OutputFormat};
pub use template::substitute;

// === Views ===
// Storing links from a view and opening them again
pub use view::{open_link, store_link, LinkTarget, StoredLink, View, ViewKind};

// === Output formatting ===
pub use output::{print_error, print_field, print_note};
