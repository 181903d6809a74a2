//! Orgit Export - store links to repository views and export them as public web URLs.
//!
//! Links are stored in documents as compact text (`orgit:<path>`,
//! `orgit-log:<path>::<rev>`, `orgit-rev:<path>::<rev>`). When a document is
//! exported, each link is resolved against the repository's configuration
//! into a URL on the hosting provider that shows the same status page, log
//! or commit.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Link parsing and serialization
//! - Public remote selection and the remote pattern table
//! - The export resolver and output formats
//! - Storing links from views and opening stored links
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    default_patterns,
    open_link,
    select_remote,
    store_link,
    substitute,
    // Configuration
    ConfigStore,
    GitConfigStore,
    GitRepo,
    // Link encoding
    Link,
    LinkAddress,
    LinkKind,
    // Resolution
    LinkResolver,
    LinkTarget,
    MemoryConfigStore,
    // Error handling
    OrgitError,
    OutputFormat,
    PatternMatch,
    RemotePatternEntry,
    RemotePatternTable,
    Result,
    RevisionStyle,
    Settings,
    StoredLink,
    // Views
    View,
    ViewKind,
    DEFAULT_REMOTE,
};
