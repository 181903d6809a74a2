//! Storing links from, and opening links into, repository views.
//!
//! The calling environment describes what it is showing with a [`View`]
//! (status, log or a single commit of some repository). [`store_link`]
//! dispatches on the [`ViewKind`] to produce the stored link text and a
//! default description; [`open_link`] goes the other way and checks that a
//! stored link still points at something that exists locally.
//!
//! Log views showing several revisions are stored with their first revision
//! only. The link encoding has room for one revision, so the rest are
//! dropped with a warning.

use crate::core::{
    config::{RevisionStyle, Settings},
    error::{OrgitError, Result},
    git::GitRepo,
    link::{Link, LinkAddress, LinkKind},
    template::substitute,
};
use log::warn;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Kind of repository view a link is stored from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Status,
    Log,
    Commit,
}

impl From<ViewKind> for LinkKind {
    fn from(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Status => LinkKind::Status,
            ViewKind::Log => LinkKind::Log,
            ViewKind::Commit => LinkKind::Commit,
        }
    }
}

/// What the environment is currently showing.
#[derive(Debug, Clone)]
pub struct View {
    pub kind: ViewKind,
    /// Any directory inside the repository
    pub directory: PathBuf,
    /// Revisions shown by the view, in display order
    pub revisions: Vec<String>,
}

impl View {
    pub fn new(kind: ViewKind, directory: impl Into<PathBuf>, revisions: Vec<String>) -> Self {
        Self {
            kind,
            directory: directory.into(),
            revisions,
        }
    }
}

/// Link text plus its default description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredLink {
    pub link: String,
    pub description: String,
}

/// Local target of a stored link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    pub kind: LinkKind,
    pub repository: PathBuf,
    pub revision: Option<String>,
}

/// Build the stored link for `view`.
pub fn store_link(view: &View, settings: &Settings) -> Result<StoredLink> {
    let git_repo = GitRepo::discover(&view.directory)?;
    let workdir = git_repo.get_workdir();

    let revision = match view.kind {
        ViewKind::Status => None,
        ViewKind::Log => Some(first_revision(view)?.to_string()),
        ViewKind::Commit => {
            let revision = first_revision(view)?;
            Some(apply_revision_style(&git_repo, revision, settings.revision_style)?)
        }
    };

    let kind = LinkKind::from(view.kind);
    let link = Link::new(kind, LinkAddress::from_path(&workdir, revision.clone())?)?;
    let description = describe(&workdir, revision.as_deref(), settings.description_template(kind))?;

    Ok(StoredLink {
        link: link.to_string(),
        description,
    })
}

/// Check that `link` points at an existing repository and revision.
///
/// Commit links report the full object id; log links keep their revision
/// text, which may be a range.
pub fn open_link(link: &Link) -> Result<LinkTarget> {
    let repository = link.address.expanded_repository();
    let git_repo = GitRepo::open(&repository)?;

    let revision = match (link.kind, link.address.revision()) {
        (LinkKind::Commit, Some(revision)) => Some(git_repo.resolve_revision(revision)?),
        (LinkKind::Log, Some(revision)) => {
            git_repo.verify_revspec(revision)?;
            Some(revision.to_string())
        }
        _ => None,
    };

    Ok(LinkTarget {
        kind: link.kind,
        repository: git_repo.get_workdir(),
        revision,
    })
}

fn first_revision(view: &View) -> Result<&str> {
    let (first, rest) = view.revisions.split_first().ok_or_else(|| {
        OrgitError::malformed_link(view.directory.display().to_string(), "missing revision")
    })?;
    if !rest.is_empty() {
        warn!(
            "View shows {} revisions; only '{first}' is stored",
            view.revisions.len()
        );
    }
    Ok(first.as_str())
}

fn apply_revision_style(git_repo: &GitRepo, revision: &str, style: RevisionStyle) -> Result<String> {
    match style {
        RevisionStyle::AsGiven => Ok(revision.to_string()),
        RevisionStyle::Full => git_repo.resolve_revision(revision),
        RevisionStyle::Short => git_repo.abbreviate_revision(revision),
    }
}

fn describe(workdir: &Path, revision: Option<&str>, template: &str) -> Result<String> {
    let name = workdir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let mut bindings = vec![('N', name)];
    if let Some(revision) = revision {
        bindings.push(('R', revision));
    }
    substitute(template, &bindings)
}
