use orgit_export::core::{
    error::OrgitError, store_link, GitConfigStore, Link, LinkAddress, LinkKind, LinkResolver,
    OutputFormat, Settings, View, ViewKind,
};

mod common;
use common::repository::*;

#[cfg(test)]
mod resolver_tests {
    use super::*;

    #[test]
    fn test_resolve_commit_against_real_repository() -> anyhow::Result<()> {
        let repo = setup_github_repo()?;
        let resolver = LinkResolver::with_defaults(GitConfigStore);
        let address = LinkAddress::new(repo.link_path(), Some("deadbeef".to_string()))?;

        let url = resolver.resolve(&address, LinkKind::Commit, OutputFormat::PlainText, Some("DESC"))?;
        assert_eq!(url, "https://github.com/alice/proj/commit/deadbeef");
        Ok(())
    }

    #[test]
    fn test_override_changes_are_seen_without_rebuilding() -> anyhow::Result<()> {
        let repo = setup_github_repo()?;
        let resolver = LinkResolver::with_defaults(GitConfigStore);
        let address = LinkAddress::new(repo.link_path(), Some("deadbeef".to_string()))?;

        let before = resolver.resolve_url(&address, LinkKind::Commit)?;
        set_config(&repo.path, "orgit.rev", "http://example.com/revision/%r")?;
        let after = resolver.resolve_url(&address, LinkKind::Commit)?;

        assert_eq!(before, "https://github.com/alice/proj/commit/deadbeef");
        assert_eq!(after, "http://example.com/revision/deadbeef");
        Ok(())
    }

    #[test]
    fn test_single_remote_ignores_default_name() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        add_remote(&repo.path, "mirror", "git@codeberg.org:alice/proj.git")?;
        set_config(&repo.path, "orgit.remote", "does-not-exist")?;

        let resolver = LinkResolver::with_defaults(GitConfigStore);
        let address = LinkAddress::new(repo.link_path(), None)?;
        assert_eq!(
            resolver.resolve_url(&address, LinkKind::Status)?,
            "https://codeberg.org/alice/proj"
        );
        Ok(())
    }

    #[test]
    fn test_no_remote_names_repository() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        let resolver = LinkResolver::with_defaults(GitConfigStore);
        let address = LinkAddress::new(repo.link_path(), None)?;

        let err = resolver.resolve_url(&address, LinkKind::Status).unwrap_err();
        assert!(matches!(err, OrgitError::NoPublicRemote { .. }));
        assert!(err.to_string().contains(&repo.link_path()));
        Ok(())
    }

    #[test]
    fn test_missing_repository() -> anyhow::Result<()> {
        let resolver = LinkResolver::with_defaults(GitConfigStore);
        let result = resolver.export(
            "orgit:/definitely/not/a/repository",
            OutputFormat::PlainText,
            None,
        );
        assert!(matches!(result, Err(OrgitError::RepositoryNotFound { .. })));
        Ok(())
    }

    #[test]
    fn test_stored_link_exports() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        add_remote(&repo.path, "origin", "https://github.com/alice/proj.git")?;
        let head = head_id(&repo.path)?;

        let settings = Settings::default();
        let view = View::new(ViewKind::Commit, &repo.path, vec![head.clone()]);
        let stored = store_link(&view, &settings)?;
        assert_eq!(Link::parse(&stored.link)?.kind, LinkKind::Commit);

        let resolver = LinkResolver::from_settings(GitConfigStore, &settings)?;
        let html = resolver.export(&stored.link, OutputFormat::Html, Some(stored.description.as_str()))?;
        assert_eq!(
            html,
            format!(
                "<a href=\"https://github.com/alice/proj/commit/{head}\">proj (magit rev {head})</a>"
            )
        );
        Ok(())
    }
}
