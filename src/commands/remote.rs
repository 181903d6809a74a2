use crate::core::{
    error::Result,
    git::{GitConfigStore, GitRepo},
    link::LinkAddress,
    print_field, print_note,
    resolver::LinkResolver,
    Settings,
};
use std::path::Path;

/// Print the public remote of the repository containing `directory` and
/// the pattern-table row its URL matches.
pub fn execute_remote(directory: &Path, settings: &Settings) -> Result<()> {
    let git_repo = GitRepo::discover(directory)?;
    let address = LinkAddress::from_path(&git_repo.get_workdir(), None)?;

    let resolver = LinkResolver::from_settings(GitConfigStore, settings)?;
    let remote = resolver.public_remote(&address)?;
    print_field("Remote", &remote);

    let Some(url) = git_repo.get_remote_url(&remote)? else {
        print_note("Remote has no URL");
        return Ok(());
    };
    print_field("URL", &url);

    let table = settings.pattern_table()?;
    match table.find(&url) {
        Some(found) => {
            print_field("Identifier", &found.identifier);
            print_note(&format!("Matched pattern {}", found.entry.host_pattern));
        }
        None => print_note("No export pattern matches this URL"),
    }
    Ok(())
}
