//! Selection of the public remote of a repository.

use log::debug;

/// Pick the remote whose URL represents the repository publicly.
///
/// Precedence, first hit wins:
/// 1. the only configured remote, whatever its name
/// 2. `preferred` (`orgit.remote`) if it names a configured remote
/// 3. `default_remote` if it names a configured remote
///
/// Returns `None` when nothing qualifies, including when there are no
/// remotes at all.
pub fn select_remote<'a>(
    remotes: &'a [String],
    preferred: Option<&str>,
    default_remote: &str,
) -> Option<&'a str> {
    if let [only] = remotes {
        debug!("Using only configured remote '{only}'");
        return Some(only.as_str());
    }

    if let Some(remote) = preferred.and_then(|name| find(remotes, name)) {
        debug!("Using preferred remote '{remote}'");
        return Some(remote);
    }

    let remote = find(remotes, default_remote);
    match remote {
        Some(remote) => debug!("Using default remote '{remote}'"),
        None => debug!("No public remote among {remotes:?}"),
    }
    remote
}

fn find<'a>(remotes: &'a [String], name: &str) -> Option<&'a str> {
    remotes
        .iter()
        .find(|remote| remote.as_str() == name)
        .map(String::as_str)
}
