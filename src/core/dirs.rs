use crate::core::error::OrgitError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, OrgitError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => {
            std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config"))
        },
        "macos" => {
            dirs::home_dir()
                .unwrap_or_default()
                .join("Library/Application Support")
        },
        "windows" => {
            dirs::config_dir().unwrap_or_default()
        },
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join("orgit"))
}

/// Expand a leading `~` or `~/` to the home directory.
///
/// Other `~user` forms are returned untouched.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home,
        Some(home) => home.join(rest),
        None => PathBuf::from(path),
    }
}
