use crate::core::{
    error::Result,
    git::GitConfigStore,
    resolver::{LinkResolver, OutputFormat},
    Settings,
};

/// Resolve one stored link and print the exported text.
pub fn execute_export(
    link: &str,
    format: OutputFormat,
    desc: Option<&str>,
    settings: &Settings,
) -> Result<()> {
    let resolver = LinkResolver::from_settings(GitConfigStore, settings)?;
    let exported = resolver.export(link, format, desc)?;
    println!("{exported}");
    Ok(())
}
