use crate::core::{
    error::Result,
    print_field,
    view::{store_link, View, ViewKind},
    Settings,
};
use std::path::PathBuf;

/// Print the link stored for a view of the repository at `directory`.
pub fn execute_store(
    kind: ViewKind,
    directory: PathBuf,
    revisions: Vec<String>,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let view = View::new(kind, directory, revisions);
    let stored = store_link(&view, settings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stored)?);
    } else {
        print_field("Link", &stored.link);
        print_field("Description", &stored.description);
    }
    Ok(())
}
