use crate::core::{dirs::get_config_directory, error::Result, print_note, Settings};
use std::path::{Path, PathBuf};

/// Print the effective settings, optionally writing them to disk first.
pub fn execute_config(path: Option<&Path>, write: bool, settings: &Settings) -> Result<()> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => get_config_directory()?.join("config.json"),
    };

    // Validate the pattern table before showing or persisting it.
    let table = settings.pattern_table()?;

    if write {
        settings.save_to(&path)?;
        print_note(&format!("Wrote {}", path.display()));
    }

    println!("{}", serde_json::to_string_pretty(settings)?);
    print_note(&format!(
        "{} export patterns, settings file {}",
        table.len(),
        path.display()
    ));
    Ok(())
}
