use crate::core::{
    error::Result,
    link::Link,
    print_field,
    view::open_link,
};

/// Check a stored link and print where it points locally.
pub fn execute_open(link: &str, json: bool) -> Result<()> {
    let link = Link::parse(link)?;
    let target = open_link(&link)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&target)?);
        return Ok(());
    }

    print_field("Kind", &target.kind.to_string());
    print_field("Repository", &target.repository.display().to_string());
    if let Some(revision) = &target.revision {
        print_field("Revision", revision);
    }
    Ok(())
}
